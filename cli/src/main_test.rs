use super::*;
use agentdesk::TokenStorage;

fn user(username: &str, full_name: &str) -> User {
    User {
        id: 7,
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        full_name: full_name.to_owned(),
        avatar: None,
        created_at: "2024-01-01T00:00:00".to_owned(),
        updated_at: "2024-01-01T00:00:00".to_owned(),
    }
}

#[test]
fn route_for_guest_on_protected_path_reports_redirect_to_login() {
    let line = describe_resolution("/chat", guard::resolve("/chat", false));
    assert_eq!(line, "redirect /chat -> /login (Login)");
}

#[test]
fn route_for_signed_in_user_on_login_reports_redirect_to_chat() {
    let line = describe_resolution("/login", guard::resolve("/login", true));
    assert_eq!(line, "redirect /login -> /chat (Chat)");
}

#[test]
fn route_reports_proceed_and_not_found() {
    assert_eq!(describe_resolution("/", guard::resolve("/", false)), "proceed / (Home)");
    assert_eq!(describe_resolution("/nowhere", guard::resolve("/nowhere", true)), "not found /nowhere");
}

#[test]
fn first_line_strips_newline_and_rejects_empty() {
    assert_eq!(first_line("hunter2\n").as_deref(), Some("hunter2"));
    assert_eq!(first_line("with space \r\n").as_deref(), Some("with space "));
    assert_eq!(first_line("\n"), None);
    assert_eq!(first_line(""), None);
}

#[test]
fn display_name_prefers_full_name() {
    assert_eq!(display_name(&user("alice", "Alice Liddell")), "Alice Liddell");
    assert_eq!(display_name(&user("alice", "  ")), "alice");
}

#[test]
fn status_line_reflects_flag() {
    assert_eq!(status_line(true), "authenticated");
    assert_eq!(status_line(false), "not authenticated");
}

#[test]
fn cli_parses_login_with_overrides() {
    let cli = Cli::try_parse_from([
        "agentdesk",
        "--base-url",
        "http://gateway:9000",
        "--timeout-ms",
        "250",
        "--token-file",
        "/tmp/tok",
        "login",
        "--username",
        "alice",
        "--password",
        "pw",
    ])
    .unwrap();
    assert_eq!(cli.base_url, "http://gateway:9000");
    assert_eq!(cli.timeout_ms, 250);
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/tok")));
    match cli.command {
        Command::Login { username, password } => {
            assert_eq!(username, "alice");
            assert_eq!(password.as_deref(), Some("pw"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn cli_parses_route_subcommand() {
    let cli = Cli::try_parse_from(["agentdesk", "route", "/settings"]).unwrap();
    assert!(matches!(cli.command, Command::Route { path } if path == "/settings"));
}

#[test]
fn ensure_guest_refuses_when_signed_in() {
    assert!(ensure_guest(false).is_ok());
    assert!(matches!(ensure_guest(true), Err(CliError::AlreadySignedIn)));
}

#[tokio::test]
async fn login_with_stored_session_is_refused_and_keeps_token() {
    let dir = std::env::temp_dir().join(format!("agentdesk-cli-{}", uuid::Uuid::new_v4()));
    let path = dir.join("token");
    FileTokenStorage::new(&path).save("good");

    // Port 9 (discard) is never contacted: the guard refuses first.
    let config = ApiConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(50));
    let store = build_store(config, FileTokenStorage::new(&path)).unwrap();
    let result = run_login(&store, "alice", Some("wrong".to_owned())).await;

    assert!(matches!(result, Err(CliError::AlreadySignedIn)));
    assert!(store.is_authenticated());
    assert_eq!(FileTokenStorage::new(&path).load().as_deref(), Some("good"));
    let _ = std::fs::remove_dir_all(dir);
}
