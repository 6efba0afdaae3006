//! Command-line front end for the agentdesk gateway.
//!
//! Drives the same session store and route guard as the browser client, with
//! the token kept in a file instead of `localStorage`.

mod token_file;
mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use agentdesk::guard::{self, Decision, Resolution};
use agentdesk::{ApiClient, ApiConfig, ApiError, LogoutOutcome, RegisterRequest, SessionContext, SessionStore, User, View};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use crate::token_file::{FileTokenStorage, default_token_path};
use crate::transport::ReqwestTransport;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8100";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("already signed in; run `agentdesk logout` first")]
    AlreadySignedIn,
    #[error("cannot locate token file; pass --token-file or set AGENTDESK_TOKEN_FILE")]
    MissingTokenPath,
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("missing required input `{0}`")]
    MissingInput(&'static str),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "agentdesk", about = "agentdesk session and routing CLI")]
struct Cli {
    #[arg(long, env = "AGENTDESK_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "AGENTDESK_TIMEOUT_MS", default_value_t = agentdesk::config::DEFAULT_REQUEST_TIMEOUT_MS)]
    timeout_ms: u64,

    #[arg(long, env = "AGENTDESK_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Log each request at debug level.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Exchange credentials for a token and cache the profile.
    Login {
        #[arg(long)]
        username: String,
        /// Read from stdin when omitted.
        #[arg(long, env = "AGENTDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// End the session; the local token is dropped even if the server call fails.
    Logout,
    /// Fetch and print the signed-in user's profile.
    Profile,
    /// Create an account. Does not sign in.
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long, env = "AGENTDESK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Report whether a token is stored. Never contacts the server.
    Status,
    /// Print the guard's decision for navigating to `path`.
    Route { path: String },
}

type Store = SessionStore<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let token_path = match cli.token_file {
        Some(path) => path,
        None => default_token_path().ok_or(CliError::MissingTokenPath)?,
    };
    let config = ApiConfig::new(cli.base_url).with_timeout(Duration::from_millis(cli.timeout_ms));
    let store = build_store(config, FileTokenStorage::new(token_path))?;

    match cli.command {
        Command::Login { username, password } => run_login(&store, &username, password).await,
        Command::Logout => run_logout(&store).await,
        Command::Profile => run_profile(&store).await,
        Command::Register { username, email, full_name, password } => {
            let password = password_or_stdin(password)?;
            run_register(&store, RegisterRequest { username, password, email, full_name }).await
        }
        Command::Status => {
            println!("{}", status_line(store.is_authenticated()));
            Ok(())
        }
        Command::Route { path } => {
            println!("{}", describe_resolution(&path, guard::resolve(&path, store.is_authenticated())));
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
}

fn build_store(config: ApiConfig, storage: FileTokenStorage) -> Result<Store, CliError> {
    let client = reqwest::Client::builder().build()?;
    let session = SessionContext::restore(storage);
    let api = ApiClient::new(ReqwestTransport::new(client), config, session)
        .on_unauthorized(|| tracing::warn!("session rejected by server; stored token removed"));
    Ok(SessionStore::new(api))
}

async fn run_login(store: &Store, username: &str, password: Option<String>) -> Result<(), CliError> {
    ensure_guest(store.is_authenticated())?;
    let password = password_or_stdin(password)?;
    let user = store.login(username, &password).await?;
    println!("signed in as {}", display_name(&user));
    Ok(())
}

async fn run_logout(store: &Store) -> Result<(), CliError> {
    match store.logout().await {
        LogoutOutcome::Confirmed => println!("signed out"),
        LogoutOutcome::RemoteFailed(error) => println!("signed out locally (server said: {error})"),
    }
    Ok(())
}

async fn run_profile(store: &Store) -> Result<(), CliError> {
    let user = store.fetch_profile().await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

async fn run_register(store: &Store, request: RegisterRequest) -> Result<(), CliError> {
    store.register(&request).await?;
    println!("account `{}` created; run `agentdesk login` to sign in", request.username);
    Ok(())
}

/// Login is a guest-only view: a stored session must be ended first, so a
/// rejected password can never wipe it.
fn ensure_guest(authenticated: bool) -> Result<(), CliError> {
    match guard::evaluate(View::Login.access(), authenticated) {
        Decision::Proceed => Ok(()),
        Decision::Redirect(_) => Err(CliError::AlreadySignedIn),
    }
}

fn password_or_stdin(password: Option<String>) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    first_line(&line).ok_or(CliError::MissingInput("password"))
}

fn first_line(input: &str) -> Option<String> {
    let line = input.trim_end_matches(['\r', '\n']);
    (!line.is_empty()).then(|| line.to_owned())
}

fn display_name(user: &User) -> &str {
    let full_name = user.full_name.trim();
    if full_name.is_empty() { &user.username } else { full_name }
}

fn status_line(authenticated: bool) -> &'static str {
    if authenticated { "authenticated" } else { "not authenticated" }
}

fn describe_resolution(path: &str, resolution: Resolution) -> String {
    match resolution {
        Resolution::Proceed(route) => format!("proceed {} ({})", route.path, route.view.name()),
        Resolution::Redirect(route) => format!("redirect {path} -> {} ({})", route.path, route.view.name()),
        Resolution::NotFound => format!("not found {path}"),
    }
}
