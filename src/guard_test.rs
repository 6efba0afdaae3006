use super::*;

// =============================================================
// evaluate
// =============================================================

#[test]
fn requires_auth_redirects_guests_to_login() {
    assert_eq!(evaluate(Access::RequiresAuth, false), Decision::Redirect(View::Login));
}

#[test]
fn requires_auth_lets_authenticated_through() {
    assert_eq!(evaluate(Access::RequiresAuth, true), Decision::Proceed);
}

#[test]
fn requires_guest_redirects_authenticated_to_chat() {
    assert_eq!(evaluate(Access::RequiresGuest, true), Decision::Redirect(View::Chat));
}

#[test]
fn requires_guest_lets_guests_through() {
    assert_eq!(evaluate(Access::RequiresGuest, false), Decision::Proceed);
}

#[test]
fn public_always_proceeds() {
    assert_eq!(evaluate(Access::Public, false), Decision::Proceed);
    assert_eq!(evaluate(Access::Public, true), Decision::Proceed);
}

#[test]
fn every_auth_route_redirects_unauthenticated_to_login() {
    for route in ROUTES.iter().filter(|r| r.access == Access::RequiresAuth) {
        assert_eq!(
            resolve(route.path, false),
            Resolution::Redirect(View::Login.route()),
            "route {}",
            route.path
        );
    }
}

#[test]
fn every_guest_route_redirects_authenticated_to_chat() {
    for route in ROUTES.iter().filter(|r| r.access == Access::RequiresGuest) {
        assert_eq!(
            resolve(route.path, true),
            Resolution::Redirect(View::Chat.route()),
            "route {}",
            route.path
        );
    }
}

// =============================================================
// route table
// =============================================================

#[test]
fn table_matches_declared_access() {
    assert_eq!(View::Home.access(), Access::Public);
    assert_eq!(View::Login.access(), Access::RequiresGuest);
    assert_eq!(View::Register.access(), Access::RequiresGuest);
    assert_eq!(View::Chat.access(), Access::RequiresAuth);
    assert_eq!(View::Profile.access(), Access::RequiresAuth);
    assert_eq!(View::Settings.access(), Access::RequiresAuth);
}

#[test]
fn every_view_has_exactly_one_route() {
    for view in [View::Home, View::Login, View::Register, View::Chat, View::Profile, View::Settings] {
        assert_eq!(ROUTES.iter().filter(|r| r.view == view).count(), 1, "{}", view.name());
        assert_eq!(view.route().view, view);
    }
}

#[test]
fn view_paths() {
    assert_eq!(View::Login.path(), "/login");
    assert_eq!(View::Chat.path(), "/chat");
    assert_eq!(View::Home.path(), "/");
}

#[test]
fn find_route_tolerates_trailing_slash_query_and_fragment() {
    assert_eq!(find_route("/chat/").map(|r| r.view), Some(View::Chat));
    assert_eq!(find_route("/login?next=/chat").map(|r| r.view), Some(View::Login));
    assert_eq!(find_route("/profile#avatar").map(|r| r.view), Some(View::Profile));
    assert_eq!(find_route("").map(|r| r.view), Some(View::Home));
}

#[test]
fn find_route_unknown_path() {
    assert_eq!(find_route("/admin"), None);
    assert_eq!(find_route("/chat/extra"), None);
}

// =============================================================
// resolve
// =============================================================

#[test]
fn authenticated_visit_to_login_lands_on_chat() {
    let resolution = resolve("/login", true);
    assert_eq!(resolution, Resolution::Redirect(View::Chat.route()));
    let Resolution::Redirect(route) = resolution else { panic!("expected redirect") };
    assert_eq!(route.path, "/chat");
}

#[test]
fn allowed_navigation_proceeds_to_destination() {
    assert_eq!(resolve("/settings", true), Resolution::Proceed(View::Settings.route()));
    assert_eq!(resolve("/register", false), Resolution::Proceed(View::Register.route()));
    assert_eq!(resolve("/", false), Resolution::Proceed(View::Home.route()));
}

#[test]
fn unknown_path_is_not_found_regardless_of_session() {
    assert_eq!(resolve("/nope", true), Resolution::NotFound);
    assert_eq!(resolve("/nope", false), Resolution::NotFound);
}
