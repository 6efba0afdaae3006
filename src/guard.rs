//! Static route table and the pre-navigation access check.
//!
//! DESIGN
//! ======
//! The guard is a pure function of (destination access requirement,
//! authenticated flag). Rules are evaluated in order, first match wins:
//!
//! 1. `RequiresAuth` and not authenticated  -> redirect to Login
//! 2. `RequiresGuest` and authenticated     -> redirect to Chat
//! 3. otherwise                             -> proceed
//!
//! Nothing is retained between navigations and the backend is never contacted.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Access requirement declared by a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Access {
    #[default]
    Public,
    RequiresAuth,
    RequiresGuest,
}

/// Views the app can route to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    Login,
    Register,
    Chat,
    Profile,
    Settings,
}

impl View {
    #[must_use]
    pub fn path(self) -> &'static str {
        self.route().path
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Chat => "Chat",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }

    /// The table entry for this view.
    #[must_use]
    pub fn route(self) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|route| route.view == self)
            .unwrap_or(&ROUTES[0])
    }

    #[must_use]
    pub fn access(self) -> Access {
        self.route().access
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub view: View,
    pub access: Access,
}

/// Where guests land when they need to sign in.
pub const LOGIN_VIEW: View = View::Login;
/// Where signed-in users land when they hit a guest-only page.
pub const AUTHENTICATED_LANDING_VIEW: View = View::Chat;

pub const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor { path: "/", view: View::Home, access: Access::Public },
    RouteDescriptor { path: "/login", view: View::Login, access: Access::RequiresGuest },
    RouteDescriptor { path: "/register", view: View::Register, access: Access::RequiresGuest },
    RouteDescriptor { path: "/chat", view: View::Chat, access: Access::RequiresAuth },
    RouteDescriptor { path: "/profile", view: View::Profile, access: Access::RequiresAuth },
    RouteDescriptor { path: "/settings", view: View::Settings, access: Access::RequiresAuth },
];

/// Guard verdict for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(View),
}

/// Apply the guard rules to a destination's access requirement.
#[must_use]
pub fn evaluate(access: Access, is_authenticated: bool) -> Decision {
    match access {
        Access::RequiresAuth if !is_authenticated => Decision::Redirect(LOGIN_VIEW),
        Access::RequiresGuest if is_authenticated => Decision::Redirect(AUTHENTICATED_LANDING_VIEW),
        _ => Decision::Proceed,
    }
}

/// Look `path` up in the route table. Query string, fragment and a
/// trailing slash are ignored.
#[must_use]
pub fn find_route(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Outcome of resolving a navigation request against the table and guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Render the requested route.
    Proceed(&'static RouteDescriptor),
    /// Navigate to this route instead.
    Redirect(&'static RouteDescriptor),
    /// No such route; the front end renders its fallback.
    NotFound,
}

/// Resolve a navigation to `path` for a session with the given flag.
#[must_use]
pub fn resolve(path: &str, is_authenticated: bool) -> Resolution {
    let Some(route) = find_route(path) else {
        return Resolution::NotFound;
    };
    match evaluate(route.access, is_authenticated) {
        Decision::Proceed => Resolution::Proceed(route),
        Decision::Redirect(view) => Resolution::Redirect(view.route()),
    }
}
