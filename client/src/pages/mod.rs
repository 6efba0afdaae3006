//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not a page
//! concern: `app::App` wraps every page in `RouteGuard`.

pub mod chat;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod settings;
