//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The authoritative session lives in the core `SessionContext`; `auth` is
//! its reactive mirror for rendering and guards.

pub mod auth;
