//! # agentdesk
//!
//! Session, API gateway and route guard for the agentdesk single-page app.
//!
//! This crate is UI-framework agnostic so front ends can consume it directly:
//! the Leptos `client` binds it to `localStorage` and `fetch`, the `cli`
//! binds it to a token file and `reqwest`.
//!
//! ARCHITECTURE
//! ============
//! `SessionStore` (store) is the only component callers drive. It owns a
//! `SessionContext` (session) and an `ApiClient` (api). The API client reads
//! the bearer token from the same context and clears it on a 401. The route
//! guard (guard) is a pure function over the context's authenticated flag.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod session;
pub mod storage;
pub mod store;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, TransportError};
pub use guard::{Access, Decision, Resolution, RouteDescriptor, View};
pub use session::{Session, SessionContext};
pub use storage::{MemoryStorage, TOKEN_KEY, TokenStorage};
pub use store::{LogoutOutcome, SessionStore};
pub use transport::{HttpRequest, HttpResponse, Method, Transport};
pub use types::{Envelope, LoginResponse, RegisterRequest, User};
