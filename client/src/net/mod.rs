//! Networking bindings for the browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` implements the core `Transport` trait on top of `fetch`.
//! Endpoint paths, envelopes and error mapping live in `agentdesk::api`.

pub mod transport;
