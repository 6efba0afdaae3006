//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers kept out of page and component code: the
//! `localStorage` token slot and the guard/error glue.

pub mod auth;
pub mod storage;
