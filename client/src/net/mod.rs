//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` loads the static user collection; `types` defines its wire schema,
//! shared with the server's startup check.

pub mod api;
pub mod types;
