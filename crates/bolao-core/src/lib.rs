//! Service plumbing shared across the bolão workspace.
//!
//! Health handlers, tracing setup, serde helpers, and HTTP middleware.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
