//! Diagnostics Module
//!
//! Liveness and store-status endpoints for operational visibility.
//! These are the only handlers that swallow errors: the status
//! endpoint reports failures as truncated strings rather than failing
//! the request.

/// HTTP handlers for diagnostics
pub mod handlers;

pub use handlers::{liveness, store_status};
