//! API Error Module
//!
//! This module defines the error types used by the HTTP handlers and
//! their conversion into HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Taxonomy
//!
//! The taxonomy is deliberately minimal:
//!
//! - `NotFound` - A domain lookup failed (invalid/used invite code, no
//!   ceremony state). Surfaced as HTTP 404 with a short message.
//! - `Unavailable` - The database pool is not configured. HTTP 503.
//! - `Database` - Any storage failure, passed through without
//!   domain-specific translation. HTTP 500.
//!
//! All variants implement `IntoResponse`, so handlers can return
//! `Result<Json<T>, ApiError>` and use the `?` operator throughout.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
