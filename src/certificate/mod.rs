//! Certificate Module
//!
//! Stub certificate records. Every call to the generate endpoint
//! persists a fresh record; actual document rendering is an external
//! collaborator that is never invoked, so `certificate_url` stays
//! unset.

/// Certificate model and database operations
pub mod db;

/// HTTP handler for certificate generation
pub mod handlers;

pub use handlers::generate_certificate;
