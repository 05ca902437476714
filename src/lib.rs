//! ShaadiVerse - Wedding-Planning Backend
//!
//! Backend service for the ShaadiVerse wedding-planning application:
//! phone-based registration, pairing two users into a couple via
//! invitation codes, a multi-step virtual-ceremony progression,
//! poll-based chat between paired users, and stub certificate records.
//!
//! # Overview
//!
//! The service is a thin set of request/response handlers over a
//! PostgreSQL store. Handlers share nothing in memory; the connection
//! pool is the only collaborator and is injected through the
//! application state rather than held in a global, so tests can
//! substitute their own backend.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - HTTP route registration and router assembly
//! - **`error`** - API error types and HTTP conversion
//! - **`auth`** - Phone registration/login
//! - **`pairing`** - Invitation codes and couple formation
//! - **`ceremony`** - Ceremony step progression
//! - **`chat`** - Poll-based chat
//! - **`certificate`** - Stub certificate records
//! - **`diagnostics`** - Liveness and store status
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, ApiError>`; the error converts to
//! a JSON body with the appropriate status code. The taxonomy is
//! minimal: domain not-found conditions answer 404, a missing database
//! answers 503, and everything else propagates as 500.
//!
//! # Usage
//!
//! ```rust,no_run
//! use shaadiverse::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Serve app with Axum
//! # }
//! ```

/// Phone registration/login
pub mod auth;

/// Ceremony step progression
pub mod ceremony;

/// Stub certificate records
pub mod certificate;

/// Poll-based chat
pub mod chat;

/// Liveness and store status
pub mod diagnostics;

/// API error types
pub mod error;

/// Invitation codes and couple formation
pub mod pairing;

/// Route configuration
pub mod routes;

/// Server setup and configuration
pub mod server;
