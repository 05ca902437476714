/**
 * Application State Management
 *
 * This module defines the application state structure shared by all
 * request handlers.
 *
 * # Architecture
 *
 * `AppState` holds the single external collaborator of this service:
 * the PostgreSQL connection pool. The pool is injected at construction
 * time rather than read from a global, so tests can substitute their
 * own backend (or none at all).
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted and safe to clone across
 * handlers; no other shared mutable state exists in this service.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers extract
 * `State<Option<PgPool>>` directly when they only need the pool.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db` - Optional PostgreSQL connection pool. `None` when
///   `DATABASE_URL` is unset or the pool could not be created; the
///   server still boots and reports the condition via diagnostics.
#[derive(Clone)]
pub struct AppState {
    /// Optional database connection pool
    pub db: Option<PgPool>,
}

impl AppState {
    /// Create application state around an injected pool
    pub fn new(db: Option<PgPool>) -> Self {
        Self { db }
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
