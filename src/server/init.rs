/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * application: loading the database pool, building the application
 * state, and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool from configuration
 * 2. Build `AppState` around the injected pool
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * Initialization is resilient: a missing or unreachable database does
 * not prevent startup. The server runs degraded and the diagnostics
 * endpoint reports the condition.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Loads the database pool from the environment and assembles the
/// router around it.
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing ShaadiVerse backend server");

    let db_pool = load_database().await;

    create_app_with_pool(db_pool)
}

/// Create the application around an explicitly injected pool
///
/// Split out from [`create_app`] so tests can substitute their own
/// storage backend (or run with none at all).
pub fn create_app_with_pool(db: Option<sqlx::PgPool>) -> Router<()> {
    let app_state = AppState::new(db);

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
