/**
 * Server Configuration
 *
 * This module handles loading of server configuration from environment
 * variables, focusing on the optional PostgreSQL database connection.
 *
 * # Configuration Sources
 *
 * - `PORT` - HTTP listen port (default 8000)
 * - `DATABASE_URL` - PostgreSQL connection string
 * - `DATABASE_NAME` - inspected for presence by diagnostics only
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database fails to initialize the pool is `None` and the
 * server continues; data handlers answer 503 and the diagnostics
 * endpoint reports the condition.
 */

use sqlx::PgPool;

/// Default HTTP listen port when `PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 8000;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<PgPool>;

/// Read the HTTP listen port from the `PORT` environment variable
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs database migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or the connection fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error, allowing the server to run degraded.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL is not set; running without a store");
            return None;
        }
    };

    tracing::info!("Opening PostgreSQL connection pool");

    let pool = match PgPool::connect(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Could not open connection pool: {:?}", e);
            tracing::warn!("Running without a store");
            return None;
        }
    };

    tracing::info!("Applying migrations");
    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(_) => {
            tracing::info!("Schema is up to date");
        }
        Err(e) => {
            // A partially migrated schema still serves most requests
            tracing::error!("Migration run failed: {:?}", e);
        }
    }

    Some(pool)
}
