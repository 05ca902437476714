/**
 * Diagnostics HTTP Handlers
 *
 * This module implements the liveness and store-status endpoints:
 *
 * - `GET /` - static liveness message
 * - `GET /test` - store connectivity report and up to 10 table names
 *
 * # Error Handling
 *
 * Unlike the data handlers, `/test` never fails the request: every
 * error is swallowed and reported as a string truncated to 50
 * characters. Environment variables are inspected for presence only.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Number of table names the status report lists at most
const MAX_LISTED_TABLES: i64 = 10;

/// Length error strings are truncated to in the status report
const ERROR_SNIPPET_LEN: usize = 50;

/// Store status report, field-compatible with the frontend's checks
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreStatus {
    /// Backend process status
    pub backend: String,
    /// Database availability / connectivity
    pub database: String,
    /// Whether DATABASE_URL is set
    pub database_url: String,
    /// Whether DATABASE_NAME is set
    pub database_name: String,
    /// Coarse connection state
    pub connection_status: String,
    /// Up to 10 table names visible in the store
    pub collections: Vec<String>,
}

/// Liveness handler for GET /
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "ShaadiVerse Backend Running" }))
}

/// Store status handler for GET /test
///
/// Reports static strings describing store connectivity and lists the
/// visible tables. Never returns an error status.
pub async fn store_status(State(pool): State<Option<PgPool>>) -> Json<StoreStatus> {
    let mut status = StoreStatus {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: String::new(),
        database_name: String::new(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(pool) = &pool {
        status.database = "✅ Available".to_string();
        status.connection_status = "Connected".to_string();

        match list_tables(pool).await {
            Ok(tables) => {
                status.collections = tables;
                status.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                status.database =
                    format!("⚠️  Connected but Error: {}", snippet(&e.to_string()));
            }
        }
    }

    status.database_url = presence("DATABASE_URL");
    status.database_name = presence("DATABASE_NAME");

    Json(status)
}

/// List up to 10 table names visible in the public schema
async fn list_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = 'public'
        ORDER BY table_name
        LIMIT $1
        "#,
    )
    .bind(MAX_LISTED_TABLES)
    .fetch_all(pool)
    .await
}

/// Report an environment variable's presence without exposing its value
fn presence(var: &str) -> String {
    if std::env::var(var).is_ok() {
        "✅ Set".to_string()
    } else {
        "❌ Not Set".to_string()
    }
}

/// Truncate an error string to the report snippet length
fn snippet(message: &str) -> String {
    message.chars().take(ERROR_SNIPPET_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snippet_truncates_long_messages() {
        let long = "x".repeat(200);
        assert_eq!(snippet(&long).len(), ERROR_SNIPPET_LEN);
    }

    #[test]
    fn test_snippet_keeps_short_messages() {
        assert_eq!(snippet("connection refused"), "connection refused");
    }

    #[tokio::test]
    async fn test_liveness_message() {
        let Json(body) = liveness().await;
        assert_eq!(body["message"], "ShaadiVerse Backend Running");
    }

    #[tokio::test]
    async fn test_store_status_without_pool() {
        let Json(status) = store_status(State(None)).await;
        assert_eq!(status.backend, "✅ Running");
        assert_eq!(status.database, "❌ Not Available");
        assert_eq!(status.connection_status, "Not Connected");
        assert!(status.collections.is_empty());
    }
}
