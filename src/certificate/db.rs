/**
 * Database Operations for Certificates
 *
 * Certificate records are insert-only stubs: `wedding_date` defaults
 * to the generation time (not the couple's planned date) and
 * `certificate_url` stays NULL until a rendering service exists.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A generated certificate record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Certificate {
    /// Unique certificate ID
    pub id: Uuid,
    /// Couple the certificate is for
    pub couple_id: Uuid,
    /// Display title to print on the certificate
    pub couple_title: String,
    /// Date stamped on the certificate (generation time)
    pub wedding_date: DateTime<Utc>,
    /// Visual theme
    pub theme: Option<String>,
    /// Rendered document URL (always None, rendering is stubbed)
    pub certificate_url: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Insert a certificate record
///
/// Always creates a fresh row, even for identical input.
pub async fn insert_certificate(
    pool: &PgPool,
    couple_id: Uuid,
    couple_title: &str,
    theme: Option<&str>,
) -> Result<Certificate, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let certificate = sqlx::query_as::<_, Certificate>(
        r#"
        INSERT INTO certificates (id, couple_id, couple_title, wedding_date, theme, certificate_url, created_at)
        VALUES ($1, $2, $3, $4, $5, NULL, $4)
        RETURNING id, couple_id, couple_title, wedding_date, theme, certificate_url, created_at
        "#,
    )
    .bind(id)
    .bind(couple_id)
    .bind(couple_title)
    .bind(now)
    .bind(theme)
    .fetch_one(pool)
    .await?;

    Ok(certificate)
}
