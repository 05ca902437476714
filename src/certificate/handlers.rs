/**
 * Certificate HTTP Handler
 *
 * Implements POST /certificate/generate. The endpoint only persists
 * the record; rendering the actual document is out of scope and must
 * be supplied by an external service if ever implemented.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::certificate::db::insert_certificate;
use crate::error::ApiError;

/// Request body for POST /certificate/generate
#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateCertificateRequest {
    /// Couple the certificate is for
    pub couple_id: Uuid,
    /// Display title to print on the certificate
    pub couple_title: String,
    /// Optional visual theme
    pub theme: Option<String>,
}

/// Response for POST /certificate/generate
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateCertificateResponse {
    /// Id of the stored certificate record
    pub certificate_id: String,
}

/// Generate a certificate record
///
/// Persists a stub record with the wedding date defaulted to now and
/// no rendered URL. Every call yields a fresh id, even for identical
/// input.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the insert fails
pub async fn generate_certificate(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<GenerateCertificateRequest>,
) -> Result<Json<GenerateCertificateResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let certificate = insert_certificate(
        &pool,
        request.couple_id,
        &request.couple_title,
        request.theme.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to insert certificate: {:?}", e);
        ApiError::from(e)
    })?;

    tracing::info!(
        "Certificate {} generated for couple {}",
        certificate.id,
        request.couple_id
    );

    Ok(Json(GenerateCertificateResponse {
        certificate_id: certificate.id.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_theme_is_optional() {
        let request: GenerateCertificateRequest = serde_json::from_str(
            r#"{"couple_id": "123e4567-e89b-12d3-a456-426614174000", "couple_title": "Priya & Arjun"}"#,
        )
        .unwrap();
        assert_eq!(request.couple_title, "Priya & Arjun");
        assert_eq!(request.theme, None);
    }
}
