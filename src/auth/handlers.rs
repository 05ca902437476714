/**
 * Phone Login Handler
 *
 * This module implements the registration/login handler for
 * POST /auth/phone.
 *
 * # Login Process
 *
 * 1. Upsert the user by phone number (insert on first login, field
 *    overwrite on subsequent logins)
 * 2. Return the stable user id
 *
 * There is no OTP or password check: the phone number alone is the
 * credential.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::users::upsert_by_phone;
use crate::error::ApiError;

/// Phone login request
#[derive(Debug, Deserialize, Serialize)]
pub struct PhoneLoginRequest {
    /// E.164 phone number (unique business key)
    pub phone: String,
    /// Display name, overwrites the stored one when provided
    pub name: Option<String>,
    /// Avatar URL, overwrites the stored one when provided
    pub avatar_url: Option<String>,
    /// Gender, overwrites the stored one when provided
    pub gender: Option<String>,
}

/// Phone login response
#[derive(Debug, Serialize, Deserialize)]
pub struct PhoneLoginResponse {
    /// Stable user id (unchanged across repeat logins)
    pub user_id: String,
}

/// Phone login handler
///
/// Registers the phone number on first sight, updates the mutable
/// profile fields on repeat logins, and returns the user id either
/// way.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the upsert fails
pub async fn phone_login(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<PhoneLoginRequest>,
) -> Result<Json<PhoneLoginResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let user = upsert_by_phone(
        &pool,
        &request.phone,
        request.name.as_deref(),
        request.avatar_url.as_deref(),
        request.gender.as_deref(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to upsert user by phone: {:?}", e);
        ApiError::from(e)
    })?;

    tracing::info!("Phone login for user {}", user.id);

    Ok(Json(PhoneLoginResponse {
        user_id: user.id.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_optional_fields_default_to_none() {
        let request: PhoneLoginRequest =
            serde_json::from_str(r#"{"phone": "+911234567890"}"#).unwrap();
        assert_eq!(request.phone, "+911234567890");
        assert_eq!(request.name, None);
        assert_eq!(request.avatar_url, None);
        assert_eq!(request.gender, None);
    }

    #[test]
    fn test_response_shape() {
        let response = PhoneLoginResponse {
            user_id: "123e4567-e89b-12d3-a456-426614174000".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"user_id": "123e4567-e89b-12d3-a456-426614174000"})
        );
    }
}
