/**
 * Pairing HTTP Handlers
 *
 * This module implements the invitation-pairing workflow:
 *
 * - `POST /invite/create?creator_user_id=` - mint an invite code
 * - `POST /invite/join` - redeem a code, forming or joining a couple
 *
 * # Join Outcomes
 *
 * 1. Unknown code, or a consumed code never linked to a couple:
 *    404 "Invalid or used code".
 * 2. Code linked to a couple: the joiner is added to that couple's
 *    member set (no duplicate add) and consumption state is untouched.
 * 3. Code unlinked and unconsumed: a couple is created with creator
 *    and joiner, the invitation is consumed and linked, and the couple
 *    id is propagated onto both user records. A join losing the
 *    consume race falls back to outcome 2.
 */

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::pairing::code::generate_code;
use crate::pairing::db;

/// Query parameters for POST /invite/create
#[derive(Debug, Deserialize)]
pub struct CreateInviteQuery {
    /// User creating the invitation
    pub creator_user_id: Uuid,
}

/// Response for POST /invite/create
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateInviteResponse {
    /// Generated invite code
    pub code: String,
}

/// Request body for POST /invite/join
#[derive(Debug, Deserialize, Serialize)]
pub struct JoinByCodeRequest {
    /// Joining user
    pub user_id: Uuid,
    /// Invite code to redeem
    pub code: String,
}

/// Response for POST /invite/join
#[derive(Debug, Serialize, Deserialize)]
pub struct JoinByCodeResponse {
    /// Couple the joiner now belongs to
    pub couple_id: String,
}

/// Create an invitation code
///
/// Generates a 6-character code (uppercase letters and digits, no
/// collision check) and persists the invitation.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the insert fails
pub async fn create_invite(
    State(pool): State<Option<PgPool>>,
    Query(query): Query<CreateInviteQuery>,
) -> Result<Json<CreateInviteResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let code = generate_code();
    let invitation = db::create_invitation(&pool, &code, query.creator_user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create invitation: {:?}", e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Invitation {} created by user {}",
        invitation.id,
        query.creator_user_id
    );

    Ok(Json(CreateInviteResponse { code }))
}

/// Join by invite code
///
/// Redeems a code per the outcomes documented on this module. Returns
/// the couple id the joiner ended up in.
///
/// # Errors
///
/// * `404 Not Found` - Unknown code, or consumed without a couple
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a storage operation fails
pub async fn join_by_code(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<JoinByCodeRequest>,
) -> Result<Json<JoinByCodeResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let invitation = db::get_invitation_by_code(&pool, &request.code)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Join attempt with unknown code: {}", request.code);
            ApiError::not_found("Invalid or used code")
        })?;

    let couple_id = match invitation.couple_id {
        // Already linked: join the existing couple, leave consumption alone
        Some(couple_id) => {
            db::add_member(&pool, couple_id, request.user_id).await?;
            tracing::info!("User {} joined existing couple {}", request.user_id, couple_id);
            couple_id
        }
        // Consumed but never linked: treat like an unknown code
        None if invitation.consumed => {
            tracing::warn!("Join attempt with consumed unlinked code: {}", request.code);
            return Err(ApiError::not_found("Invalid or used code"));
        }
        // Fresh invitation: form the couple and consume it
        None => {
            match db::create_couple_for_invitation(&pool, &invitation, request.user_id).await? {
                Some(couple_id) => {
                    tracing::info!(
                        "Couple {} formed by users {} and {}",
                        couple_id,
                        invitation.creator_user_id,
                        request.user_id
                    );
                    couple_id
                }
                None => join_after_lost_race(&pool, invitation.id, request.user_id).await?,
            }
        }
    };

    Ok(Json(JoinByCodeResponse {
        couple_id: couple_id.to_string(),
    }))
}

/// Fall back to member-add after losing the consume race
///
/// The winning join linked the invitation to its new couple, so a
/// re-fetch yields the couple to add this joiner to.
async fn join_after_lost_race(
    pool: &PgPool,
    invitation_id: Uuid,
    user_id: Uuid,
) -> Result<Uuid, ApiError> {
    let couple_id = db::get_invitation_by_id(pool, invitation_id)
        .await?
        .and_then(|inv| inv.couple_id)
        .ok_or_else(|| ApiError::not_found("Invalid or used code"))?;

    db::add_member(pool, couple_id, user_id).await?;
    tracing::info!(
        "User {} joined couple {} after losing consume race",
        user_id,
        couple_id
    );

    Ok(couple_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_join_request_parses() {
        let request: JoinByCodeRequest = serde_json::from_str(
            r#"{"user_id": "123e4567-e89b-12d3-a456-426614174000", "code": "AB12CD"}"#,
        )
        .unwrap();
        assert_eq!(request.code, "AB12CD");
    }

    #[test]
    fn test_create_invite_response_shape() {
        let response = CreateInviteResponse {
            code: "XY99ZZ".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"code": "XY99ZZ"}));
    }
}
