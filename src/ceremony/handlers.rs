/**
 * Ceremony HTTP Handlers
 *
 * This module implements the ceremony progression endpoints:
 *
 * - `POST /ceremony/init` - start (or restart) a couple's ceremony
 * - `POST /ceremony/action` - advance it by one step
 *
 * # Semantics
 *
 * Actions are free-form: any action advances the index by exactly one
 * and becomes the new step key. No transition table is enforced, and
 * the index keeps growing past `total_steps` while display progress
 * saturates at 1.0.
 */

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::ceremony::db;
use crate::ceremony::steps::{progress_for, total_steps_for_style, INITIAL_STEP_KEY};
use crate::error::ApiError;
use crate::pairing::db::set_wedding_style;

/// Request body for POST /ceremony/init
#[derive(Debug, Deserialize, Serialize)]
pub struct CeremonyInitRequest {
    /// Couple starting the ceremony
    pub couple_id: Uuid,
    /// Wedding style, determines the step count
    pub style: String,
}

/// Response for POST /ceremony/init
#[derive(Debug, Serialize, Deserialize)]
pub struct CeremonyInitResponse {
    /// Id of the couple's ceremony state row
    pub state_id: String,
}

/// Request body for POST /ceremony/action
#[derive(Debug, Deserialize, Serialize)]
pub struct CeremonyActionRequest {
    /// Couple advancing the ceremony
    pub couple_id: Uuid,
    /// Free-form action, becomes the new step key
    pub action: String,
}

/// Response for POST /ceremony/action
#[derive(Debug, Serialize, Deserialize)]
pub struct CeremonyActionResponse {
    /// Step index after this action
    pub step_index: i32,
    /// Display progress after this action, saturating at 1.0
    pub progress: f64,
}

/// Initialize a couple's ceremony
///
/// Upserts the couple's single ceremony state row to step 0 with the
/// style's step count, records the style on the couple, and logs the
/// initialization.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a storage operation fails
pub async fn ceremony_init(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<CeremonyInitRequest>,
) -> Result<Json<CeremonyInitResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let total_steps = total_steps_for_style(&request.style);
    let state = db::upsert_state(
        &pool,
        request.couple_id,
        INITIAL_STEP_KEY,
        total_steps,
        progress_for(0, total_steps),
    )
    .await
    .map_err(|e| {
        tracing::error!("Failed to init ceremony state: {:?}", e);
        ApiError::from(e)
    })?;

    set_wedding_style(&pool, request.couple_id, &request.style).await?;
    db::append_log(&pool, request.couple_id, INITIAL_STEP_KEY).await?;

    tracing::info!(
        "Ceremony initialized for couple {} ({} steps, style {})",
        request.couple_id,
        total_steps,
        request.style
    );

    Ok(Json(CeremonyInitResponse {
        state_id: state.id.to_string(),
    }))
}

/// Advance a couple's ceremony by one step
///
/// # Errors
///
/// * `404 Not Found` - If the couple has no ceremony state
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If a storage operation fails
pub async fn ceremony_action(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<CeremonyActionRequest>,
) -> Result<Json<CeremonyActionResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let state = db::advance_state(&pool, request.couple_id, &request.action)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Ceremony action for couple {} without state", request.couple_id);
            ApiError::not_found("No ceremony state")
        })?;

    db::append_log(&pool, request.couple_id, &request.action).await?;

    tracing::info!(
        "Ceremony for couple {} advanced to step {} ({:.3})",
        request.couple_id,
        state.step_index,
        state.progress
    );

    Ok(Json(CeremonyActionResponse {
        step_index: state.step_index,
        progress: state.progress,
    }))
}
