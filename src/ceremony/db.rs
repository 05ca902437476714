/**
 * Database Operations for Ceremony State
 *
 * This module persists the single mutable ceremony state row each
 * couple owns, plus the append-only action log kept beside it.
 *
 * # Concurrency
 *
 * Advancing is one conditional UPDATE computing the new index and
 * progress in the statement itself, so concurrent advances for the
 * same couple serialize at the row instead of clobbering each other.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Current ceremony state for a couple
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CeremonyState {
    /// Unique state ID
    pub id: Uuid,
    /// Couple this state belongs to (one row per couple)
    pub couple_id: Uuid,
    /// Free-form label of the current step
    pub step_key: String,
    /// Steps taken so far (may exceed total_steps)
    pub step_index: i32,
    /// Total steps for the couple's wedding style
    pub total_steps: i32,
    /// Display progress in [0.0, 1.0]
    pub progress: f64,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Upsert the ceremony state for a couple
///
/// Initializes (or re-initializes) the couple's single state row to
/// the given starting values. The unique index on `couple_id` makes
/// repeat inits converge on one row instead of accumulating stale
/// history.
///
/// # Returns
/// The stored state, including its id
pub async fn upsert_state(
    pool: &PgPool,
    couple_id: Uuid,
    step_key: &str,
    total_steps: i32,
    progress: f64,
) -> Result<CeremonyState, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let state = sqlx::query_as::<_, CeremonyState>(
        r#"
        INSERT INTO ceremony_states (id, couple_id, step_key, step_index, total_steps, progress, created_at, updated_at)
        VALUES ($1, $2, $3, 0, $4, $5, $6, $6)
        ON CONFLICT (couple_id) DO UPDATE SET
            step_key = EXCLUDED.step_key,
            step_index = 0,
            total_steps = EXCLUDED.total_steps,
            progress = EXCLUDED.progress,
            updated_at = EXCLUDED.updated_at
        RETURNING id, couple_id, step_key, step_index, total_steps, progress, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(couple_id)
    .bind(step_key)
    .bind(total_steps)
    .bind(progress)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(state)
}

/// Advance the ceremony state for a couple by one step
///
/// Single conditional UPDATE: increments the index, relabels the step
/// with the action, and recomputes saturating progress, all in one
/// statement.
///
/// # Returns
/// The updated state, or None if the couple has no ceremony state
pub async fn advance_state(
    pool: &PgPool,
    couple_id: Uuid,
    action: &str,
) -> Result<Option<CeremonyState>, sqlx::Error> {
    let now = Utc::now();

    let state = sqlx::query_as::<_, CeremonyState>(
        r#"
        UPDATE ceremony_states
        SET step_index = step_index + 1,
            step_key = $2,
            progress = LEAST(1.0, (step_index + 1)::double precision / GREATEST(total_steps, 1)),
            updated_at = $3
        WHERE couple_id = $1
        RETURNING id, couple_id, step_key, step_index, total_steps, progress, created_at, updated_at
        "#,
    )
    .bind(couple_id)
    .bind(action)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    Ok(state)
}

/// Append an entry to the couple's ceremony log
pub async fn append_log(
    pool: &PgPool,
    couple_id: Uuid,
    action: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO ceremony_log (id, couple_id, action, ts)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(couple_id)
    .bind(action)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
