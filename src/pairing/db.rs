/**
 * Database Operations for Invitations and Couples
 *
 * This module contains the invitation and couple models and their
 * database operations.
 *
 * # Race Closure
 *
 * Invitation consumption is an atomic conditional update inside a
 * transaction: the couple row is only committed if the invitation was
 * still unconsumed when the update ran. A join that loses the race
 * observes zero affected rows, rolls back its couple, and falls back
 * to joining the couple the winner created.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Invitation record binding a creator to a future joiner
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invitation {
    /// Unique invitation ID
    pub id: Uuid,
    /// 6-char invite code (not guaranteed unique)
    pub code: String,
    /// User who created the invitation
    pub creator_user_id: Uuid,
    /// Couple the invitation resolved to, once consumed
    pub couple_id: Option<Uuid>,
    /// Expiry timestamp (recorded but not enforced)
    pub expires_at: Option<DateTime<Utc>>,
    /// Whether a join has consumed this invitation
    pub consumed: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Couple record formed by a successful join
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Couple {
    /// Unique couple ID
    pub id: Uuid,
    /// Display title like "Priya ❤️ Arjun"
    pub title: Option<String>,
    /// Member user ids (set semantics)
    pub user_ids: Vec<Uuid>,
    /// Wedding style (hindu/christian/muslim/sikh/south/western)
    pub wedding_style: Option<String>,
    /// Planned wedding date
    pub wedding_date: Option<DateTime<Utc>>,
    /// Whether the virtual ceremony has completed
    pub ceremony_completed: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new invitation
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `code` - Generated invite code
/// * `creator_user_id` - User creating the invitation
///
/// # Returns
/// Created invitation or error
pub async fn create_invitation(
    pool: &PgPool,
    code: &str,
    creator_user_id: Uuid,
) -> Result<Invitation, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let invitation = sqlx::query_as::<_, Invitation>(
        r#"
        INSERT INTO invitations (id, code, creator_user_id, consumed, created_at)
        VALUES ($1, $2, $3, FALSE, $4)
        RETURNING id, code, creator_user_id, couple_id, expires_at, consumed, created_at
        "#,
    )
    .bind(id)
    .bind(code)
    .bind(creator_user_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(invitation)
}

/// Get the invitation matching a code
///
/// Codes carry no uniqueness constraint, so a collision resolves
/// deterministically to the oldest row.
///
/// # Returns
/// Invitation or None if the code is unknown
pub async fn get_invitation_by_code(
    pool: &PgPool,
    code: &str,
) -> Result<Option<Invitation>, sqlx::Error> {
    let invitation = sqlx::query_as::<_, Invitation>(
        r#"
        SELECT id, code, creator_user_id, couple_id, expires_at, consumed, created_at
        FROM invitations
        WHERE code = $1
        ORDER BY created_at
        LIMIT 1
        "#,
    )
    .bind(code)
    .fetch_optional(pool)
    .await?;

    Ok(invitation)
}

/// Get an invitation by ID
pub async fn get_invitation_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Invitation>, sqlx::Error> {
    let invitation = sqlx::query_as::<_, Invitation>(
        r#"
        SELECT id, code, creator_user_id, couple_id, expires_at, consumed, created_at
        FROM invitations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(invitation)
}

/// Get a couple by ID
pub async fn get_couple_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Couple>, sqlx::Error> {
    let couple = sqlx::query_as::<_, Couple>(
        r#"
        SELECT id, title, user_ids, wedding_style, wedding_date, ceremony_completed, created_at
        FROM couples
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(couple)
}

/// Create a couple for an unconsumed invitation
///
/// Runs in a transaction:
/// 1. Insert the couple with `[creator, joiner]`
/// 2. Conditionally consume the invitation (`consumed = FALSE` guard)
/// 3. Propagate the couple id onto both user rows
///
/// # Returns
/// * `Ok(Some(couple_id))` - The invitation was consumed by this call
/// * `Ok(None)` - A concurrent join consumed it first; everything done
///   here was rolled back and the caller should re-fetch the
///   invitation and join its linked couple instead
pub async fn create_couple_for_invitation(
    pool: &PgPool,
    invitation: &Invitation,
    joiner_user_id: Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    let couple_id = Uuid::new_v4();
    let now = Utc::now();
    let members = vec![invitation.creator_user_id, joiner_user_id];

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO couples (id, user_ids, ceremony_completed, created_at)
        VALUES ($1, $2, FALSE, $3)
        "#,
    )
    .bind(couple_id)
    .bind(&members)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    // Consume only if still unconsumed; zero rows means another join won
    let consumed = sqlx::query(
        r#"
        UPDATE invitations
        SET consumed = TRUE, couple_id = $1
        WHERE id = $2 AND consumed = FALSE
        "#,
    )
    .bind(couple_id)
    .bind(invitation.id)
    .execute(&mut *tx)
    .await?;

    if consumed.rows_affected() == 0 {
        tx.rollback().await?;
        return Ok(None);
    }

    sqlx::query(
        r#"
        UPDATE users
        SET couple_id = $1, updated_at = $2
        WHERE id = ANY($3)
        "#,
    )
    .bind(couple_id)
    .bind(now)
    .bind(&members)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(couple_id))
}

/// Add a user to an existing couple's member set
///
/// Set semantics: the array-containment guard makes a repeated add a
/// no-op rather than a duplicate entry.
pub async fn add_member(
    pool: &PgPool,
    couple_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE couples
        SET user_ids = array_append(user_ids, $2)
        WHERE id = $1 AND NOT (user_ids @> ARRAY[$2])
        "#,
    )
    .bind(couple_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Record the wedding style on a couple
pub async fn set_wedding_style(
    pool: &PgPool,
    couple_id: Uuid,
    style: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE couples
        SET wedding_style = $2
        WHERE id = $1
        "#,
    )
    .bind(couple_id)
    .bind(style)
    .execute(pool)
    .await?;

    Ok(())
}
