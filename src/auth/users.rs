/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Users are
 * keyed by phone number (unique business key) and upserted on every
 * login: fields the caller provides overwrite, fields the caller
 * omits are preserved.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// E.164 phone number (unique business key)
    pub phone: String,
    /// Display name
    pub name: Option<String>,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Gender (male/female/other, not validated)
    pub gender: Option<String>,
    /// Linked couple id if paired
    pub couple_id: Option<Uuid>,
    /// Preferred UI theme
    pub theme_pref: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Upsert a user by phone number
///
/// Creates the user on first login; on subsequent logins the provided
/// fields overwrite the stored ones while omitted fields are kept
/// (COALESCE semantics). The unique index on `phone` makes concurrent
/// logins for the same number converge on a single row.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `phone` - Phone number (business key)
/// * `name` - Optional display name
/// * `avatar_url` - Optional avatar URL
/// * `gender` - Optional gender
///
/// # Returns
/// The stored user (with its stable id) or error
pub async fn upsert_by_phone(
    pool: &PgPool,
    phone: &str,
    name: Option<&str>,
    avatar_url: Option<&str>,
    gender: Option<&str>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, phone, name, avatar_url, gender, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ON CONFLICT (phone) DO UPDATE SET
            name = COALESCE(EXCLUDED.name, users.name),
            avatar_url = COALESCE(EXCLUDED.avatar_url, users.avatar_url),
            gender = COALESCE(EXCLUDED.gender, users.gender),
            updated_at = EXCLUDED.updated_at
        RETURNING id, phone, name, avatar_url, gender, couple_id, theme_pref, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(phone)
    .bind(name)
    .bind(avatar_url)
    .bind(gender)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, phone, name, avatar_url, gender, couple_id, theme_pref, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
