/**
 * Database Operations for Chat Messages
 *
 * This module persists chat messages between the members of a couple.
 * Messages are append-only: never mutated, never deleted.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// A chat message between paired users
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    /// Unique message ID
    pub id: Uuid,
    /// Couple the message belongs to
    pub couple_id: Uuid,
    /// Sending user
    pub sender_id: Uuid,
    /// Message text (no size limit, no filtering)
    pub text: String,
    /// Server-assigned send timestamp
    pub sent_at: DateTime<Utc>,
}

/// Insert a chat message with a server-assigned timestamp
///
/// # Returns
/// The stored message, including its id
pub async fn insert_message(
    pool: &PgPool,
    couple_id: Uuid,
    sender_id: Uuid,
    text: &str,
) -> Result<ChatMessage, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (id, couple_id, sender_id, text, sent_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, couple_id, sender_id, text, sent_at
        "#,
    )
    .bind(id)
    .bind(couple_id)
    .bind(sender_id)
    .bind(text)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(message)
}

/// Fetch the newest `limit` messages for a couple
///
/// Returned newest-first; pass through [`chronological`] before
/// presenting.
pub async fn recent_messages(
    pool: &PgPool,
    couple_id: Uuid,
    limit: i64,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT id, couple_id, sender_id, text, sent_at
        FROM chat_messages
        WHERE couple_id = $1
        ORDER BY sent_at DESC
        LIMIT $2
        "#,
    )
    .bind(couple_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Re-present a newest-first window in chronological (send) order
pub fn chronological(mut messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    messages.reverse();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn message(text: &str, minute: u32) -> ChatMessage {
        ChatMessage {
            id: Uuid::new_v4(),
            couple_id: Uuid::nil(),
            sender_id: Uuid::nil(),
            text: text.to_string(),
            sent_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_chronological_reverses_newest_first_window() {
        // A limit-2 window over sends A, B, C arrives as [C, B]
        let window = vec![message("C", 3), message("B", 2)];
        let ordered = chronological(window);
        let texts: Vec<_> = ordered.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["B", "C"]);
    }

    #[test]
    fn test_chronological_empty() {
        assert!(chronological(Vec::new()).is_empty());
    }
}
