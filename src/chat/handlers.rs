/**
 * Chat HTTP Handlers
 *
 * This module implements the poll-based chat endpoints:
 *
 * - `POST /chat/send` - append a message
 * - `GET /chat/history?couple_id=&limit=` - newest `limit` messages,
 *   presented in chronological order (default limit 50)
 *
 * There is no delivery acknowledgment, size limit, or pagination
 * cursor; clients poll history to catch up.
 */

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::chat::db::{self, chronological, ChatMessage};
use crate::error::ApiError;

/// History window size when the caller does not pass `limit`
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Request body for POST /chat/send
#[derive(Debug, Deserialize, Serialize)]
pub struct ChatSendRequest {
    /// Couple the message belongs to
    pub couple_id: Uuid,
    /// Sending user
    pub sender_id: Uuid,
    /// Message text
    pub text: String,
}

/// Response for POST /chat/send
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatSendResponse {
    /// Id of the stored message
    pub message_id: String,
}

/// Query parameters for GET /chat/history
#[derive(Debug, Deserialize)]
pub struct ChatHistoryQuery {
    /// Couple whose history to fetch
    pub couple_id: Uuid,
    /// Window size (default 50)
    pub limit: Option<i64>,
}

/// One message in a history response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    /// Message id
    pub id: String,
    /// Sending user
    pub sender_id: String,
    /// Message text
    pub text: String,
    /// Server-assigned send timestamp
    pub sent_at: DateTime<Utc>,
}

impl From<ChatMessage> for ChatHistoryItem {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id.to_string(),
            sender_id: message.sender_id.to_string(),
            text: message.text,
            sent_at: message.sent_at,
        }
    }
}

/// Send a chat message
///
/// Appends the message with a server-assigned timestamp and returns
/// its id.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the insert fails
pub async fn chat_send(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<ChatSendRequest>,
) -> Result<Json<ChatSendResponse>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let message = db::insert_message(&pool, request.couple_id, request.sender_id, &request.text)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert chat message: {:?}", e);
            ApiError::from(e)
        })?;

    tracing::info!(
        "Message {} sent in couple {}",
        message.id,
        request.couple_id
    );

    Ok(Json(ChatSendResponse {
        message_id: message.id.to_string(),
    }))
}

/// Fetch recent chat history
///
/// Returns the newest `limit` messages for the couple, re-presented in
/// chronological order.
///
/// # Errors
///
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the query fails
pub async fn chat_history(
    State(pool): State<Option<PgPool>>,
    Query(query): Query<ChatHistoryQuery>,
) -> Result<Json<Vec<ChatHistoryItem>>, ApiError> {
    let pool = pool.ok_or_else(ApiError::unavailable)?;

    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let window = db::recent_messages(&pool, query.couple_id, limit).await?;

    let items = chronological(window)
        .into_iter()
        .map(ChatHistoryItem::from)
        .collect();

    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_history_item_from_message() {
        let message = ChatMessage {
            id: Uuid::new_v4(),
            couple_id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            text: "see you at the mandap".to_string(),
            sent_at: Utc::now(),
        };
        let item = ChatHistoryItem::from(message.clone());
        assert_eq!(item.id, message.id.to_string());
        assert_eq!(item.sender_id, message.sender_id.to_string());
        assert_eq!(item.text, "see you at the mandap");
    }

    #[test]
    fn test_history_query_limit_defaults_to_none() {
        let query: ChatHistoryQuery = serde_json::from_str(
            r#"{"couple_id": "123e4567-e89b-12d3-a456-426614174000"}"#,
        )
        .unwrap();
        assert_eq!(query.limit, None);
    }
}
