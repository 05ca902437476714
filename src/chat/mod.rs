//! Chat Module
//!
//! Poll-based chat between the members of a couple. Messages are
//! append-only; history is fetched over HTTP with a newest-N window
//! re-presented in chronological order. There is no push delivery and
//! no pagination cursor.
//!
//! # Module Structure
//!
//! ```text
//! chat/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Message model and database operations
//! └── handlers.rs - POST /chat/send and GET /chat/history
//! ```

/// Message model and database operations
pub mod db;

/// HTTP handlers for chat
pub mod handlers;

pub use handlers::{chat_history, chat_send};
