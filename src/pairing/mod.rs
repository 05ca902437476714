//! Pairing Module
//!
//! Invitation codes and couple formation. A user creates a short
//! invite code; another user joins with it, which forms a couple
//! containing both and consumes the invitation. Further joins against
//! an already-linked invitation add the joiner to the existing couple
//! instead of creating a second one.
//!
//! # Module Structure
//!
//! ```text
//! pairing/
//! ├── mod.rs      - Module exports
//! ├── code.rs     - Invite code generation
//! ├── db.rs       - Invitation/Couple models and database operations
//! └── handlers.rs - POST /invite/create and POST /invite/join
//! ```

/// Invite code generation
pub mod code;

/// Invitation and couple database operations
pub mod db;

/// HTTP handlers for pairing
pub mod handlers;

pub use handlers::{create_invite, join_by_code};
