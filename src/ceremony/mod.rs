//! Ceremony Module
//!
//! Tracks a couple's progress through the steps of a virtual wedding
//! ceremony. The number of steps is fixed per wedding style; each
//! action advances the step index by one and relabels the current
//! step, with display progress saturating at 1.0.
//!
//! Each couple has exactly one mutable ceremony state row (upserted on
//! init); the per-action history lives in a separate append-only log.
//!
//! # Module Structure
//!
//! ```text
//! ceremony/
//! ├── mod.rs      - Module exports
//! ├── steps.rs    - Style step table and progress math
//! ├── db.rs       - Ceremony state and log database operations
//! └── handlers.rs - POST /ceremony/init and POST /ceremony/action
//! ```

/// Ceremony state and log database operations
pub mod db;

/// HTTP handlers for the ceremony
pub mod handlers;

/// Step table and progress math
pub mod steps;

pub use handlers::{ceremony_action, ceremony_init};
