//! Identity Module
//!
//! Phone-based registration and login. The phone number alone is the
//! credential; there is no password or OTP verification, which is a
//! trust assumption callers must replace before production use.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports
//! ├── users.rs    - User model and database operations
//! └── handlers.rs - POST /auth/phone handler
//! ```

/// HTTP handlers for identity
pub mod handlers;

/// User model and database operations
pub mod users;

pub use handlers::phone_login;
