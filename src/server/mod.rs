//! Server Module
//!
//! Server initialization, application state, and configuration.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration and database pool
//! ├── state.rs  - Application state (injected storage handle)
//! └── init.rs   - Router/application assembly
//! ```

/// Environment configuration and database loading
pub mod config;

/// Application initialization
pub mod init;

/// Application state management
pub mod state;
