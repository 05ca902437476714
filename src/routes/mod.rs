//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── api_routes.rs - Domain endpoint registration
//! └── router.rs     - Router assembly (CORS, fallback)
//! ```

/// Domain endpoint registration
pub mod api_routes;

/// Router assembly
pub mod router;
