/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the diagnostics routes, the domain API routes, the permissive CORS
 * layer, and the 404 fallback into a single Axum router.
 *
 * # CORS
 *
 * CORS is fully open: any origin, any method, any header. The service
 * is meant to sit behind whatever perimeter the deployment provides.
 */

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::diagnostics::{liveness, store_status};
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the storage handle
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// - `GET /` and `GET /test` - liveness and store diagnostics
/// - Domain routes from [`configure_api_routes`]
/// - Unknown routes fall back to a plain 404
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", axum::routing::get(liveness))
        .route("/test", axum::routing::get(store_status));

    let router = configure_api_routes(router);

    // Fully open CORS, matching the original deployment
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = router.layer(cors);

    let router = router.fallback(|| async {
        (axum::http::StatusCode::NOT_FOUND, "404 Not Found")
    });

    router.with_state(app_state)
}
