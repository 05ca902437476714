/**
 * API Route Handlers
 *
 * This module registers the domain endpoints on the router.
 *
 * # Routes
 *
 * ## Identity & Pairing
 * - `POST /auth/phone` - Phone registration/login
 * - `POST /invite/create` - Mint an invite code
 * - `POST /invite/join` - Redeem an invite code
 *
 * ## Ceremony
 * - `POST /ceremony/init` - Start a couple's ceremony
 * - `POST /ceremony/action` - Advance it by one step
 *
 * ## Chat
 * - `POST /chat/send` - Append a message
 * - `GET /chat/history` - Recent messages, chronological
 *
 * ## Certificates
 * - `POST /certificate/generate` - Persist a stub certificate record
 *
 * No endpoint requires authentication; the phone number alone
 * identifies a user, which is a stated trust assumption.
 */

use axum::Router;

use crate::auth::phone_login;
use crate::ceremony::{ceremony_action, ceremony_init};
use crate::certificate::generate_certificate;
use crate::chat::{chat_history, chat_send};
use crate::pairing::{create_invite, join_by_code};
use crate::server::state::AppState;

/// Configure the domain API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Identity
        .route("/auth/phone", axum::routing::post(phone_login))
        // Pairing
        .route("/invite/create", axum::routing::post(create_invite))
        .route("/invite/join", axum::routing::post(join_by_code))
        // Ceremony progression
        .route("/ceremony/init", axum::routing::post(ceremony_init))
        .route("/ceremony/action", axum::routing::post(ceremony_action))
        // Chat
        .route("/chat/send", axum::routing::post(chat_send))
        .route("/chat/history", axum::routing::get(chat_history))
        // Certificates
        .route(
            "/certificate/generate",
            axum::routing::post(generate_certificate),
        )
}
