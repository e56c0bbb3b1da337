//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Home page (catalog + banners)
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check
//!
//! # Auth
//! GET  /authentication              - Sign-in page
//! POST /authentication/sign-in      - Sign-in action
//! ```

pub mod auth;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(auth::sign_in_page))
        .route("/sign-in", post(auth::sign_in))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Auth routes
        .nest("/authentication", auth_routes())
}
