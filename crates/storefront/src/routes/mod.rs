//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (header, products, cart panel, auth modal)
//! GET  /health                 - Health check
//!
//! # Cart
//! POST /cart/add               - Add one unit of a product, opens the cart panel
//! POST /cart/update            - Set a line's quantity (< 1 removes the line)
//! POST /cart/remove            - Remove a line
//! POST /cart/open              - Open the cart panel
//! POST /cart/close             - Close the cart panel
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Auth (mock, no credentials are checked)
//! POST /auth/open              - Open the auth modal
//! POST /auth/close             - Close the auth modal
//! POST /auth/toggle            - Switch between sign-in and sign-up
//! POST /auth/submit            - Sign in or sign up
//! POST /auth/sign-out          - Sign out
//!
//! # JSON
//! GET  /api/products           - The catalog
//! GET  /api/cart               - The visitor's cart summary
//! ```
//!
//! Every POST answers `303 See Other` back to `/`, so a reload never
//! resubmits an action.

pub mod api;
pub mod auth;
pub mod cart;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/open", post(auth::open))
        .route("/close", post(auth::close))
        .route("/toggle", post(auth::toggle))
        .route("/submit", post(auth::submit))
        .route("/sign-out", post(auth::sign_out))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(api::products))
        .route("/cart", get(api::cart))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
        .nest("/api", api_routes())
}
