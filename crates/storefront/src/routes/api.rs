//! JSON API routes.
//!
//! Read-only views of the catalog and the visitor's cart.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::middleware::Visitor;
use crate::state::AppState;
use crate::views::{CartJson, ProductJson};

/// List the catalog.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn products(State(state): State<AppState>) -> Json<Vec<ProductJson>> {
    Json(ProductJson::list(state.catalog()))
}

/// Summarize the visitor's cart.
///
/// GET /api/cart
#[instrument(skip(state, visitor))]
pub async fn cart(State(state): State<AppState>, visitor: Visitor) -> Json<CartJson> {
    Json(CartJson::project(state.catalog(), visitor.state()))
}
