//! Cart route handlers.
//!
//! Each handler applies one cart [`Action`] to the visitor's state and
//! redirects back to the page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::Redirect};
use demo_store_core::{Action, ProductId};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::middleware::Visitor;
use crate::state::AppState;

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
}

/// Update quantity form data.
///
/// Signed so that the decrease control can submit 0 or below.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Add one unit of a product and open the cart panel.
///
/// Ids that are not in the catalog are ignored.
#[instrument(skip(state, visitor))]
pub async fn add(
    State(state): State<AppState>,
    visitor: Visitor,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let Some(product) = state.catalog().get(form.product_id).cloned() else {
        tracing::warn!(product_id = %form.product_id, "add to cart: unknown product");
        return Ok(Redirect::to("/"));
    };

    let id = product.id.to_string();
    add_breadcrumb("cart", "add_to_cart", Some(&[("product_id", id.as_str())]));
    visitor.dispatch(Action::AddToCart(product)).await?;
    Ok(Redirect::to("/"))
}

/// Set a line's quantity.
#[instrument(skip(visitor))]
pub async fn update(visitor: Visitor, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    if visitor.state().cart.get(form.product_id).is_none() {
        tracing::warn!(product_id = %form.product_id, "update quantity: not in cart");
    }

    let id = form.product_id.to_string();
    let quantity = form.quantity.to_string();
    add_breadcrumb(
        "cart",
        "update_quantity",
        Some(&[("product_id", id.as_str()), ("quantity", quantity.as_str())]),
    );
    visitor
        .dispatch(Action::UpdateQuantity {
            product_id: form.product_id,
            quantity: form.quantity,
        })
        .await?;
    Ok(Redirect::to("/"))
}

/// Remove a line.
#[instrument(skip(visitor))]
pub async fn remove(visitor: Visitor, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    if visitor.state().cart.get(form.product_id).is_none() {
        tracing::warn!(product_id = %form.product_id, "remove item: not in cart");
    }

    let id = form.product_id.to_string();
    add_breadcrumb("cart", "remove_item", Some(&[("product_id", id.as_str())]));
    visitor.dispatch(Action::RemoveItem(form.product_id)).await?;
    Ok(Redirect::to("/"))
}

/// Open the cart panel.
#[instrument(skip(visitor))]
pub async fn open(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::OpenCart).await?;
    Ok(Redirect::to("/"))
}

/// Close the cart panel.
#[instrument(skip(visitor))]
pub async fn close(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::CloseCart).await?;
    Ok(Redirect::to("/"))
}

/// Get the cart count badge.
#[instrument(skip(visitor))]
pub async fn count(visitor: Visitor) -> CartCountTemplate {
    CartCountTemplate {
        count: visitor.state().item_count(),
    }
}
