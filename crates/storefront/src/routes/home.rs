//! Home page route handler.
//!
//! The whole storefront is one page: header, product grid, sliding cart,
//! auth modal, and footer, all rendered from the visitor's current state.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::filters;
use crate::middleware::Visitor;
use crate::state::AppState;
use crate::views::PageView;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageView,
}

/// Display the storefront.
#[instrument(skip(state, visitor))]
pub async fn home(State(state): State<AppState>, visitor: Visitor) -> HomeTemplate {
    let page = PageView::project(
        &state.config().store_name,
        state.catalog(),
        visitor.state(),
    );
    HomeTemplate { page }
}
