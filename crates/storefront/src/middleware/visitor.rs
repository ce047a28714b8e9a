//! Per-visitor state extractor.
//!
//! Loads the visitor's [`StoreState`] from the session and writes it back
//! after an [`Action`] has been applied. Requests on one session do not
//! overlap; see [`super::visitor_lock`].
//!
//! ```rust,ignore
//! async fn handler(visitor: Visitor) -> Result<Redirect> {
//!     visitor.dispatch(Action::OpenCart).await?;
//!     Ok(Redirect::to("/"))
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};
use demo_store_core::{Action, StoreState};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::session_keys;

/// The current visitor's session and state.
pub struct Visitor {
    session: Session,
    state: StoreState,
}

impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let state = session
            .get::<StoreState>(session_keys::STORE_STATE)
            .await?
            .unwrap_or_default();

        Ok(Self { session, state })
    }
}

impl Visitor {
    /// The state as loaded for this request.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.state
    }

    /// Apply `action`, persist the result to the session, and return it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store rejects the write.
    pub async fn dispatch(self, action: Action) -> Result<StoreState, AppError> {
        let name = action.name();
        let state = self.state.reduce(action);
        self.session
            .insert(session_keys::STORE_STATE, &state)
            .await?;
        tracing::debug!(
            action = name,
            item_count = state.item_count(),
            cart_open = state.cart_open,
            auth_modal_open = state.auth_modal.open,
            "visitor state updated"
        );
        Ok(state)
    }
}
