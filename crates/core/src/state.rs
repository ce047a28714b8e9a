//! Root visitor state and the actions that transition it.
//!
//! ```text
//!   visitor action            Action                     StoreState change
//!   ──────────────            ──────                     ─────────────────
//!   "Add to Cart" ──────────► AddToCart(product) ──────► cart.add, cart_open = true
//!   +/- on a cart row ──────► UpdateQuantity ──────────► cart.update_quantity
//!   trash icon ─────────────► RemoveItem ──────────────► cart.remove
//!   cart icon / close ──────► OpenCart / CloseCart ────► cart_open
//!   "Sign In" ──────────────► OpenAuthModal ───────────► auth_modal.open
//!   modal close ────────────► CloseAuthModal ──────────► auth_modal reset + closed
//!   "Sign Up"/"Sign In" link► ToggleAuthMode ──────────► auth_modal.mode flipped, reset
//!   form submit ────────────► SubmitAuth(credentials) ─► auth or auth_modal.error
//!   "Sign Out" ─────────────► SignOut ─────────────────► auth = Anonymous
//! ```
//!
//! Every action is a single synchronous transition. The cart panel and the
//! auth modal are independent: no action on one touches the other's flag.

use serde::{Deserialize, Serialize};

use crate::auth::{AuthMode, AuthSession, Credentials};
use crate::cart::Cart;
use crate::catalog::Product;
use crate::types::ProductId;

/// One visitor interaction.
#[derive(Debug, Clone)]
pub enum Action {
    AddToCart(Product),
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    RemoveItem(ProductId),
    OpenCart,
    CloseCart,
    OpenAuthModal,
    CloseAuthModal,
    ToggleAuthMode,
    SubmitAuth(Credentials),
    SignOut,
}

impl Action {
    /// Short stable name for logs and breadcrumbs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddToCart(_) => "add_to_cart",
            Self::UpdateQuantity { .. } => "update_quantity",
            Self::RemoveItem(_) => "remove_item",
            Self::OpenCart => "open_cart",
            Self::CloseCart => "close_cart",
            Self::OpenAuthModal => "open_auth_modal",
            Self::CloseAuthModal => "close_auth_modal",
            Self::ToggleAuthMode => "toggle_auth_mode",
            Self::SubmitAuth(_) => "submit_auth",
            Self::SignOut => "sign_out",
        }
    }
}

/// Local state of the sign-in / sign-up modal.
///
/// Passwords are never kept; only the email draft survives a failed submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthModalState {
    pub open: bool,
    pub mode: AuthMode,
    pub email: String,
    pub error: Option<String>,
}

impl AuthModalState {
    fn reset_fields(&mut self) {
        self.email.clear();
        self.error = None;
    }
}

/// Everything the page shows for one visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreState {
    pub cart: Cart,
    pub auth: AuthSession,
    pub cart_open: bool,
    pub auth_modal: AuthModalState,
}

impl StoreState {
    /// Apply `action` and return the resulting state.
    #[must_use]
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::AddToCart(product) => {
                self.cart.add(&product);
                self.cart_open = true;
            }
            Action::UpdateQuantity {
                product_id,
                quantity,
            } => self.cart.update_quantity(product_id, quantity),
            Action::RemoveItem(product_id) => self.cart.remove(product_id),
            Action::OpenCart => self.cart_open = true,
            Action::CloseCart => self.cart_open = false,
            Action::OpenAuthModal => self.auth_modal.open = true,
            Action::CloseAuthModal => {
                self.auth_modal.reset_fields();
                self.auth_modal.mode = AuthMode::SignIn;
                self.auth_modal.open = false;
            }
            Action::ToggleAuthMode => {
                self.auth_modal.reset_fields();
                self.auth_modal.mode = self.auth_modal.mode.toggled();
            }
            Action::SubmitAuth(credentials) => self.submit_auth(&credentials),
            Action::SignOut => self.auth.sign_out(),
        }
        self
    }

    /// In-place form of [`StoreState::reduce`].
    pub fn dispatch(&mut self, action: Action) {
        *self = std::mem::take(self).reduce(action);
    }

    fn submit_auth(&mut self, credentials: &Credentials) {
        self.auth_modal.error = None;

        let mode = self.auth_modal.mode;
        let outcome = credentials.validate().and_then(|email| match mode {
            AuthMode::SignIn => {
                self.auth.sign_in(email, &credentials.password);
                Ok(())
            }
            AuthMode::SignUp => self.auth.sign_up(
                email,
                &credentials.password,
                credentials.confirm_password.as_deref().unwrap_or_default(),
            ),
        });

        match outcome {
            Ok(()) => {
                self.auth_modal.reset_fields();
                self.auth_modal.mode = AuthMode::SignIn;
                self.auth_modal.open = false;
            }
            Err(err) => {
                self.auth_modal.email.clone_from(&credentials.email);
                self.auth_modal.error = Some(err.to_string());
            }
        }
    }

    /// Number of units in the cart, as shown on the header badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }
}
