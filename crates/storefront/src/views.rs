//! View models for the page's components.
//!
//! Each view is a pure projection of catalog and visitor state into the
//! strings and flags a template needs. Templates never compute anything.

use demo_store_core::catalog::{CART_IMAGE_FALLBACK, PRODUCT_IMAGE_FALLBACK};
use demo_store_core::{AuthMode, Catalog, CartLineItem, Product, StoreState};
use rust_decimal::Decimal;
use serde::Serialize;

/// Header: store name, greeting or sign-in trigger, cart badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub store_name: String,
    /// `"Hi, <name>"` when signed in.
    pub greeting: Option<String>,
    /// Number on the cart icon; `None` hides the badge.
    pub badge: Option<u64>,
}

impl HeaderView {
    #[must_use]
    pub fn project(store_name: &str, state: &StoreState) -> Self {
        let count = state.item_count();
        Self {
            store_name: store_name.to_string(),
            greeting: state
                .auth
                .current_user()
                .map(|user| format!("Hi, {}", user.email.display_name())),
            badge: (count > 0).then_some(count),
        }
    }
}

/// One card in the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub fallback_image_url: &'static str,
    pub category: String,
}

impl ProductCardView {
    fn project(catalog: &Catalog, product: &Product) -> Self {
        Self {
            id: product.id.as_u32(),
            name: product.name.clone(),
            price: catalog.price(product.price).to_string(),
            image_url: product.image_url.clone(),
            fallback_image_url: PRODUCT_IMAGE_FALLBACK,
            category: product.category.clone(),
        }
    }

    /// Every catalog product, in catalog order.
    #[must_use]
    pub fn list(catalog: &Catalog) -> Vec<Self> {
        catalog
            .list()
            .iter()
            .map(|p| Self::project(catalog, p))
            .collect()
    }
}

/// One row in the sliding cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub fallback_image_url: &'static str,
    pub quantity: u32,
    /// Quantity the "decrease" control submits.
    pub decrement_to: i64,
    /// Quantity the "increase" control submits.
    pub increment_to: i64,
    /// The decrease control is disabled exactly when the quantity is 1.
    pub decrement_disabled: bool,
}

impl CartItemView {
    fn project(catalog: &Catalog, line: &CartLineItem) -> Self {
        let quantity = i64::from(line.quantity);
        Self {
            id: line.id().as_u32(),
            name: line.product.name.clone(),
            price: catalog.price(line.product.price).to_string(),
            image_url: line.product.image_url.clone(),
            fallback_image_url: CART_IMAGE_FALLBACK,
            quantity: line.quantity,
            decrement_to: quantity - 1,
            increment_to: quantity + 1,
            decrement_disabled: !line.can_decrement(),
        }
    }
}

/// The off-canvas cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingCartView {
    pub open: bool,
    pub items: Vec<CartItemView>,
    pub subtotal: String,
}

impl SlidingCartView {
    #[must_use]
    pub fn project(catalog: &Catalog, state: &StoreState) -> Self {
        Self {
            open: state.cart_open,
            items: state
                .cart
                .lines()
                .iter()
                .map(|line| CartItemView::project(catalog, line))
                .collect(),
            subtotal: catalog.price(state.cart.subtotal()).to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The sign-in / sign-up modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthModalView {
    pub open: bool,
    /// Heading and submit button label.
    pub title: &'static str,
    /// Whether the confirm-password field is shown.
    pub is_sign_up: bool,
    pub email: String,
    pub error: Option<String>,
    pub switch_prompt: &'static str,
    pub switch_label: &'static str,
    pub min_password_length: usize,
}

impl AuthModalView {
    #[must_use]
    pub fn project(state: &StoreState) -> Self {
        let modal = &state.auth_modal;
        let (switch_prompt, is_sign_up) = match modal.mode {
            AuthMode::SignIn => ("Don't have an account?", false),
            AuthMode::SignUp => ("Already have an account?", true),
        };
        Self {
            open: modal.open,
            title: modal.mode.label(),
            is_sign_up,
            email: modal.email.clone(),
            error: modal.error.clone(),
            switch_prompt,
            switch_label: modal.mode.toggled().label(),
            min_password_length: demo_store_core::MIN_PASSWORD_LENGTH,
        }
    }
}

/// Everything the home page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub header: HeaderView,
    pub products: Vec<ProductCardView>,
    pub cart: SlidingCartView,
    pub auth: AuthModalView,
    pub store_name: String,
}

impl PageView {
    #[must_use]
    pub fn project(store_name: &str, catalog: &Catalog, state: &StoreState) -> Self {
        Self {
            header: HeaderView::project(store_name, state),
            products: ProductCardView::list(catalog),
            cart: SlidingCartView::project(catalog, state),
            auth: AuthModalView::project(state),
            store_name: store_name.to_string(),
        }
    }
}

// =============================================================================
// JSON views
// =============================================================================

/// A product as served by `/api/products`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductJson {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub formatted_price: String,
    pub image_url: String,
    pub category: String,
}

impl ProductJson {
    #[must_use]
    pub fn list(catalog: &Catalog) -> Vec<Self> {
        catalog
            .list()
            .iter()
            .map(|p| Self {
                id: p.id.as_u32(),
                name: p.name.clone(),
                price: p.price,
                formatted_price: catalog.price(p.price).to_string(),
                image_url: p.image_url.clone(),
                category: p.category.clone(),
            })
            .collect()
    }
}

/// A cart line as served by `/api/cart`.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineJson {
    pub product_id: u32,
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// The cart summary served by `/api/cart`.
#[derive(Debug, Clone, Serialize)]
pub struct CartJson {
    pub lines: Vec<CartLineJson>,
    pub item_count: u64,
    pub subtotal: Decimal,
    pub formatted_subtotal: String,
    pub currency: &'static str,
}

impl CartJson {
    #[must_use]
    pub fn project(catalog: &Catalog, state: &StoreState) -> Self {
        let cart = &state.cart;
        Self {
            lines: cart
                .lines()
                .iter()
                .map(|line| CartLineJson {
                    product_id: line.id().as_u32(),
                    name: line.product.name.clone(),
                    quantity: line.quantity,
                    line_total: line.line_total(),
                })
                .collect(),
            item_count: cart.item_count(),
            subtotal: cart.subtotal(),
            formatted_subtotal: catalog.price(cart.subtotal()).to_string(),
            currency: catalog.currency().code(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use demo_store_core::{Action, Credentials, ProductId};

    use super::*;

    fn add(state: &mut StoreState, catalog: &Catalog, id: u32) {
        let product = catalog.get(ProductId::new(id)).unwrap().clone();
        state.dispatch(Action::AddToCart(product));
    }

    #[test]
    fn test_header_badge_hidden_when_empty() {
        let header = HeaderView::project("Shop", &StoreState::default());
        assert_eq!(header.badge, None);
        assert_eq!(header.greeting, None);
    }

    #[test]
    fn test_header_badge_counts_units() {
        let catalog = Catalog::demo();
        let mut state = StoreState::default();
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 2);
        assert_eq!(HeaderView::project("Shop", &state).badge, Some(3));
    }

    #[test]
    fn test_header_greeting_tracks_session() {
        let mut state = StoreState::default();
        state.dispatch(Action::SubmitAuth(Credentials {
            email: "a@b.com".into(),
            password: "secret1".into(),
            confirm_password: None,
        }));
        assert_eq!(
            HeaderView::project("Shop", &state).greeting.as_deref(),
            Some("Hi, a")
        );

        state.dispatch(Action::SignOut);
        assert_eq!(HeaderView::project("Shop", &state).greeting, None);
    }

    #[test]
    fn test_product_cards_follow_catalog_order() {
        let catalog = Catalog::demo();
        let cards = ProductCardView::list(&catalog);
        assert_eq!(cards.len(), catalog.len());
        assert_eq!(cards[0].name, "Classic Tee");
        assert_eq!(cards[0].price, "$24.99");
        assert_eq!(cards[3].price, "$129.99");
        assert_eq!(cards[7].name, "Minimalist Lamp");
        assert!(cards.iter().all(|c| c.fallback_image_url == PRODUCT_IMAGE_FALLBACK));
    }

    #[test]
    fn test_decrement_disabled_exactly_at_one() {
        let catalog = Catalog::demo();
        let mut state = StoreState::default();
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 2);
        add(&mut state, &catalog, 2);

        let cart = SlidingCartView::project(&catalog, &state);
        let tee = &cart.items[0];
        assert_eq!(tee.quantity, 1);
        assert!(tee.decrement_disabled);
        assert_eq!(tee.increment_to, 2);

        let wallet = &cart.items[1];
        assert_eq!(wallet.quantity, 2);
        assert!(!wallet.decrement_disabled);
        assert_eq!(wallet.decrement_to, 1);
        assert_eq!(wallet.increment_to, 3);
    }

    #[test]
    fn test_sliding_cart_subtotal_and_empty_state() {
        let catalog = Catalog::demo();
        let mut state = StoreState::default();
        let empty = SlidingCartView::project(&catalog, &state);
        assert!(empty.is_empty());
        assert_eq!(empty.subtotal, "$0.00");
        assert!(!empty.open);

        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 2);
        let cart = SlidingCartView::project(&catalog, &state);
        assert!(cart.open);
        assert_eq!(cart.subtotal, "$99.97");
        assert_eq!(cart.items[0].fallback_image_url, CART_IMAGE_FALLBACK);
    }

    #[test]
    fn test_auth_modal_modes() {
        let mut state = StoreState::default();
        let sign_in = AuthModalView::project(&state);
        assert_eq!(sign_in.title, "Sign In");
        assert!(!sign_in.is_sign_up);
        assert_eq!(sign_in.switch_prompt, "Don't have an account?");
        assert_eq!(sign_in.switch_label, "Sign Up");

        state.dispatch(Action::ToggleAuthMode);
        let sign_up = AuthModalView::project(&state);
        assert_eq!(sign_up.title, "Sign Up");
        assert!(sign_up.is_sign_up);
        assert_eq!(sign_up.switch_prompt, "Already have an account?");
        assert_eq!(sign_up.switch_label, "Sign In");
    }

    #[test]
    fn test_cart_json() {
        let catalog = Catalog::demo();
        let mut state = StoreState::default();
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 1);
        add(&mut state, &catalog, 2);

        let json = serde_json::to_value(CartJson::project(&catalog, &state)).unwrap();
        assert_eq!(json["item_count"], 3);
        assert_eq!(json["subtotal"], "99.97");
        assert_eq!(json["formatted_subtotal"], "$99.97");
        assert_eq!(json["lines"][0]["quantity"], 2);
        assert_eq!(json["currency"], "USD");
    }
}
