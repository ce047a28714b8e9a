//! The product catalog.
//!
//! A catalog is an ordered, immutable list of products defined once at
//! startup. Display order is catalog order.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{CurrencyCode, Price, ProductId};

/// Image shown on a product card when the product image fails to load.
pub const PRODUCT_IMAGE_FALLBACK: &str = "https://placehold.co/600x600/F8F8F8/333?text=Image+Error";

/// Image shown on a cart row when the product thumbnail fails to load.
pub const CART_IMAGE_FALLBACK: &str = "https://placehold.co/100x100/F8F8F8/333?text=Item";

/// Errors raised when assembling a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// A product offered by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the catalog currency. Never negative.
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
}

impl Product {
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Decimal,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image_url: image_url.into(),
            category: category.into(),
        }
    }
}

/// An ordered, validated list of products sharing one currency.
#[derive(Debug, Clone)]
pub struct Catalog {
    currency: CurrencyCode,
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and prices non-negative.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in catalog order.
    pub fn new(currency: CurrencyCode, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }
        }
        Ok(Self { currency, products })
    }

    /// The eight demo products, priced in USD.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            currency: CurrencyCode::USD,
            products: demo_products(),
        }
    }

    /// All products in display order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Pair an amount with the catalog currency for display.
    #[must_use]
    pub const fn price(&self, amount: Decimal) -> Price {
        Price::new(amount, self.currency)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn placeholder(label: &str) -> String {
    format!("https://placehold.co/600x600/F8F8F8/333?text={label}")
}

fn demo_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Classic Tee",
            Decimal::new(2499, 2),
            placeholder("Classic+Tee"),
            "Apparel",
        ),
        Product::new(
            2,
            "Leather Wallet",
            Decimal::new(4999, 2),
            placeholder("Leather+Wallet"),
            "Accessories",
        ),
        Product::new(
            3,
            "Canvas Backpack",
            Decimal::new(7999, 2),
            placeholder("Canvas+Backpack"),
            "Bags",
        ),
        Product::new(
            4,
            "Stainless Steel Watch",
            Decimal::new(12999, 2),
            placeholder("Steel+Watch"),
            "Accessories",
        ),
        Product::new(
            5,
            "Wireless Earbuds",
            Decimal::new(8999, 2),
            placeholder("Earbuds"),
            "Electronics",
        ),
        Product::new(
            6,
            "Running Shoes",
            Decimal::new(10999, 2),
            placeholder("Running+Shoes"),
            "Footwear",
        ),
        Product::new(
            7,
            "Coffee Mug",
            Decimal::new(1499, 2),
            placeholder("Coffee+Mug"),
            "Homeware",
        ),
        Product::new(
            8,
            "Minimalist Lamp",
            Decimal::new(6499, 2),
            placeholder("Minimalist+Lamp"),
            "Homeware",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_passes_validation() {
        let demo = Catalog::demo();
        let validated = Catalog::new(demo.currency(), demo.list().to_vec()).unwrap();
        assert_eq!(validated.len(), 8);
    }

    #[test]
    fn test_demo_catalog_order_and_prices() {
        let catalog = Catalog::demo();
        let ids: Vec<u32> = catalog.list().iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let tee = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(tee.name, "Classic Tee");
        assert_eq!(tee.price, Decimal::new(2499, 2));
        assert_eq!(tee.category, "Apparel");
        assert!(tee.image_url.ends_with("text=Classic+Tee"));

        assert_eq!(
            catalog.get(ProductId::new(2)).unwrap().price,
            Decimal::new(4999, 2)
        );
    }

    #[test]
    fn test_get_unknown_id() {
        assert!(Catalog::demo().get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let products = vec![
            Product::new(1, "A", Decimal::ONE, "a.png", "X"),
            Product::new(1, "B", Decimal::ONE, "b.png", "X"),
        ];
        assert_eq!(
            Catalog::new(CurrencyCode::USD, products).unwrap_err(),
            CatalogError::DuplicateId(ProductId::new(1))
        );
    }

    #[test]
    fn test_rejects_negative_price() {
        let products = vec![Product::new(5, "Refund", Decimal::new(-1, 2), "r.png", "X")];
        assert_eq!(
            Catalog::new(CurrencyCode::USD, products).unwrap_err(),
            CatalogError::NegativePrice(ProductId::new(5))
        );
    }

    #[test]
    fn test_free_product_is_allowed() {
        let products = vec![Product::new(1, "Sticker", Decimal::ZERO, "s.png", "Misc")];
        assert!(Catalog::new(CurrencyCode::USD, products).is_ok());
    }

    #[test]
    fn test_price_uses_catalog_currency() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.price(Decimal::new(9997, 2)).to_string(), "$99.97");
    }
}
