//! Demo Store Core - catalog, cart, and session state.
//!
//! This crate holds everything the storefront knows about a visitor:
//! - [`catalog`] - The fixed product list shown on the page
//! - [`cart`] - Line items, quantities, and derived totals
//! - [`auth`] - The mock sign-in / sign-up state machine
//! - [`state`] - The root `StoreState` and the `Action`s that transition it
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP, no sessions. The storefront binary loads a `StoreState`, applies
//! one `Action`, and stores the result.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod state;
pub mod types;

pub use auth::{AuthError, AuthMode, AuthSession, Credentials, CurrentUser, MIN_PASSWORD_LENGTH};
pub use cart::{Cart, CartLineItem};
pub use catalog::{Catalog, CatalogError, Product};
pub use state::{Action, AuthModalState, StoreState};
pub use types::*;
