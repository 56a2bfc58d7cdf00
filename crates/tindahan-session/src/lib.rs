//! Storefront session for Tindahan.
//!
//! A [`Session`] owns one shopper's page state: the catalog, the product
//! filter, the cart store and the cart drawer. The presentation layer sends
//! [`Intent`]s, reads back a [`SessionView`] and drains notifications.
//!
//! # Example
//!
//! ```
//! use tindahan_commerce::prelude::*;
//! use tindahan_session::{Intent, Session};
//!
//! let mut session = Session::new(StaticCatalog::sample(), Currency::PHP);
//! session
//!     .dispatch(Intent::AddToCart { product_id: ProductId::new(1) })
//!     .unwrap();
//!
//! let view = session.view();
//! assert_eq!(view.cart_item_count, 1);
//! assert_eq!(view.cart.checkout_button.as_deref(), Some("Place Order - \u{20b1}17.36"));
//!
//! let toast = &session.take_notifications()[0];
//! assert_eq!(toast.title, "Added to Cart");
//! ```

pub mod config;
mod intent;
mod session;
mod view;

pub use config::StorefrontConfig;
pub use intent::{DispatchOutcome, Intent};
pub use session::{Session, NO_PRODUCTS_MESSAGE};
pub use view::{
    CartLineView, CartPanel, CategoryButton, PaymentOption, ProductCard, SessionView, TotalsView,
};
