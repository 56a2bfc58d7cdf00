//! Storefront domain logic for Tindahan.
//!
//! This crate holds everything the storefront decides, independent of how it
//! is rendered:
//!
//! - **Catalog**: products, stock badges, category selection, catalog sources
//! - **Search**: narrowing the catalog by search term and category
//! - **Cart**: cart lines, the cart store, totals with 12% VAT, cart events
//! - **Checkout**: payment method selection and order confirmations
//!
//! # Example
//!
//! ```
//! use tindahan_commerce::prelude::*;
//!
//! let catalog = StaticCatalog::sample();
//! let mut store = CartStore::new(Currency::PHP);
//!
//! let pancit = catalog.find(ProductId::new(1)).unwrap();
//! store.add_to_cart(pancit).unwrap();
//!
//! let totals = store.totals();
//! assert_eq!(totals.total.display(), "\u{20b1}17.36");
//!
//! let confirmation = store.checkout(PaymentMethod::Pickup).unwrap();
//! assert!(store.cart().is_empty());
//! assert_eq!(confirmation.totals, totals);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::{ConfirmationId, ProductId, SessionId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ConfirmationId, ProductId, SessionId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogSource, CategoryFilter, Product, ProductStatus, StaticCatalog, StockBadge,
        MAX_PRICE,
    };

    // Cart
    pub use crate::cart::{
        compute_totals, AddOutcome, Cart, CartEvent, CartLine, CartObserver, CartStore,
        CartTotals, Notification, MAX_LINE_QUANTITY,
    };

    // Checkout
    pub use crate::checkout::{OrderConfirmation, PaymentMethod};

    // Search
    pub use crate::search::{filter_products, FilterResults, ProductFilter};
}
