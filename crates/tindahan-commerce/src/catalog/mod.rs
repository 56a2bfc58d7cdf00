//! Product catalog module.
//!
//! Contains products, category selection and catalog sources.

mod category;
mod product;
mod source;

pub use category::{CategoryFilter, ALL_CATEGORIES, STOREFRONT_CATEGORIES};
pub use product::{
    Product, ProductStatus, StockBadge, LOW_STOCK_THRESHOLD, MAX_PRICE, MAX_RATING,
};
pub use source::{CatalogSource, StaticCatalog};
