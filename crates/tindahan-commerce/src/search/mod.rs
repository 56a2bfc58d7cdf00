//! Search module.
//!
//! Narrows the catalog by search term and category.

mod filter;
mod results;

pub use filter::{filter_products, ProductFilter};
pub use results::FilterResults;
