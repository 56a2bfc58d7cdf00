//! Filtered product listing.

use crate::catalog::Product;
use serde::Serialize;

/// Products visible after filtering, with the size of the full catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterResults<'a> {
    /// Matching products in catalog order.
    pub products: Vec<&'a Product>,
    /// Number of products in the unfiltered catalog.
    pub catalog_size: usize,
}

impl<'a> FilterResults<'a> {
    /// Create a result set.
    pub fn new(products: Vec<&'a Product>, catalog_size: usize) -> Self {
        Self {
            products,
            catalog_size,
        }
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Summary line shown above the grid.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} products",
            self.products.len(),
            self.catalog_size
        )
    }
}
