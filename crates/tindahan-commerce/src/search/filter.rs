//! Product grid filtering.

use crate::catalog::{CategoryFilter, Product};
use crate::search::FilterResults;
use serde::{Deserialize, Serialize};

/// Search term and category selected in the product grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Free-text term matched against name and description.
    pub search_term: String,
    /// Selected category.
    pub category: CategoryFilter,
}

impl ProductFilter {
    /// Create a filter that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Reset search term and category.
    pub fn clear(&mut self) {
        self.search_term.clear();
        self.category = CategoryFilter::All;
    }

    /// Check whether a single product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search_term.to_lowercase();
        self.matches_lowercase(product, &needle)
    }

    /// Apply the filter to a catalog, keeping catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Product]) -> FilterResults<'a> {
        let needle = self.search_term.to_lowercase();
        let products = catalog
            .iter()
            .filter(|p| self.matches_lowercase(p, &needle))
            .collect();
        FilterResults::new(products, catalog.len())
    }

    fn matches_lowercase(&self, product: &Product, needle: &str) -> bool {
        product.matches_text(needle) && self.category.matches(product.category.as_deref())
    }
}

/// Products whose name or description contains `search_term`
/// (case-insensitive) and whose category passes `category`.
///
/// An empty result is not an error.
pub fn filter_products<'a>(
    catalog: &'a [Product],
    search_term: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    ProductFilter::new()
        .with_search_term(search_term)
        .with_category(category.clone())
        .apply(catalog)
        .products
}
