//! Category selection for the product grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label of the sentinel category that matches every product.
pub const ALL_CATEGORIES: &str = "All Categories";

/// Category buttons offered by the product grid, in display order.
pub const STOREFRONT_CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Snacks & Treats",
    "Beverages",
    "Personal Care",
    "Household Items",
    "Frozen Goods",
    "Fresh Produce",
];

/// The category a shopper has selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CategoryFilter {
    /// Match every product.
    #[default]
    All,
    /// Match products whose category label equals this one exactly.
    Named(String),
}

impl CategoryFilter {
    /// Create a filter for a category label.
    ///
    /// The "All Categories" label maps to [`CategoryFilter::All`].
    pub fn named(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label)
        }
    }

    /// Label shown on the category button.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(label) => label,
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(label) => category == Some(label.as_str()),
        }
    }

    /// All filters the storefront offers.
    pub fn storefront() -> Vec<CategoryFilter> {
        STOREFRONT_CATEGORIES
            .iter()
            .map(|label| CategoryFilter::named(*label))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::named(s))
    }
}

impl From<String> for CategoryFilter {
    fn from(label: String) -> Self {
        CategoryFilter::named(label)
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.label().to_string()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_maps_to_all() {
        assert_eq!(CategoryFilter::named("All Categories"), CategoryFilter::All);
        assert_eq!(
            "Beverages".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Named("Beverages".to_string())
        );
    }

    #[test]
    fn test_matches() {
        assert!(CategoryFilter::All.matches(None));
        assert!(CategoryFilter::All.matches(Some("Beverages")));

        let frozen = CategoryFilter::named("Frozen Goods");
        assert!(frozen.matches(Some("Frozen Goods")));
        assert!(!frozen.matches(Some("frozen goods")));
        assert!(!frozen.matches(None));
    }

    #[test]
    fn test_storefront_categories() {
        let filters = CategoryFilter::storefront();
        assert_eq!(filters.len(), 7);
        assert_eq!(filters[0], CategoryFilter::All);
        assert_eq!(filters[6].label(), "Fresh Produce");
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All Categories\"");
        let parsed: CategoryFilter = serde_json::from_str("\"Beverages\"").unwrap();
        assert_eq!(parsed.label(), "Beverages");
    }
}
