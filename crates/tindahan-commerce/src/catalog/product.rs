//! Product types.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Products with this many units or fewer (but more than zero) are flagged
/// as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Highest unit price a product can carry, in major units (one billion).
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Product availability in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product can be ordered.
    #[default]
    Available,
    /// Product is listed but cannot be ordered.
    Unavailable,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Available => "available",
            ProductStatus::Unavailable => "unavailable",
        }
    }
}

/// Stock badge shown on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockBadge {
    OutOfStock,
    LowStock,
}

impl StockBadge {
    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::OutOfStock => "Out of Stock",
            StockBadge::LowStock => "Low Stock",
        }
    }
}

/// A product in the catalog.
///
/// Owned by the catalog source; the storefront never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description for listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category label (e.g., "Frozen Goods").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Availability status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Units on hand.
    #[serde(default)]
    pub quantity: u32,
    /// Average customer rating, 0 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a new available product with no stock recorded.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            description: None,
            category: None,
            status: ProductStatus::Available,
            quantity: 0,
            rating: None,
            image: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the stock on hand.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Set the availability status.
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check the product against catalog rules.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price.is_negative() {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has a negative price",
                self.id
            )));
        }
        if self.price.amount > MAX_PRICE {
            return Err(CommerceError::InvalidProduct(format!(
                "product {} has price {} above {}",
                self.id, self.price.amount, MAX_PRICE
            )));
        }
        if let Some(rating) = self.rating {
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(CommerceError::InvalidProduct(format!(
                    "product {} has rating {} outside 0-5",
                    self.id, rating
                )));
            }
        }
        Ok(())
    }

    /// Check if the product can be added to a cart.
    pub fn is_purchasable(&self) -> bool {
        self.status == ProductStatus::Available && self.quantity > 0
    }

    /// Badges for the current stock state, in display order.
    ///
    /// An unavailable product that still has a few units on hand shows both.
    pub fn stock_badges(&self) -> Vec<StockBadge> {
        let mut badges = Vec::new();
        if self.status == ProductStatus::Unavailable {
            badges.push(StockBadge::OutOfStock);
        }
        if (1..=LOW_STOCK_THRESHOLD).contains(&self.quantity) {
            badges.push(StockBadge::LowStock);
        }
        badges
    }

    /// Number of filled stars for the rating display.
    pub fn full_stars(&self) -> u8 {
        self.rating
            .map(|r| r.clamp(0.0, MAX_RATING).floor() as u8)
            .unwrap_or(0)
    }

    /// Check whether the name or description contains `needle`.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn peso(minor: i64) -> Money {
        Money::from_minor_units(minor, Currency::PHP)
    }

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Kopiko Coffee Candy", peso(800)).with_quantity(23);
        assert_eq!(product.id, ProductId::new(1));
        assert!(product.is_purchasable());
        assert!(product.stock_badges().is_empty());
    }

    #[test]
    fn test_unavailable_is_not_purchasable() {
        let product = Product::new(5, "Joy Dishwashing Liquid", peso(2500))
            .with_status(ProductStatus::Unavailable);
        assert!(!product.is_purchasable());
        assert_eq!(product.stock_badges(), [StockBadge::OutOfStock]);
    }

    #[test]
    fn test_zero_stock_is_not_purchasable() {
        let product = Product::new(3, "Selecta Ice Cream", peso(12000));
        assert!(!product.is_purchasable());
        assert!(product.stock_badges().is_empty());
    }

    #[test]
    fn test_low_stock_badge() {
        let product = Product::new(3, "Selecta Ice Cream", peso(12000)).with_quantity(5);
        assert_eq!(product.stock_badges(), [StockBadge::LowStock]);
        assert_eq!(StockBadge::LowStock.label(), "Low Stock");
    }

    #[test]
    fn test_unavailable_with_few_units_shows_both_badges() {
        let product = Product::new(5, "Joy Dishwashing Liquid", peso(2500))
            .with_status(ProductStatus::Unavailable)
            .with_quantity(3);
        assert_eq!(
            product.stock_badges(),
            [StockBadge::OutOfStock, StockBadge::LowStock]
        );
    }

    #[test]
    fn test_validate_rejects_bad_rating() {
        let product = Product::new(1, "Candy", peso(100)).with_rating(5.5);
        assert!(matches!(
            product.validate(),
            Err(CommerceError::InvalidProduct(_))
        ));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let product = Product::new(1, "Candy", peso(-100));
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_price_above_ceiling() {
        let at_ceiling = Product::new(1, "Gold Bar", Money::new(MAX_PRICE, Currency::PHP));
        assert!(at_ceiling.validate().is_ok());

        let huge = Decimal::from_str_exact("100000000000000000000").unwrap();
        let product = Product::new(2, "Too Much", Money::new(huge, Currency::PHP));
        assert!(matches!(
            product.validate(),
            Err(CommerceError::InvalidProduct(_))
        ));
    }

    #[test]
    fn test_full_stars() {
        let product = Product::new(1, "Candy", peso(100)).with_rating(4.8);
        assert_eq!(product.full_stars(), 4);
        assert_eq!(Product::new(2, "Gum", peso(100)).full_stars(), 0);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProductStatus::Unavailable).unwrap();
        assert_eq!(json, "\"unavailable\"");
    }
}
