//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Most units of one product a cart line can hold.
pub const MAX_LINE_QUANTITY: u32 = 9_999;

/// What happened when a product was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was created with quantity 1.
    Added,
    /// An existing line's quantity went up by one.
    Incremented,
}

/// One product's entry in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub unit_price: Money,
    /// Always at least 1.
    pub quantity: u32,
    /// Product image at the time it was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// Create a line with quantity 1 from a product snapshot.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            image: product.image.clone(),
        }
    }

    /// Unit price times quantity, unrounded.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// A shopping cart: cart lines in insertion order, at most one per product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Check whether the product has a line.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.line(product_id).is_some()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product, merging into its existing line.
    pub(crate) fn add(&mut self, product: &Product) -> (AddOutcome, &CartLine) {
        match self.lines.iter().position(|l| l.product_id == product.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
                (AddOutcome::Incremented, &self.lines[index])
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                let index = self.lines.len() - 1;
                (AddOutcome::Added, &self.lines[index])
            }
        }
    }

    /// Set a line's quantity, capped at [`MAX_LINE_QUANTITY`]. `quantity`
    /// must be at least 1.
    pub(crate) fn set_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        debug_assert!(quantity >= 1);
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity.min(MAX_LINE_QUANTITY);
                true
            }
            None => false,
        }
    }

    /// Remove a product's line, returning it.
    pub(crate) fn remove(&mut self, product_id: ProductId) -> Option<CartLine> {
        let index = self.lines.iter().position(|l| l.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    /// Remove every line.
    pub(crate) fn clear(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }
}
