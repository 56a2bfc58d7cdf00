//! Order confirmation returned by checkout.

use crate::cart::{CartLine, CartTotals};
use crate::checkout::PaymentMethod;
use crate::ids::ConfirmationId;
use serde::{Deserialize, Serialize};

/// Record of a completed checkout.
///
/// Totals and lines are captured immediately before the cart is cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// Unique confirmation identifier.
    pub id: ConfirmationId,
    /// Chosen payment method.
    pub payment_method: PaymentMethod,
    /// Totals of the checked-out cart.
    pub totals: CartTotals,
    /// Lines that were in the cart.
    pub lines: Vec<CartLine>,
    /// Unix timestamp of checkout.
    pub placed_at: i64,
}

impl OrderConfirmation {
    pub(crate) fn new(payment_method: PaymentMethod, totals: CartTotals, lines: Vec<CartLine>) -> Self {
        Self {
            id: ConfirmationId::generate(),
            payment_method,
            totals,
            lines,
            placed_at: current_timestamp(),
        }
    }

    /// Total units ordered.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Text of the checkout button that produced this order
    /// (e.g., "Place Order - ₱17.36").
    pub fn button_text(&self) -> String {
        format!(
            "{} - {}",
            self.payment_method.checkout_label(),
            self.totals.total.display()
        )
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
