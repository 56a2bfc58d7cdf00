//! Cart pricing calculations.

use crate::cart::Cart;
use crate::money::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat value-added tax applied to the subtotal (12%).
pub const VAT_RATE: Decimal = Decimal::from_parts(12, 0, 0, false, 2);

/// Pricing breakdown for a cart.
///
/// Amounts are exact; round with [`Money::rounded`] or [`Money::display`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// `subtotal * VAT_RATE`.
    pub tax: Money,
    /// `subtotal + tax`.
    pub total: Money,
}

impl CartTotals {
    /// Derive totals from a subtotal.
    pub fn from_subtotal(subtotal: Money) -> Self {
        let tax = subtotal.apply_rate(VAT_RATE);
        let total = Money::new(subtotal.amount + tax.amount, subtotal.currency);
        Self {
            subtotal,
            tax,
            total,
        }
    }

    /// Totals rounded to the currency's minor unit.
    pub fn rounded(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal.rounded(),
            tax: self.tax.rounded(),
            total: self.total.rounded(),
        }
    }
}

/// Compute subtotal, tax and total for a cart.
pub fn compute_totals(cart: &Cart) -> CartTotals {
    let subtotal: Decimal = cart
        .lines()
        .iter()
        .map(|line| line.line_total().amount)
        .sum();
    CartTotals::from_subtotal(Money::new(subtotal, cart.currency()))
}
