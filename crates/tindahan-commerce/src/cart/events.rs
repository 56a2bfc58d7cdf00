//! Cart events and their shopper-facing notifications.

use crate::cart::CartTotals;
use crate::checkout::PaymentMethod;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A state change in the cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A product got its first cart line.
    ItemAdded { product_id: ProductId, name: String },
    /// A repeat add bumped an existing line.
    QuantityIncremented {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    /// A line's quantity was set explicitly.
    QuantityUpdated { product_id: ProductId, quantity: u32 },
    /// A line left the cart.
    ItemRemoved { product_id: ProductId, name: String },
    /// The cart was checked out and cleared.
    CheckoutStarted {
        payment_method: PaymentMethod,
        totals: CartTotals,
    },
}

impl CartEvent {
    /// Short machine-readable name of the event.
    pub fn kind(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "item_added",
            CartEvent::QuantityIncremented { .. } => "quantity_incremented",
            CartEvent::QuantityUpdated { .. } => "quantity_updated",
            CartEvent::ItemRemoved { .. } => "item_removed",
            CartEvent::CheckoutStarted { .. } => "checkout_started",
        }
    }

    /// Toast to show the shopper, if this event warrants one.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            CartEvent::ItemAdded { name, .. } => Some(Notification::new(
                "Added to Cart",
                format!("{} has been added to your cart", name),
            )),
            CartEvent::QuantityIncremented { name, .. } => Some(Notification::new(
                "Updated Cart",
                format!("Increased {} quantity", name),
            )),
            CartEvent::QuantityUpdated { .. } => None,
            CartEvent::ItemRemoved { .. } => Some(Notification::new(
                "Removed from Cart",
                "Item has been removed from your cart",
            )),
            CartEvent::CheckoutStarted { payment_method, .. } => Some(Notification::new(
                "Order Processing",
                format!(
                    "Your order will be processed with {}",
                    payment_method.display_name()
                ),
            )),
        }
    }
}

/// A human-readable acknowledgment for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Receives every event the cart store emits, in order.
pub trait CartObserver {
    fn on_event(&mut self, event: &CartEvent);
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent),
{
    fn on_event(&mut self, event: &CartEvent) {
        self(event)
    }
}
