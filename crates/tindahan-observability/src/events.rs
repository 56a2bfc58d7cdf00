//! Logging of cart events.

use tindahan_commerce::cart::{CartEvent, CartObserver};

use crate::logging::StructuredLogger;

/// Cart observer that writes one structured log entry per event.
#[derive(Debug, Clone)]
pub struct EventLogger {
    logger: StructuredLogger,
}

impl EventLogger {
    pub fn new(logger: StructuredLogger) -> Self {
        Self { logger }
    }
}

impl CartObserver for EventLogger {
    fn on_event(&mut self, event: &CartEvent) {
        let entry = self.logger.info(event.kind()).field("event", event.kind());

        let entry = match event {
            CartEvent::ItemAdded { product_id, name } | CartEvent::ItemRemoved { product_id, name } => {
                entry.field("product_id", product_id).field("product", name)
            }
            CartEvent::QuantityIncremented {
                product_id,
                name,
                quantity,
            } => entry
                .field("product_id", product_id)
                .field("product", name)
                .field("quantity", quantity),
            CartEvent::QuantityUpdated {
                product_id,
                quantity,
            } => entry
                .field("product_id", product_id)
                .field("quantity", quantity),
            CartEvent::CheckoutStarted {
                payment_method,
                totals,
            } => entry
                .field("payment_method", payment_method)
                .field("subtotal", totals.subtotal.display_amount())
                .field("tax", totals.tax.display_amount())
                .field("total", totals.total.display_amount()),
        };
        entry.emit();
    }
}
