//! The cart store: the only mutation surface for a session's cart.

use std::fmt;

use tracing::{debug, info};

use crate::cart::{
    compute_totals, AddOutcome, Cart, CartEvent, CartLine, CartObserver, CartTotals,
    MAX_LINE_QUANTITY,
};
use crate::catalog::Product;
use crate::checkout::{OrderConfirmation, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;

/// Owns a cart and broadcasts a [`CartEvent`] for every change.
///
/// Events go to subscribed observers as they happen and are also queued
/// until [`CartStore::take_events`] is called.
pub struct CartStore {
    cart: Cart,
    observers: Vec<Box<dyn CartObserver>>,
    pending: Vec<CartEvent>,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            observers: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Register an observer for all future events.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current cart contents.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Add one unit of `product`.
    ///
    /// Stock and availability are the caller's concern; the store only
    /// refuses invalid products and products priced in another currency.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<AddOutcome, CommerceError> {
        product.validate()?;
        if product.price.currency != self.cart.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.cart.currency().code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let (outcome, line) = self.cart.add(product);
        let event = match outcome {
            AddOutcome::Added => CartEvent::ItemAdded {
                product_id: line.product_id,
                name: line.name.clone(),
            },
            AddOutcome::Incremented => CartEvent::QuantityIncremented {
                product_id: line.product_id,
                name: line.name.clone(),
                quantity: line.quantity,
            },
        };
        self.emit(event);
        Ok(outcome)
    }

    /// Set a line's quantity exactly; 0 removes the line and values above
    /// [`MAX_LINE_QUANTITY`] are capped.
    ///
    /// Returns whether a line changed. An absent id is a no-op.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(product_id);
        }
        let quantity = quantity.min(MAX_LINE_QUANTITY);
        if !self.cart.set_quantity(product_id, quantity) {
            return false;
        }
        self.emit(CartEvent::QuantityUpdated {
            product_id,
            quantity,
        });
        true
    }

    /// Raise a line's quantity by one.
    pub fn increment(&mut self, product_id: ProductId) -> bool {
        let Some(current) = self.cart.line(product_id).map(|l| l.quantity) else {
            return false;
        };
        self.update_quantity(product_id, current.saturating_add(1))
    }

    /// Lower a line's quantity by one, removing it at zero.
    pub fn decrement(&mut self, product_id: ProductId) -> bool {
        let Some(current) = self.cart.line(product_id).map(|l| l.quantity) else {
            return false;
        };
        self.update_quantity(product_id, current.saturating_sub(1))
    }

    /// Remove a product's line. An absent id is a no-op.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        match self.cart.remove(product_id) {
            Some(line) => {
                self.emit(CartEvent::ItemRemoved {
                    product_id,
                    name: line.name,
                });
                true
            }
            None => false,
        }
    }

    /// Subtotal, tax and total of the current cart.
    pub fn totals(&self) -> CartTotals {
        compute_totals(&self.cart)
    }

    /// Finalize the cart: snapshot totals, clear every line, and return a
    /// confirmation. No payment is taken.
    pub fn checkout(
        &mut self,
        payment_method: PaymentMethod,
    ) -> Result<OrderConfirmation, CommerceError> {
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let totals = self.totals();
        let lines = self.cart.clear();
        let confirmation = OrderConfirmation::new(payment_method, totals, lines);

        info!(
            confirmation_id = %confirmation.id,
            payment_method = %payment_method,
            total = %totals.total.display(),
            "checkout completed"
        );
        self.emit(CartEvent::CheckoutStarted {
            payment_method,
            totals,
        });
        Ok(confirmation)
    }

    /// Drain events queued since the last call.
    pub fn take_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.pending)
    }

    fn emit(&mut self, event: CartEvent) {
        debug!(event = event.kind(), "cart event");
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
        self.pending.push(event);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("observers", &self.observers.len())
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn peso(minor: i64) -> Money {
        Money::from_minor_units(minor, Currency::PHP)
    }

    fn product(id: u64, minor: i64) -> Product {
        Product::new(id, format!("Product {}", id), peso(minor)).with_quantity(10)
    }

    #[test]
    fn test_add_twice_yields_quantity_two() {
        let mut store = CartStore::default();
        let p = product(1, 1550);
        assert_eq!(store.add_to_cart(&p).unwrap(), AddOutcome::Added);
        assert_eq!(store.add_to_cart(&p).unwrap(), AddOutcome::Incremented);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 2);
    }

    #[test]
    fn test_add_emits_distinct_events() {
        let mut store = CartStore::default();
        let p = product(1, 1550);
        store.add_to_cart(&p).unwrap();
        store.add_to_cart(&p).unwrap();

        let kinds: Vec<_> = store.take_events().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec!["item_added", "quantity_incremented"]);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let mut store = CartStore::default();
        let p = Product::new(1, "Imported", Money::from_minor_units(100, Currency::USD));
        assert!(matches!(
            store.add_to_cart(&p),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exactly() {
        let mut store = CartStore::default();
        let p = product(1, 1550);
        store.add_to_cart(&p).unwrap();
        store.add_to_cart(&p).unwrap();

        assert!(store.update_quantity(ProductId::new(1), 5));
        assert_eq!(store.lines()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut store = CartStore::default();
        store.add_to_cart(&product(1, 100)).unwrap();
        store.add_to_cart(&product(2, 100)).unwrap();
        store.take_events();

        assert!(store.update_quantity(ProductId::new(1), 0));
        assert_eq!(store.lines().len(), 1);
        assert!(!store.cart().contains(ProductId::new(1)));

        let events = store.take_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind(), "item_removed");
    }

    #[test]
    fn test_update_quantity_is_capped() {
        let mut store = CartStore::default();
        let p = Product::new(1, "Gold Bar", Money::new(crate::catalog::MAX_PRICE, Currency::PHP))
            .with_quantity(10);
        store.add_to_cart(&p).unwrap();
        store.take_events();

        assert!(store.update_quantity(ProductId::new(1), u32::MAX));
        assert_eq!(store.lines()[0].quantity, MAX_LINE_QUANTITY);
        let events = store.take_events();
        assert!(matches!(
            events.as_slice(),
            [CartEvent::QuantityUpdated {
                quantity: MAX_LINE_QUANTITY,
                ..
            }]
        ));

        assert!(store.increment(ProductId::new(1)));
        assert_eq!(store.lines()[0].quantity, MAX_LINE_QUANTITY);
        assert!(store.totals().total.amount > crate::catalog::MAX_PRICE);
    }

    #[test]
    fn test_add_rejects_invalid_product() {
        let mut store = CartStore::default();
        let p = Product::new(1, "   ", peso(100)).with_quantity(1);
        assert!(matches!(
            store.add_to_cart(&p),
            Err(CommerceError::InvalidProduct(_))
        ));
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = CartStore::default();
        store.add_to_cart(&product(1, 100)).unwrap();
        let before = store.cart().clone();
        store.take_events();

        assert!(!store.update_quantity(ProductId::new(9), 3));
        assert!(!store.update_quantity(ProductId::new(9), 0));
        assert_eq!(store.cart(), &before);
        assert!(store.take_events().is_empty());
    }

    #[test]
    fn test_remove_missing_leaves_cart_unchanged() {
        let mut store = CartStore::default();
        store.add_to_cart(&product(1, 100)).unwrap();
        let before = store.cart().clone();

        assert!(!store.remove_item(ProductId::new(42)));
        assert_eq!(store.cart(), &before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = CartStore::default();
        store.add_to_cart(&product(1, 100)).unwrap();
        store.add_to_cart(&product(2, 100)).unwrap();

        assert!(store.remove_item(ProductId::new(1)));
        let once = store.cart().clone();
        assert!(!store.remove_item(ProductId::new(1)));
        assert_eq!(store.cart(), &once);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut store = CartStore::default();
        store.add_to_cart(&product(1, 100)).unwrap();

        assert!(store.increment(ProductId::new(1)));
        assert_eq!(store.lines()[0].quantity, 2);

        assert!(store.decrement(ProductId::new(1)));
        assert!(store.decrement(ProductId::new(1)));
        assert!(store.cart().is_empty());
        assert!(!store.decrement(ProductId::new(1)));
    }

    #[test]
    fn test_checkout_clears_and_confirms() {
        let mut store = CartStore::default();
        let a = product(1, 1000);
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&a).unwrap();
        store.add_to_cart(&product(2, 500)).unwrap();

        let confirmation = store.checkout(PaymentMethod::Pickup).unwrap();
        assert!(store.cart().is_empty());
        assert_eq!(confirmation.payment_method, PaymentMethod::Pickup);
        assert_eq!(confirmation.totals.subtotal, peso(2500));
        assert_eq!(confirmation.totals.tax, peso(300));
        assert_eq!(confirmation.totals.total, peso(2800));
        assert_eq!(confirmation.item_count(), 3);
        assert!(store.totals().total.is_zero());
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let mut store = CartStore::default();
        assert_eq!(
            store.checkout(PaymentMethod::Online).unwrap_err(),
            CommerceError::EmptyCart
        );
    }

    #[test]
    fn test_observers_see_events_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store = CartStore::default();
        store.subscribe(move |e: &CartEvent| sink.borrow_mut().push(e.kind()));

        let p = product(1, 100);
        store.add_to_cart(&p).unwrap();
        store.add_to_cart(&p).unwrap();
        store.update_quantity(ProductId::new(1), 4);
        store.checkout(PaymentMethod::Online).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                "item_added",
                "quantity_incremented",
                "quantity_updated",
                "checkout_started"
            ]
        );
    }
}
