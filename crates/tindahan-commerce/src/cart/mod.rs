//! Shopping cart module.
//!
//! Contains the cart, its lines, pricing, events and the cart store.

mod cart;
mod events;
mod pricing;
mod store;

pub use cart::{AddOutcome, Cart, CartLine, MAX_LINE_QUANTITY};
pub use events::{CartEvent, CartObserver, Notification};
pub use pricing::{compute_totals, CartTotals, VAT_RATE};
pub use store::CartStore;
