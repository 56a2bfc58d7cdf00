//! Checkout module.
//!
//! Payment method selection and order confirmations.

mod confirmation;
mod payment;

pub use confirmation::OrderConfirmation;
pub use payment::PaymentMethod;
