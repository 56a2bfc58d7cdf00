//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors that can occur in storefront operations.
///
/// Operations on a product id that is not in the cart are not errors; they
/// are silent no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product failed boundary validation.
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product is out of stock or marked unavailable.
    #[error("Product is not available for purchase: {0}")]
    ProductUnavailable(ProductId),

    /// Payment method string was not recognized.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Checkout was requested on an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Currency code was not recognized.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),
}
