//! Payment method selection.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the shopper will pay. No payment is actually taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Pay when collecting the order.
    #[default]
    Pickup,
    /// Pay online (GCash, card or bank transfer).
    Online,
}

impl PaymentMethod {
    /// Both methods, in the order the cart panel lists them.
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Pickup, PaymentMethod::Online];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pickup => "pickup",
            PaymentMethod::Online => "online",
        }
    }

    /// Name used in order notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Pickup => "Pay on Pickup",
            PaymentMethod::Online => "Online Payment",
        }
    }

    /// Label of the radio option in the cart panel.
    pub fn option_label(&self) -> &'static str {
        match self {
            PaymentMethod::Pickup => "Pay on Pickup",
            PaymentMethod::Online => "Pay Online",
        }
    }

    /// Helper text under the radio option.
    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Pickup => "Pay when you collect your order",
            PaymentMethod::Online => "Secure online payment via GCash, Card, or Bank Transfer",
        }
    }

    /// Verb on the checkout button.
    pub fn checkout_label(&self) -> &'static str {
        match self {
            PaymentMethod::Pickup => "Place Order",
            PaymentMethod::Online => "Pay Now",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pickup" => Ok(PaymentMethod::Pickup),
            "online" => Ok(PaymentMethod::Online),
            other => Err(CommerceError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
