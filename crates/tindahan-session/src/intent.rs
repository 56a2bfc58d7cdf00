//! User actions and their results.

use serde::{Deserialize, Serialize};
use tindahan_commerce::cart::AddOutcome;
use tindahan_commerce::catalog::CategoryFilter;
use tindahan_commerce::checkout::{OrderConfirmation, PaymentMethod};
use tindahan_commerce::ProductId;

/// One user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    /// Typing in the search box.
    SetSearchTerm { term: String },
    /// Clicking a category button.
    SelectCategory { category: CategoryFilter },
    /// "Clear Filters" on the empty results panel.
    ClearFilters,
    /// "Add to Cart" on a product card.
    AddToCart { product_id: ProductId },
    /// Direct quantity edit. Negative values are treated as zero.
    SetQuantity { product_id: ProductId, quantity: i64 },
    /// The "+" button on a cart line.
    Increment { product_id: ProductId },
    /// The "-" button on a cart line.
    Decrement { product_id: ProductId },
    /// The trash button on a cart line.
    RemoveItem { product_id: ProductId },
    /// The heart button on a product card.
    ToggleFavorite { product_id: ProductId },
    /// Choosing a payment option in the cart drawer.
    SelectPaymentMethod { method: PaymentMethod },
    /// The checkout button.
    Checkout,
    /// Open the cart drawer.
    OpenCart,
    /// Close the cart drawer.
    CloseCart,
    /// The hero "Shop Now" button, which asks the shopper to sign in.
    ShopNow,
    /// Dismiss the sign-in prompt.
    DismissLogin,
}

impl Intent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Intent::SetSearchTerm { .. } => "set_search_term",
            Intent::SelectCategory { .. } => "select_category",
            Intent::ClearFilters => "clear_filters",
            Intent::AddToCart { .. } => "add_to_cart",
            Intent::SetQuantity { .. } => "set_quantity",
            Intent::Increment { .. } => "increment",
            Intent::Decrement { .. } => "decrement",
            Intent::RemoveItem { .. } => "remove_item",
            Intent::ToggleFavorite { .. } => "toggle_favorite",
            Intent::SelectPaymentMethod { .. } => "select_payment_method",
            Intent::Checkout => "checkout",
            Intent::OpenCart => "open_cart",
            Intent::CloseCart => "close_cart",
            Intent::ShopNow => "shop_now",
            Intent::DismissLogin => "dismiss_login",
        }
    }
}

/// What a dispatched intent did.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The filter changed; `visible` products now match.
    FilterChanged { visible: usize },
    /// A product was put in the cart.
    Added(AddOutcome),
    /// A cart line was edited; `changed` is false for absent ids.
    CartUpdated { changed: bool },
    /// A product was liked (`liked`) or unliked.
    FavoriteToggled { product_id: ProductId, liked: bool },
    /// The payment method was switched.
    PaymentMethodSelected(PaymentMethod),
    /// The cart was checked out and cleared.
    CheckedOut(OrderConfirmation),
    /// Only panel visibility changed.
    PanelToggled,
}
