//! Serializable snapshot of everything the storefront page shows.

use serde::Serialize;
use tindahan_commerce::cart::{CartLine, CartTotals};
use tindahan_commerce::catalog::{CategoryFilter, Product, StockBadge};
use tindahan_commerce::checkout::PaymentMethod;
use tindahan_commerce::ProductId;

/// The whole page at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub store_name: String,
    pub search_term: String,
    pub categories: Vec<CategoryButton>,
    pub products: Vec<ProductCard>,
    /// "Showing N of M products".
    pub summary: String,
    /// Set when no product matches the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Badge on the cart icon (total units).
    pub cart_item_count: u64,
    pub cart: CartPanel,
    pub login_prompt_open: bool,
}

/// One category button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub label: String,
    pub selected: bool,
}

impl CategoryButton {
    pub(crate) fn list(selected: &CategoryFilter) -> Vec<Self> {
        CategoryFilter::storefront()
            .into_iter()
            .map(|category| CategoryButton {
                selected: &category == selected,
                label: category.label().to_string(),
            })
            .collect()
    }
}

/// One product card in the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Stock badges in display order; may hold both.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<StockBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub full_stars: u8,
    /// e.g. "45 in stock".
    pub stock_text: String,
    pub can_add: bool,
    /// Heart toggle state.
    pub liked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductCard {
    pub fn new(product: &Product, liked: bool) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price.display(),
            description: product.description.clone(),
            category: product.category.clone(),
            badges: product.stock_badges(),
            rating: product.rating,
            full_stars: product.full_stars(),
            stock_text: format!("{} in stock", product.quantity),
            can_add: product.is_purchasable(),
            liked,
            image: product.image.clone(),
        }
    }
}

/// The cart drawer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartPanel {
    pub open: bool,
    /// "Shopping Cart (N)" where N is the number of lines.
    pub title: String,
    pub lines: Vec<CartLineView>,
    /// Rounded display amounts; absent when the cart is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsView>,
    pub payment_options: Vec<PaymentOption>,
    /// Checkout button text; absent when the cart is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_button: Option<String>,
}

impl CartPanel {
    pub(crate) fn build(
        open: bool,
        lines: &[CartLine],
        totals: CartTotals,
        selected: PaymentMethod,
    ) -> Self {
        let (totals, checkout_button) = if lines.is_empty() {
            (None, None)
        } else {
            let button = format!("{} - {}", selected.checkout_label(), totals.total.display());
            (Some(TotalsView::from(totals)), Some(button))
        };

        Self {
            open,
            title: format!("Shopping Cart ({})", lines.len()),
            lines: lines.iter().map(CartLineView::from).collect(),
            totals,
            payment_options: PaymentOption::list(selected),
            checkout_button,
        }
    }
}

/// One line in the cart drawer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name.clone(),
            unit_price: line.unit_price.display(),
            quantity: line.quantity,
            line_total: line.line_total().display(),
        }
    }
}

/// Subtotal, VAT and total as display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TotalsView {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<CartTotals> for TotalsView {
    fn from(totals: CartTotals) -> Self {
        Self {
            subtotal: totals.subtotal.display(),
            tax: totals.tax.display(),
            total: totals.total.display(),
        }
    }
}

/// A payment radio option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub label: &'static str,
    pub description: &'static str,
    pub selected: bool,
}

impl PaymentOption {
    fn list(selected: PaymentMethod) -> Vec<Self> {
        PaymentMethod::ALL
            .iter()
            .map(|&method| PaymentOption {
                method,
                label: method.option_label(),
                description: method.description(),
                selected: method == selected,
            })
            .collect()
    }
}
