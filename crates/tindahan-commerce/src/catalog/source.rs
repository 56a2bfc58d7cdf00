//! Catalog sources.

use crate::catalog::{Product, ProductStatus};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Supplies the products shown in the storefront.
///
/// The storefront only reads from a source; it never writes back.
pub trait CatalogSource {
    /// All products, in display order.
    fn products(&self) -> &[Product];

    /// Look up a product by id.
    fn find(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    fn len(&self) -> usize {
        self.products().len()
    }

    /// Check whether the catalog has no products.
    fn is_empty(&self) -> bool {
        self.products().is_empty()
    }
}

/// An in-memory, fixed list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Build a catalog, validating every product and rejecting duplicate ids.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CommerceError> {
        for (index, product) in products.iter().enumerate() {
            product.validate()?;
            if products[..index].iter().any(|p| p.id == product.id) {
                return Err(CommerceError::InvalidProduct(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        Self {
            products: sample_products(),
        }
    }
}

impl CatalogSource for StaticCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

fn sample_products() -> Vec<Product> {
    let peso = |minor| Money::from_minor_units(minor, Currency::PHP);
    vec![
        Product::new(1, "Lucky Me! Instant Pancit Canton", peso(1550))
            .with_description("Original flavor instant noodles - a Filipino favorite")
            .with_category("Snacks & Treats")
            .with_quantity(45)
            .with_rating(4.5),
        Product::new(2, "Kopiko Coffee Candy", peso(800))
            .with_description("Rich coffee flavor hard candy")
            .with_category("Snacks & Treats")
            .with_quantity(23)
            .with_rating(4.2),
        Product::new(3, "Selecta Ice Cream", peso(12000))
            .with_description("Premium local ice cream - assorted flavors")
            .with_category("Frozen Goods")
            .with_quantity(8)
            .with_rating(4.8),
        Product::new(4, "Colgate Toothpaste", peso(8500))
            .with_description("Fresh mint toothpaste for daily oral care")
            .with_category("Personal Care")
            .with_quantity(15)
            .with_rating(4.3),
        Product::new(5, "Joy Dishwashing Liquid", peso(2500))
            .with_description("Lemon scented dishwashing soap")
            .with_category("Household Items")
            .with_status(ProductStatus::Unavailable)
            .with_quantity(0)
            .with_rating(4.1),
        Product::new(6, "San Miguel Beer", peso(5500))
            .with_description("Premium Filipino beer - ice cold")
            .with_category("Beverages")
            .with_quantity(32)
            .with_rating(4.6),
    ]
}
