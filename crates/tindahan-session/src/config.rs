//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tindahan_commerce::catalog::{Product, ProductStatus, StaticCatalog};
use tindahan_commerce::{Currency, Money, ProductId, SessionId};
use tindahan_observability::{LoggingConfig, StructuredLogger};

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store metadata.
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Catalog override.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl StorefrontConfig {
    /// Load config from a file (JSON if the extension is `.json`, TOML otherwise).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The configured store currency.
    pub fn currency(&self) -> Result<Currency> {
        self.store
            .currency
            .parse::<Currency>()
            .with_context(|| format!("Invalid [store] currency: {}", self.store.currency))
    }

    /// Cart event logger for a session, honoring `[logging] level` and `format`.
    pub fn event_logger(&self, session_id: SessionId) -> StructuredLogger {
        StructuredLogger::new(session_id)
            .with_component("cart")
            .with_min_level(self.logging.min_level())
            .with_format(self.logging.format)
    }

    /// Build the catalog: the configured products, or the sample catalog when
    /// none are configured.
    pub fn build_catalog(&self) -> Result<StaticCatalog> {
        if self.catalog.products.is_empty() {
            return Ok(StaticCatalog::sample());
        }

        let currency = self.currency()?;
        let products = self
            .catalog
            .products
            .iter()
            .map(|entry| entry.to_product(currency))
            .collect();
        StaticCatalog::from_products(products).context("Invalid [catalog] products")
    }
}

/// Store metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Display name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// ISO currency code for all prices.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_store_name() -> String {
    "Tindahan".to_string()
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: default_currency(),
        }
    }
}

/// Catalog section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products replacing the sample catalog.
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

/// A product as written in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub id: u64,
    pub name: String,
    /// Price in major units, e.g. "15.50".
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub status: ProductStatus,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductEntry {
    fn to_product(&self, currency: Currency) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.clone(),
            price: Money::new(self.price, currency),
            description: self.description.clone(),
            category: self.category.clone(),
            status: self.status,
            quantity: self.quantity,
            rating: self.rating,
            image: self.image.clone(),
        }
    }
}
