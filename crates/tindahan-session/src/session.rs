//! The storefront page session.

use std::collections::BTreeSet;

use anyhow::Result;
use tindahan_commerce::prelude::*;
use tindahan_observability::EventLogger;
use tracing::{debug, warn};

use crate::config::StorefrontConfig;
use crate::intent::{DispatchOutcome, Intent};
use crate::view::{CartPanel, CategoryButton, ProductCard, SessionView};

/// Message shown when the filter matches nothing.
pub const NO_PRODUCTS_MESSAGE: &str = "No products found";

/// One shopper's page: catalog, filter, cart and panel state.
///
/// Intents are applied one at a time, in the order they are dispatched.
pub struct Session<C: CatalogSource = StaticCatalog> {
    id: SessionId,
    store_name: String,
    catalog: C,
    filter: ProductFilter,
    store: CartStore,
    payment_method: PaymentMethod,
    cart_open: bool,
    login_prompt_open: bool,
    favorites: BTreeSet<ProductId>,
    notifications: Vec<Notification>,
}

impl Session<StaticCatalog> {
    /// Build a session from configuration, logging cart events at the
    /// configured level and format.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let currency = config.currency()?;
        let catalog = config.build_catalog()?;

        let mut session = Session::new(catalog, currency).with_store_name(&config.store.name);
        let logger = config.event_logger(session.id.clone());
        session.subscribe(EventLogger::new(logger));
        Ok(session)
    }
}

impl<C: CatalogSource> Session<C> {
    /// Create a session over a catalog, with an empty cart priced in `currency`.
    pub fn new(catalog: C, currency: Currency) -> Self {
        Self {
            id: SessionId::generate(),
            store_name: "Tindahan".to_string(),
            catalog,
            filter: ProductFilter::new(),
            store: CartStore::new(currency),
            payment_method: PaymentMethod::default(),
            cart_open: false,
            login_prompt_open: false,
            favorites: BTreeSet::new(),
            notifications: Vec::new(),
        }
    }

    /// Set the store name shown in the view.
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// Register an additional cart observer.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.store.subscribe(observer);
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn cart(&self) -> &Cart {
        self.store.cart()
    }

    pub fn totals(&self) -> CartTotals {
        self.store.totals()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Check whether the shopper has liked a product.
    pub fn is_favorite(&self, product_id: ProductId) -> bool {
        self.favorites.contains(&product_id)
    }

    /// Apply one intent.
    ///
    /// On error nothing has changed.
    pub fn dispatch(&mut self, intent: Intent) -> Result<DispatchOutcome, CommerceError> {
        debug!(session_id = %self.id, intent = intent.kind(), "dispatch");

        let result = self.apply(intent);
        if let Err(e) = &result {
            warn!(session_id = %self.id, error = %e, "intent rejected");
        }

        let events = self.store.take_events();
        self.notifications
            .extend(events.iter().filter_map(CartEvent::notification));
        result
    }

    fn apply(&mut self, intent: Intent) -> Result<DispatchOutcome, CommerceError> {
        let outcome = match intent {
            Intent::SetSearchTerm { term } => {
                self.filter.search_term = term;
                self.filter_changed()
            }
            Intent::SelectCategory { category } => {
                self.filter.category = category;
                self.filter_changed()
            }
            Intent::ClearFilters => {
                self.filter.clear();
                self.filter_changed()
            }
            Intent::AddToCart { product_id } => {
                let product = self
                    .catalog
                    .find(product_id)
                    .ok_or(CommerceError::ProductNotFound(product_id))?;
                if !product.is_purchasable() {
                    return Err(CommerceError::ProductUnavailable(product_id));
                }
                DispatchOutcome::Added(self.store.add_to_cart(product)?)
            }
            Intent::SetQuantity {
                product_id,
                quantity,
            } => {
                let quantity = quantity.clamp(0, i64::from(MAX_LINE_QUANTITY));
                let quantity = u32::try_from(quantity).unwrap_or(MAX_LINE_QUANTITY);
                DispatchOutcome::CartUpdated {
                    changed: self.store.update_quantity(product_id, quantity),
                }
            }
            Intent::Increment { product_id } => DispatchOutcome::CartUpdated {
                changed: self.store.increment(product_id),
            },
            Intent::Decrement { product_id } => DispatchOutcome::CartUpdated {
                changed: self.store.decrement(product_id),
            },
            Intent::RemoveItem { product_id } => DispatchOutcome::CartUpdated {
                changed: self.store.remove_item(product_id),
            },
            Intent::ToggleFavorite { product_id } => {
                if self.catalog.find(product_id).is_none() {
                    return Err(CommerceError::ProductNotFound(product_id));
                }
                let liked = self.favorites.insert(product_id);
                if !liked {
                    self.favorites.remove(&product_id);
                }
                DispatchOutcome::FavoriteToggled { product_id, liked }
            }
            Intent::SelectPaymentMethod { method } => {
                self.payment_method = method;
                DispatchOutcome::PaymentMethodSelected(method)
            }
            Intent::Checkout => {
                let confirmation = self.store.checkout(self.payment_method)?;
                self.cart_open = false;
                DispatchOutcome::CheckedOut(confirmation)
            }
            Intent::OpenCart => {
                self.cart_open = true;
                DispatchOutcome::PanelToggled
            }
            Intent::CloseCart => {
                self.cart_open = false;
                DispatchOutcome::PanelToggled
            }
            Intent::ShopNow => {
                self.login_prompt_open = true;
                DispatchOutcome::PanelToggled
            }
            Intent::DismissLogin => {
                self.login_prompt_open = false;
                DispatchOutcome::PanelToggled
            }
        };
        Ok(outcome)
    }

    fn filter_changed(&self) -> DispatchOutcome {
        let visible = self
            .catalog
            .products()
            .iter()
            .filter(|p| self.filter.matches(p))
            .count();
        DispatchOutcome::FilterChanged { visible }
    }

    /// Drain notifications raised since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Snapshot the page.
    pub fn view(&self) -> SessionView {
        let results = self.filter.apply(self.catalog.products());
        let cart = self.store.cart();

        SessionView {
            store_name: self.store_name.clone(),
            search_term: self.filter.search_term.clone(),
            categories: CategoryButton::list(&self.filter.category),
            products: results
                .products
                .iter()
                .map(|p| ProductCard::new(p, self.is_favorite(p.id)))
                .collect(),
            summary: results.summary(),
            empty_message: results.is_empty().then(|| NO_PRODUCTS_MESSAGE.to_string()),
            cart_item_count: cart.item_count(),
            cart: CartPanel::build(
                self.cart_open,
                cart.lines(),
                self.store.totals(),
                self.payment_method,
            ),
            login_prompt_open: self.login_prompt_open,
        }
    }
}

impl<C: CatalogSource> std::fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("filter", &self.filter)
            .field("store", &self.store)
            .field("payment_method", &self.payment_method)
            .field("cart_open", &self.cart_open)
            .field("favorites", &self.favorites)
            .finish_non_exhaustive()
    }
}
