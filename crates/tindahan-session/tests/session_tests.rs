//! Whole-session tests: intents in, views and notifications out.

use std::cell::RefCell;
use std::rc::Rc;

use tindahan_commerce::prelude::*;
use tindahan_session::{DispatchOutcome, Intent, Session, StorefrontConfig, NO_PRODUCTS_MESSAGE};

fn peso(minor: i64) -> Money {
    Money::from_minor_units(minor, Currency::PHP)
}

fn sample_session() -> Session {
    Session::new(StaticCatalog::sample(), Currency::PHP)
}

fn add(session: &mut Session, id: u64) {
    session
        .dispatch(Intent::AddToCart {
            product_id: ProductId::new(id),
        })
        .unwrap();
}

fn set_quantity(session: &mut Session, id: u64, quantity: i64) -> DispatchOutcome {
    session
        .dispatch(Intent::SetQuantity {
            product_id: ProductId::new(id),
            quantity,
        })
        .unwrap()
}

#[test]
fn single_item_totals() {
    let mut session = sample_session();
    add(&mut session, 1);

    let totals = session.totals();
    assert_eq!(totals.subtotal, peso(1550));
    assert_eq!(totals.tax, peso(186));
    assert_eq!(totals.total, peso(1736));

    let view = session.view();
    let shown = view.cart.totals.unwrap();
    assert_eq!(shown.subtotal, "\u{20b1}15.50");
    assert_eq!(shown.tax, "\u{20b1}1.86");
    assert_eq!(shown.total, "\u{20b1}17.36");
}

#[test]
fn multi_line_totals() {
    let catalog = StaticCatalog::from_products(vec![
        Product::new(1, "Chicharon", peso(1000)).with_quantity(10),
        Product::new(2, "Pandesal", peso(500)).with_quantity(10),
    ])
    .unwrap();
    let mut session = Session::new(catalog, Currency::PHP);
    add(&mut session, 1);
    add(&mut session, 1);
    add(&mut session, 2);

    let totals = session.totals();
    assert_eq!(totals.subtotal.display(), "\u{20b1}25.00");
    assert_eq!(totals.tax.display(), "\u{20b1}3.00");
    assert_eq!(totals.total.display(), "\u{20b1}28.00");
}

#[test]
fn repeat_add_then_set_quantity() {
    let mut session = sample_session();
    add(&mut session, 1);
    add(&mut session, 1);
    assert_eq!(session.cart().line_count(), 1);
    assert_eq!(session.cart().lines()[0].quantity, 2);

    set_quantity(&mut session, 1, 5);
    assert_eq!(session.cart().lines()[0].quantity, 5);
    assert_eq!(session.view().cart_item_count, 5);
}

#[test]
fn pickup_checkout_empties_cart() {
    let mut session = sample_session();
    add(&mut session, 1);
    add(&mut session, 3);
    let before = session.totals();

    let method: PaymentMethod = "pickup".parse().unwrap();
    session
        .dispatch(Intent::SelectPaymentMethod { method })
        .unwrap();
    let outcome = session.dispatch(Intent::Checkout).unwrap();

    let DispatchOutcome::CheckedOut(confirmation) = outcome else {
        panic!("expected a confirmation, got {:?}", outcome);
    };
    assert_eq!(confirmation.totals, before);
    assert_eq!(confirmation.item_count(), 2);
    assert!(session.cart().is_empty());
    assert!(session.view().cart.totals.is_none());
}

#[test]
fn unknown_payment_method_is_rejected_at_the_boundary() {
    let result = "cash".parse::<PaymentMethod>();
    assert_eq!(
        result,
        Err(CommerceError::UnknownPaymentMethod("cash".to_string()))
    );
}

#[test]
fn search_and_category_filter() {
    let catalog = StaticCatalog::from_products(vec![
        Product::new(1, "Lucky Me! Instant Pancit Canton", peso(1550))
            .with_category("Snacks & Treats")
            .with_quantity(45),
        Product::new(3, "Selecta Ice Cream", peso(12000))
            .with_category("Frozen Goods")
            .with_quantity(8),
    ])
    .unwrap();
    let mut session = Session::new(catalog, Currency::PHP);

    let outcome = session
        .dispatch(Intent::SetSearchTerm {
            term: "ice".to_string(),
        })
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::FilterChanged { visible: 1 });

    let view = session.view();
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].name, "Selecta Ice Cream");
    assert_eq!(view.summary, "Showing 1 of 2 products");

    session
        .dispatch(Intent::SelectCategory {
            category: CategoryFilter::named("Beverages"),
        })
        .unwrap();
    let view = session.view();
    assert!(view.products.is_empty());
    assert_eq!(view.empty_message.as_deref(), Some(NO_PRODUCTS_MESSAGE));
    assert!(view
        .categories
        .iter()
        .any(|c| c.selected && c.label == "Beverages"));

    session.dispatch(Intent::ClearFilters).unwrap();
    let view = session.view();
    assert_eq!(view.products.len(), 2);
    assert_eq!(view.search_term, "");
    assert!(view.categories[0].selected);
}

#[test]
fn notifications_follow_intent_order() {
    let mut session = sample_session();
    add(&mut session, 1);
    add(&mut session, 1);
    set_quantity(&mut session, 1, 3);
    session
        .dispatch(Intent::RemoveItem {
            product_id: ProductId::new(1),
        })
        .unwrap();

    let toasts = session.take_notifications();
    let titles: Vec<_> = toasts.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Added to Cart", "Updated Cart", "Removed from Cart"]);
    assert_eq!(
        toasts[0].description,
        "Lucky Me! Instant Pancit Canton has been added to your cart"
    );
    assert_eq!(
        toasts[1].description,
        "Increased Lucky Me! Instant Pancit Canton quantity"
    );
    assert!(session.take_notifications().is_empty());
}

#[test]
fn checkout_notification_names_the_method() {
    let mut session = sample_session();
    add(&mut session, 2);
    session
        .dispatch(Intent::SelectPaymentMethod {
            method: PaymentMethod::Online,
        })
        .unwrap();
    session.dispatch(Intent::Checkout).unwrap();

    let last = session.take_notifications().pop().unwrap();
    assert_eq!(last.title, "Order Processing");
    assert_eq!(
        last.description,
        "Your order will be processed with Online Payment"
    );
}

#[test]
fn remove_and_absent_ids_are_no_ops() {
    let mut session = sample_session();
    add(&mut session, 1);
    add(&mut session, 2);

    let remove = |session: &mut Session| {
        session
            .dispatch(Intent::RemoveItem {
                product_id: ProductId::new(2),
            })
            .unwrap()
    };
    assert_eq!(remove(&mut session), DispatchOutcome::CartUpdated { changed: true });
    assert_eq!(remove(&mut session), DispatchOutcome::CartUpdated { changed: false });
    assert_eq!(session.cart().line_count(), 1);

    let outcome = set_quantity(&mut session, 42, 3);
    assert_eq!(outcome, DispatchOutcome::CartUpdated { changed: false });
    assert_eq!(session.cart().line_count(), 1);
}

#[test]
fn decrement_at_one_removes_line() {
    let mut session = sample_session();
    add(&mut session, 4);
    session
        .dispatch(Intent::Increment {
            product_id: ProductId::new(4),
        })
        .unwrap();
    assert_eq!(session.cart().lines()[0].quantity, 2);

    for _ in 0..2 {
        session
            .dispatch(Intent::Decrement {
                product_id: ProductId::new(4),
            })
            .unwrap();
    }
    assert!(session.cart().is_empty());
}

#[test]
fn cart_lines_keep_insertion_order() {
    let mut session = sample_session();
    for id in [6, 1, 3] {
        add(&mut session, id);
    }
    add(&mut session, 1);

    let ids: Vec<u64> = session
        .cart()
        .lines()
        .iter()
        .map(|l| l.product_id.get())
        .collect();
    assert_eq!(ids, [6, 1, 3]);
}

#[test]
fn observers_see_every_event() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = sample_session();
    let sink = Rc::clone(&seen);
    session.subscribe(move |event: &CartEvent| sink.borrow_mut().push(event.kind()));

    add(&mut session, 1);
    set_quantity(&mut session, 1, 4);
    set_quantity(&mut session, 1, 0);

    assert_eq!(
        *seen.borrow(),
        ["item_added", "quantity_updated", "item_removed"]
    );
}

#[test]
fn view_serializes_to_json() {
    let mut session = sample_session();
    add(&mut session, 1);
    session.dispatch(Intent::OpenCart).unwrap();

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["summary"], "Showing 6 of 6 products");
    assert_eq!(json["cart"]["open"], true);
    assert_eq!(json["cart"]["title"], "Shopping Cart (1)");
    assert_eq!(json["cart"]["checkout_button"], "Place Order - \u{20b1}17.36");
    assert_eq!(json["cart"]["lines"][0]["line_total"], "\u{20b1}15.50");
    assert_eq!(json["cart"]["payment_options"][0]["selected"], true);
    assert_eq!(json["products"][2]["badges"], serde_json::Value::Null);
    assert_eq!(json["products"][4]["badges"][0], "out_of_stock");
    assert_eq!(json["products"][4]["liked"], false);
    assert_eq!(json["products"][4]["can_add"], false);
}

#[test]
fn intents_deserialize_from_json() {
    let intent: Intent =
        serde_json::from_str(r#"{"type":"set_quantity","product_id":3,"quantity":-1}"#).unwrap();
    assert_eq!(
        intent,
        Intent::SetQuantity {
            product_id: ProductId::new(3),
            quantity: -1
        }
    );

    let intent: Intent =
        serde_json::from_str(r#"{"type":"select_category","category":"Frozen Goods"}"#).unwrap();
    assert_eq!(
        intent,
        Intent::SelectCategory {
            category: CategoryFilter::named("Frozen Goods")
        }
    );
}

#[test]
fn session_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storefront.toml");
    std::fs::write(
        &path,
        r#"
        [store]
        name = "Sari-Sari ni Lola"

        [[catalog.products]]
        id = 7
        name = "Piattos"
        price = "18.00"
        quantity = 3
        "#,
    )
    .unwrap();

    let config = StorefrontConfig::load(&path).unwrap();
    let mut session = Session::from_config(&config).unwrap();
    add(&mut session, 7);

    let view = session.view();
    assert_eq!(view.store_name, "Sari-Sari ni Lola");
    assert_eq!(view.products[0].badges, vec![StockBadge::LowStock]);
    assert_eq!(view.cart.totals.unwrap().total, "\u{20b1}20.16");
}

#[test]
fn oversized_prices_and_quantities_stay_in_range() {
    let config = StorefrontConfig::from_toml(
        r#"
        [[catalog.products]]
        id = 1
        name = "Gold Bar"
        price = "100000000000000000000"
        quantity = 10
        "#,
    )
    .unwrap();
    assert!(Session::from_config(&config).is_err());

    let config = StorefrontConfig::from_toml(
        r#"
        [[catalog.products]]
        id = 1
        name = "Gold Bar"
        price = "1000000000"
        quantity = 10
        "#,
    )
    .unwrap();
    let mut session = Session::from_config(&config).unwrap();
    add(&mut session, 1);
    set_quantity(&mut session, 1, i64::MAX);
    add(&mut session, 1);

    assert_eq!(session.cart().lines()[0].quantity, MAX_LINE_QUANTITY);
    let totals = session.totals();
    assert!(totals.total.amount > totals.subtotal.amount);
    assert!(session.view().cart.totals.is_some());
}

#[test]
fn favorites_toggle_on_product_cards() {
    let mut session = sample_session();
    let toggle = |session: &mut Session, id: u64| {
        session.dispatch(Intent::ToggleFavorite {
            product_id: ProductId::new(id),
        })
    };

    toggle(&mut session, 3).unwrap();
    let liked: Vec<bool> = session.view().products.iter().map(|p| p.liked).collect();
    assert_eq!(liked, vec![false, false, true, false, false, false]);

    let json = serde_json::to_value(session.view()).unwrap();
    assert_eq!(json["products"][2]["liked"], true);

    assert_eq!(
        toggle(&mut session, 3).unwrap(),
        DispatchOutcome::FavoriteToggled {
            product_id: ProductId::new(3),
            liked: false
        }
    );
    assert!(session.view().products.iter().all(|p| !p.liked));
    assert!(toggle(&mut session, 42).is_err());

    let intent: Intent =
        serde_json::from_str(r#"{"type":"toggle_favorite","product_id":3}"#).unwrap();
    assert_eq!(intent.kind(), "toggle_favorite");
}

#[test]
fn missing_config_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = StorefrontConfig::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.toml"));
}
