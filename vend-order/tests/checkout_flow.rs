use rust_decimal::Decimal;
use vend_cart::Cart;
use vend_catalog::{Catalog, Product};
use vend_core::PaymentMethod;
use vend_order::{checkout, CheckoutError, OrderLog};

fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Product::new(1, "Book", Decimal::new(1050, 2), 10));
    catalog.add(Product::new(2, "Pen", Decimal::new(250, 2), 20));
    catalog.add(Product::new(3, "Laptop", Decimal::new(800, 0), 5));
    catalog
}

fn card() -> PaymentMethod {
    PaymentMethod::Card {
        number: "4111 1111 1111 1111".to_string(),
        holder: "Alice".to_string(),
    }
}

/// Take stock through the catalog gate, then append the cart line. The gate
/// is the only stock validation in the whole flow.
fn add_to_cart(catalog: &mut Catalog, cart: &mut Cart, id: u32, qty: u32) -> bool {
    if !catalog.reduce_stock(id, qty) {
        return false;
    }
    let snapshot = catalog.get(id).expect("product exists after reduction");
    cart.add_line(snapshot, qty);
    true
}

#[test]
fn test_book_checkout_worked_example() {
    let mut catalog = seeded_catalog();
    let mut cart = Cart::new("Alice");
    let mut log = OrderLog::new();

    assert!(add_to_cart(&mut catalog, &mut cart, 1, 3));
    assert_eq!(catalog.get(1).unwrap().stock(), 7);
    assert_eq!(cart.total(), Decimal::new(3150, 2));

    let order = checkout(&mut cart, &card(), &mut log).unwrap();
    assert_eq!(order.id(), 1);
    assert_eq!(order.total(), Decimal::new(3150, 2));
    assert!(cart.is_empty());
}

#[test]
fn test_order_ids_increase_across_checkouts() {
    let mut catalog = seeded_catalog();
    let mut cart = Cart::new("Alice");
    let mut log = OrderLog::new();

    for expected_id in 1..=3u64 {
        assert!(add_to_cart(&mut catalog, &mut cart, 2, 2));
        let order = checkout(&mut cart, &card(), &mut log).unwrap();
        assert_eq!(order.id(), expected_id);
    }

    assert_eq!(catalog.get(2).unwrap().stock(), 14);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_declined_payment_leaves_stock_and_cart() {
    let mut catalog = seeded_catalog();
    let mut cart = Cart::new("Alice");
    let mut log = OrderLog::new();

    assert!(add_to_cart(&mut catalog, &mut cart, 3, 2));
    let stock_after_add = catalog.get(3).unwrap().stock();

    let declined = PaymentMethod::PayPal {
        email: String::new(),
    };
    let err = checkout(&mut cart, &declined, &mut log).unwrap_err();
    assert!(matches!(err, CheckoutError::PaymentDeclined { .. }));

    // Cart and order log untouched; stock stays where the add left it
    // (taken at add time, not returned on failure).
    assert_eq!(cart.line_count(), 1);
    assert_eq!(catalog.get(3).unwrap().stock(), stock_after_add);
    assert!(log.is_empty());
}

#[test]
fn test_snapshot_prices_survive_catalog_repricing() {
    let mut catalog = seeded_catalog();
    let mut cart = Cart::new("Alice");
    let mut log = OrderLog::new();

    assert!(add_to_cart(&mut catalog, &mut cart, 1, 2));
    catalog.set_price(1, Decimal::new(5000, 2)).unwrap();

    let order = checkout(&mut cart, &card(), &mut log).unwrap();
    assert_eq!(order.total(), Decimal::new(2100, 2));
}

#[test]
fn test_insufficient_stock_adds_nothing() {
    let mut catalog = seeded_catalog();
    let mut cart = Cart::new("Alice");

    assert!(!add_to_cart(&mut catalog, &mut cart, 3, 6));
    assert!(cart.is_empty());
    assert_eq!(catalog.get(3).unwrap().stock(), 5);
}
