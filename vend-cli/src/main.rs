use std::io::{self, BufRead, Write};

use anyhow::Context;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vend_cart::Cart;
use vend_catalog::{Catalog, Product};
use vend_core::{PaymentMethod, User};
use vend_order::{checkout, CheckoutError, OrderLog};
use vend_store::Config;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vend=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    let user = if config.session.admin {
        User::admin(&config.session.customer, &config.session.email)
    } else {
        User::guest(&config.session.customer, &config.session.email)
    };
    tracing::info!(customer = %user.name, role = user.role.label(), "session started");

    let mut catalog = seed_catalog();
    let mut cart = Cart::new(&user.name);
    let mut orders = OrderLog::new();

    println!("Welcome, {} ({})", user.name, user.role.label());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu(&user);
        let Some(choice) = read_line(&mut lines)? else {
            break;
        };

        match choice.as_str() {
            "1" => show_products(&catalog),
            "2" => add_to_cart(&mut catalog, &mut cart, &mut lines)?,
            "3" => view_cart(&cart),
            "4" => run_checkout(&mut cart, &mut orders, &mut lines)?,
            "5" if user.role.is_admin() => restock(&mut catalog, &mut lines)?,
            "6" if user.role.is_admin() => export(&catalog, &config.export.path),
            "0" | "exit" => break,
            other => println!("Unknown choice: {other}"),
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.add(Product::new(1, "Book", Decimal::new(1050, 2), 10));
    catalog.add(Product::new(2, "Pen", Decimal::new(250, 2), 20));
    catalog.add(Product::new(3, "Laptop", Decimal::new(800, 0), 5));
    catalog
}

fn print_menu(user: &User) {
    println!();
    println!("1. Show products");
    println!("2. Add to cart");
    println!("3. View cart");
    println!("4. Checkout");
    if user.role.is_admin() {
        println!("5. Restock product");
        println!("6. Export catalog");
    }
    println!("0. Exit");
    print!("Choice: ");
    let _ = io::stdout().flush();
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> anyhow::Result<Option<String>> {
    match lines.next() {
        Some(line) => Ok(Some(line.context("Failed to read input")?.trim().to_string())),
        None => Ok(None),
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<String>> {
    print!("{label}: ");
    let _ = io::stdout().flush();
    read_line(lines)
}

fn show_products(catalog: &Catalog) {
    for product in catalog.list() {
        println!("{product}");
    }
}

fn add_to_cart(
    catalog: &mut Catalog,
    cart: &mut Cart,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    let Some(id) = prompt_u32(lines, "Product id")? else {
        return Ok(());
    };
    let Some(qty) = prompt_u32(lines, "Quantity")? else {
        return Ok(());
    };

    // Stock is taken here, at add time. The gate is the only validation;
    // the cart line is appended only when the gate accepts.
    if !catalog.reduce_stock(id, qty) {
        println!("Not available: product {id} x{qty}");
        return Ok(());
    }
    let snapshot = catalog.get(id).context("product vanished after reduction")?;
    println!("Added {} x{} to cart", snapshot.name(), qty);
    cart.add_line(snapshot, qty);
    Ok(())
}

fn prompt_u32(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> anyhow::Result<Option<u32>> {
    let Some(raw) = prompt(lines, label)? else {
        return Ok(None);
    };
    match raw.parse() {
        Ok(n) => Ok(Some(n)),
        Err(_) => {
            println!("Not a number: {raw}");
            Ok(None)
        }
    }
}

fn view_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("Cart is empty");
        return;
    }
    for line in cart.lines() {
        println!(
            "{} x{} = ${:.2}",
            line.product.name(),
            line.quantity,
            line.subtotal()
        );
    }
    println!("Total: ${:.2}", cart.total());
}

fn run_checkout(
    cart: &mut Cart,
    orders: &mut OrderLog,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    if cart.is_empty() {
        println!("Cart is empty!");
        return Ok(());
    }

    let Some(method) = prompt_payment(lines)? else {
        return Ok(());
    };

    match checkout(cart, &method, orders) {
        Ok(order) => {
            println!("Paid ${:.2} using {}.", order.total(), method.label());
            println!("Order #{} Summary:", order.id());
            for line in order.lines() {
                println!("  {} x{} = ${:.2}", line.product.name(), line.quantity, line.subtotal());
            }
            println!("Total: ${:.2}", order.total());
        }
        Err(CheckoutError::EmptyCart) => println!("Cart is empty!"),
        Err(CheckoutError::PaymentDeclined { amount }) => {
            println!("Payment of ${amount:.2} declined; cart unchanged");
        }
    }
    Ok(())
}

fn prompt_payment(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<PaymentMethod>> {
    let Some(pick) = prompt(lines, "1.Card 2.PayPal")? else {
        return Ok(None);
    };
    match pick.as_str() {
        "1" => {
            let Some(number) = prompt(lines, "Card number")? else {
                return Ok(None);
            };
            let Some(holder) = prompt(lines, "Name on card")? else {
                return Ok(None);
            };
            Ok(Some(PaymentMethod::Card { number, holder }))
        }
        "2" => {
            let Some(email) = prompt(lines, "PayPal email")? else {
                return Ok(None);
            };
            Ok(Some(PaymentMethod::PayPal { email }))
        }
        other => {
            println!("Unknown payment method: {other}");
            Ok(None)
        }
    }
}

fn restock(
    catalog: &mut Catalog,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    let Some(id) = prompt_u32(lines, "Product id")? else {
        return Ok(());
    };
    let Some(qty) = prompt_u32(lines, "Quantity")? else {
        return Ok(());
    };
    match catalog.increase_stock(id, qty) {
        Ok(()) => println!("Restocked product {id} by {qty}"),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

fn export(catalog: &Catalog, path: &str) {
    match vend_store::write_catalog(catalog, path) {
        Ok(rows) => println!("Exported {rows} products to {path}"),
        Err(err) => println!("{err}"),
    }
}
