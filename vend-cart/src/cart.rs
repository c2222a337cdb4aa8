use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vend_catalog::Product;

/// One (product snapshot, quantity) entry in a cart. The snapshot is taken
/// at add time, so a later catalog price change never reaches the line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    pub fn subtotal(&self) -> Decimal {
        self.product.price() * Decimal::from(self.quantity)
    }
}

/// A single shopper's cart. Lines keep insertion order; the cart is cleared
/// on successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    id: Uuid,
    customer: String,
    lines: Vec<CartLine>,
    created_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer: customer.into(),
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Append a line. Stock is not checked here: the caller must already
    /// have taken the quantity through the catalog's stock gate, or cart
    /// contents and stock silently drift apart.
    pub fn add_line(&mut self, product: Product, quantity: u32) {
        self.lines.push(CartLine::new(product, quantity));
    }

    /// Sum of line subtotals at snapshot prices.
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
