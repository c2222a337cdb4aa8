use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use vend_cart::CartLine;

/// The receipt of a completed checkout. Immutable after construction: the
/// lines are a copy of the cart at checkout time and the total is recomputed
/// from them, so nothing the cart does afterwards can reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    id: u64,
    lines: Vec<CartLine>,
    total: Decimal,
    created_at: DateTime<Utc>,
}

impl Order {
    fn new(id: u64, lines: Vec<CartLine>) -> Self {
        let total = lines.iter().map(CartLine::subtotal).sum();
        Self {
            id,
            lines,
            total,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Issues order ids and keeps every order for the process lifetime.
///
/// The counter starts at 0 and is bumped before use, so the first order is
/// id 1 and ids are strictly increasing across the log's lifetime.
#[derive(Debug, Default)]
pub struct OrderLog {
    next_id: u64,
    orders: Vec<Order>,
}

impl OrderLog {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            orders: Vec::new(),
        }
    }

    /// Materialize an order from a line snapshot and record it.
    pub(crate) fn record(&mut self, lines: Vec<CartLine>) -> Order {
        self.next_id += 1;
        let order = Order::new(self.next_id, lines);
        tracing::info!(order_id = order.id(), total = %order.total(), "order created");
        self.orders.push(order.clone());
        order
    }

    pub fn get(&self, id: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.id() == id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
