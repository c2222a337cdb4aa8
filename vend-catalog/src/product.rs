use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// A sellable product. The id is unique within a catalog and never changes
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    id: u32,
    name: String,
    price: Decimal,
    stock: u32,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, price: Decimal, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Update the unit price. Negative prices are refused.
    pub fn set_price(&mut self, price: Decimal) -> Result<(), CatalogError> {
        if price.is_sign_negative() {
            return Err(CatalogError::NegativePrice(price));
        }
        self.price = price;
        Ok(())
    }

    /// Replace the stock count. Stock is unsigned, so the invalid-argument
    /// path of the price setter has no counterpart here.
    pub fn set_stock(&mut self, stock: u32) {
        self.stock = stock;
    }

    /// The sole gate for taking stock. Returns false when `qty` is zero or
    /// exceeds the current count, leaving stock unchanged.
    pub fn reduce_stock(&mut self, qty: u32) -> bool {
        if qty == 0 || qty > self.stock {
            return false;
        }
        self.stock -= qty;
        true
    }

    /// Restock. A zero quantity is a no-op.
    pub fn increase_stock(&mut self, qty: u32) {
        self.stock += qty;
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} - ${:.2} (stock: {})",
            self.id, self.name, self.price, self.stock
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Product {
        Product::new(1, "Book", Decimal::new(1050, 2), 10)
    }

    #[test]
    fn test_reduce_stock_gate() {
        let mut p = book();

        assert!(p.reduce_stock(3));
        assert_eq!(p.stock(), 7);

        // Refusals leave stock unchanged.
        assert!(!p.reduce_stock(0));
        assert!(!p.reduce_stock(8));
        assert_eq!(p.stock(), 7);

        assert!(p.reduce_stock(7));
        assert_eq!(p.stock(), 0);
        assert!(!p.reduce_stock(1));
    }

    #[test]
    fn test_set_price_rejects_negative() {
        let mut p = book();
        let err = p.set_price(Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice(_)));
        assert_eq!(p.price(), Decimal::new(1050, 2));

        p.set_price(Decimal::new(1299, 2)).unwrap();
        assert_eq!(p.price(), Decimal::new(1299, 2));
    }

    #[test]
    fn test_increase_stock() {
        let mut p = book();
        p.increase_stock(5);
        assert_eq!(p.stock(), 15);
        p.increase_stock(0);
        assert_eq!(p.stock(), 15);
    }

    #[test]
    fn test_display_format() {
        assert_eq!(book().to_string(), "[1] Book - $10.50 (stock: 10)");
    }
}
