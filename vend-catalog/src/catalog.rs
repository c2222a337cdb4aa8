use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::product::Product;

/// The authoritative id -> product mapping. Owned by the driver and passed
/// explicitly; there is no global instance. Single writer, no isolation.
#[derive(Debug, Default)]
pub struct Catalog {
    products: HashMap<u32, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            products: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for the product's id.
    pub fn add(&mut self, product: Product) {
        self.products.insert(product.id(), product);
    }

    /// Snapshot lookup. The returned clone is what cart lines are built from,
    /// so later catalog changes never reach an existing line.
    pub fn get(&self, id: u32) -> Result<Product, CatalogError> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.products.contains_key(&id)
    }

    /// Take `qty` units of stock. Returns false when the id is unknown or the
    /// product refuses the reduction; stock is untouched on refusal.
    pub fn reduce_stock(&mut self, id: u32, qty: u32) -> bool {
        match self.products.get_mut(&id) {
            Some(product) => {
                let taken = product.reduce_stock(qty);
                if !taken {
                    tracing::debug!(id, qty, stock = product.stock(), "stock reduction refused");
                }
                taken
            }
            None => false,
        }
    }

    /// Restock an existing product.
    pub fn increase_stock(&mut self, id: u32, qty: u32) -> Result<(), CatalogError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        product.increase_stock(qty);
        Ok(())
    }

    /// Update a product's price through the catalog.
    pub fn set_price(&mut self, id: u32, price: Decimal) -> Result<(), CatalogError> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        product.set_price(price)
    }

    /// All products, ascending by id. Deterministic for display and tests.
    pub fn list(&self) -> Vec<Product> {
        let mut out: Vec<Product> = self.products.values().cloned().collect();
        out.sort_by_key(|p| p.id());
        out
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(u32),

    #[error("Price can't be negative: {0}")]
    NegativePrice(Decimal),
}
