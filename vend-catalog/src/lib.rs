pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CatalogError};
pub use product::Product;
