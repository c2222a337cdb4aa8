pub mod checkout;
pub mod models;

pub use checkout::{checkout, CheckoutError};
pub use models::{Order, OrderLog};
