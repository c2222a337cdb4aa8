pub mod identity;
pub mod payment;

pub use identity::{Role, User};
pub use payment::PaymentMethod;
