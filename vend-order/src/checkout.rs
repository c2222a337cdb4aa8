use rust_decimal::Decimal;
use vend_cart::Cart;
use vend_core::PaymentMethod;

use crate::models::{Order, OrderLog};

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Payment of ${amount} was declined")]
    PaymentDeclined { amount: Decimal },
}

/// Attempt to check out a cart.
///
/// An empty cart is refused before the payment method is consulted. A
/// declined payment leaves the cart exactly as it was and records nothing.
/// On success the order is materialized from the cart's lines and the cart
/// is cleared.
///
/// Stock is not re-validated here: it was already taken when each line was
/// added, and a declined payment does not return it.
pub fn checkout(
    cart: &mut Cart,
    method: &PaymentMethod,
    log: &mut OrderLog,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let amount = cart.total();
    tracing::info!(cart_id = %cart.id(), %amount, method = method.label(), "payment requested");

    if !method.authorize(amount) {
        return Err(CheckoutError::PaymentDeclined { amount });
    }

    let order = log.record(cart.lines().to_vec());
    cart.clear();
    Ok(order)
}
