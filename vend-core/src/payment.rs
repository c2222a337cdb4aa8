use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment methods accepted at checkout. Closed set, dispatched by match.
///
/// No gateway is contacted; authorization only checks that the credential
/// fields are non-empty. A declined authorization must leave the caller's
/// cart and catalog untouched (enforced by the checkout routine).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "method")]
pub enum PaymentMethod {
    Card { number: String, holder: String },
    PayPal { email: String },
}

impl PaymentMethod {
    /// Returns true iff the payment is accepted.
    pub fn authorize(&self, amount: Decimal) -> bool {
        let accepted = match self {
            PaymentMethod::Card { number, holder } => {
                !number.trim().is_empty() && !holder.trim().is_empty()
            }
            PaymentMethod::PayPal { email } => !email.trim().is_empty(),
        };

        if accepted {
            tracing::info!(%amount, method = self.label(), "payment authorized");
        } else {
            tracing::warn!(%amount, method = self.label(), "payment declined");
        }

        accepted
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "Credit Card",
            PaymentMethod::PayPal { .. } => "PayPal",
        }
    }
}
