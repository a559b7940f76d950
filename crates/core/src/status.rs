//! Order and payment enumerations shared with the backend.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Payment method selected at checkout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cod,
    Upi,
    CreditCard,
    DebitCard,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Cod,
        PaymentMethod::Upi,
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::NetBanking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "COD",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::DebitCard => "DEBIT_CARD",
            PaymentMethod::NetBanking => "NET_BANKING",
        }
    }

    /// Cash on delivery needs no payment confirmation step.
    pub fn is_prepaid(&self) -> bool {
        !matches!(self, PaymentMethod::Cod)
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown payment method '{s}'")))
    }
}

/// Lifecycle state of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Cancelled,
    Completed,
}

/// Settlement state of an order's payment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_methods_use_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"CREDIT_CARD\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentMethod>("\"NET_BANKING\"").unwrap(),
            PaymentMethod::NetBanking
        );
        for m in PaymentMethod::ALL {
            assert_eq!(m.as_str().parse::<PaymentMethod>().unwrap(), m);
        }
    }

    #[test]
    fn unknown_payment_method_is_a_validation_error() {
        assert!(matches!(
            "PAYPAL".parse::<PaymentMethod>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn statuses_parse_from_backend_strings() {
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"CANCELLED\"").unwrap(),
            OrderStatus::Cancelled
        );
        assert_eq!(
            serde_json::from_str::<PaymentStatus>("\"REFUNDED\"").unwrap(),
            PaymentStatus::Refunded
        );
        assert!(serde_json::from_str::<OrderStatus>("\"pending\"").is_err());
    }
}
