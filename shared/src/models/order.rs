//! Order Model
//!
//! An order is an immutable-at-creation snapshot of the cart. After
//! checkout only `status` and `payment_status` may change; the item list
//! and total are never recomputed, even if menu prices move later.

use super::CartLine;
use crate::types::{TableNumber, Timestamp};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Order status lifecycle
///
/// Pending → Preparing → Ready → Delivered, with Cancelled as an alternate
/// terminal state. Staff writes are unconditional: any status can be set
/// directly, there is no legal-predecessor check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

/// Payment status - a two-state toggle orthogonal to order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Unpaid => Self::Paid,
            Self::Paid => Self::Unpaid,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Service type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderType {
    #[default]
    #[serde(rename = "Dine-in")]
    DineIn,
    Takeaway,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DineIn => write!(f, "Dine-in"),
            Self::Takeaway => write!(f, "Takeaway"),
        }
    }
}

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    #[serde(rename = "Online Payment")]
    OnlinePayment,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::OnlinePayment => write!(f, "Online Payment"),
        }
    }
}

/// Seating context: a real table for dine-in, or the takeaway sentinel.
///
/// Serializes the way the original blob does: a bare number for tables,
/// the string `"Takeaway"` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRef {
    Table(TableNumber),
    Takeaway,
}

impl Serialize for TableRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Table(n) => serializer.serialize_u8(n.get()),
            Self::Takeaway => serializer.serialize_str("Takeaway"),
        }
    }
}

impl<'de> Deserialize<'de> for TableRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u8),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => TableNumber::new(n)
                .map(TableRef::Table)
                .ok_or_else(|| D::Error::custom(format!("table number out of range: {}", n))),
            Raw::Text(s) if s == "Takeaway" => Ok(TableRef::Takeaway),
            Raw::Text(s) => Err(D::Error::custom(format!("unknown table ref: {:?}", s))),
        }
    }
}

impl std::fmt::Display for TableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table(n) => write!(f, "Table {}", n),
            Self::Takeaway => write!(f, "Takeaway"),
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order ID (`ORD-<snowflake>`, assigned at checkout)
    pub id: String,
    pub table_number: TableRef,
    pub order_type: OrderType,
    /// Immutable snapshot of the cart at checkout time
    pub items: Vec<CartLine>,
    /// Fixed at creation: sum of price × quantity over `items`; a plain
    /// JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Creation time (Unix milliseconds)
    pub timestamp: Timestamp,
}
