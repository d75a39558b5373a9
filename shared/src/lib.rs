//! Shared types for the Luna self-ordering demo
//!
//! Data model used by both the customer and staff flows: menu catalog,
//! cart lines, orders and their lifecycle enums, plus timestamp and
//! order ID helpers.

pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use models::{
    CartLine, Category, MenuItem, Order, OrderStatus, OrderType, PaymentMethod, PaymentStatus,
    TableRef,
};
pub use serde::{Deserialize, Serialize};
pub use types::{TableNumber, Timestamp};
