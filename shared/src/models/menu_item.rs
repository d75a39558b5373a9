//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu category (closed set; "All" is a query filter, not a category)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Rice,
    Noodles,
    Bread,
    Drinks,
    Dessert,
}

/// Sellable menu item
///
/// Created at catalog initialization and never deleted at runtime; staff
/// may only flip the availability flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Stable catalog ID
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price (non-negative, 2-decimal currency); a plain JSON number
    /// on the wire, not the Display string
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    pub is_available: bool,
}
