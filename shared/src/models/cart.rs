//! Cart Line Model

use super::MenuItem;
use serde::{Deserialize, Serialize};

/// One line of the customer's in-progress cart: a snapshot of the menu
/// item plus the requested quantity and a free-text note.
///
/// Invariant: `quantity >= 1`. A line that would reach 0 is removed from
/// the cart by the store, never retained at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
    #[serde(default)]
    pub note: String,
}

impl CartLine {
    /// New line for a just-added item: quantity 1, empty note.
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            quantity: 1,
            note: String::new(),
        }
    }
}
