//! Common types for the shared crate

use serde::{Deserialize, Serialize};

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Lowest valid dine-in table number
pub const MIN_TABLE: u8 = 1;
/// Highest valid dine-in table number
pub const MAX_TABLE: u8 = 25;

/// Dine-in table number, restricted to the shop's 25 tables.
///
/// The range check lives in the constructor and in deserialization, so a
/// `TableNumber` in hand is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TableNumber(u8);

impl TableNumber {
    /// Returns `None` when `n` falls outside 1-25.
    pub fn new(n: u8) -> Option<Self> {
        (MIN_TABLE..=MAX_TABLE).contains(&n).then_some(Self(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TableNumber {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or_else(|| format!("table number out of range: {}", n))
    }
}

impl From<TableNumber> for u8 {
    fn from(t: TableNumber) -> u8 {
        t.0
    }
}

impl std::fmt::Display for TableNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
