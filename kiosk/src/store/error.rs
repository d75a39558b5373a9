//! Store errors

use thiserror::Error;

/// Errors surfaced by store commands.
///
/// Silent no-ops mandated by the flow (adding an unavailable item,
/// discarding an out-of-range scan) never reach here; only checkout
/// preconditions and unknown IDs do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("cart is empty")]
    EmptyCart,
    #[error("dine-in checkout requires a table")]
    TableRequired,
    #[error("menu item not found: {0}")]
    ItemNotFound(String),
    #[error("order not found: {0}")]
    OrderNotFound(String),
}

/// Result type for store commands
pub type StoreResult<T> = Result<T, StoreError>;
