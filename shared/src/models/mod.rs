//! Data models for the Luna self-ordering demo
//!
//! The serialized shapes of these types are the persistence-blob contract:
//! camelCase fields and the original status/type vocabulary
//! (`"Dine-in"`, `"Online Payment"`, `"Takeaway"`).

pub mod cart;
pub mod menu_item;
pub mod order;

// Re-exports
pub use cart::CartLine;
pub use menu_item::{Category, MenuItem};
pub use order::{Order, OrderStatus, OrderType, PaymentMethod, PaymentStatus, TableRef};
