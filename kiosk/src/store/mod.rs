//! AppStore - shared shop state behind explicit commands
//!
//! Customer and staff flows are two callers of the same store: commands
//! mutate, snapshot accessors read. Every command that touches the menu
//! or orders collections mirrors them to disk before returning; cart and
//! seating context are session-only.
//!
//! # Command flow
//!
//! ```text
//! checkout()
//!     ├─ 1. Validate (non-empty cart, table for dine-in)
//!     ├─ 2. Snapshot cart lines and subtotal into a new Order
//!     ├─ 3. Prepend to orders, clear the cart
//!     └─ 4. Mirror {menu, orders}
//! ```

mod error;
pub use error::{StoreError, StoreResult};

#[cfg(test)]
mod tests;

use crate::catalog;
use crate::money;
use crate::persist::{Mirror, PersistedState};
use rust_decimal::Decimal;
use shared::util::{now_millis, order_id};
use shared::{
    CartLine, Category, MenuItem, Order, OrderStatus, OrderType, PaymentMethod, PaymentStatus,
    TableNumber, TableRef,
};
use tracing::{debug, error, info};

/// Process-wide shop state: menu catalog, the customer's cart, the order
/// book, and the session's seating context.
pub struct AppStore {
    menu: Vec<MenuItem>,
    cart: Vec<CartLine>,
    orders: Vec<Order>,
    table: Option<TableNumber>,
    order_type: OrderType,
    payment_method: PaymentMethod,
    mirror: Option<Mirror>,
}

impl AppStore {
    /// Open the store from a mirror, falling back to the built-in menu and
    /// an empty order book when nothing readable is stored.
    pub fn open(mirror: Mirror) -> Self {
        let state = mirror.load().unwrap_or_else(|| PersistedState {
            menu: catalog::default_menu(),
            orders: Vec::new(),
        });
        info!(
            menu_items = state.menu.len(),
            orders = state.orders.len(),
            "store opened"
        );
        Self::from_parts(state, Some(mirror))
    }

    /// In-memory store without a mirror (tests, throwaway sessions).
    pub fn in_memory() -> Self {
        Self::from_parts(
            PersistedState {
                menu: catalog::default_menu(),
                orders: Vec::new(),
            },
            None,
        )
    }

    fn from_parts(state: PersistedState, mirror: Option<Mirror>) -> Self {
        Self {
            menu: state.menu,
            cart: Vec::new(),
            orders: state.orders,
            table: None,
            order_type: OrderType::default(),
            payment_method: PaymentMethod::default(),
            mirror,
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// Menu filtered by category; `None` is the "All" filter.
    pub fn menu_by_category(&self, filter: Option<Category>) -> Vec<&MenuItem> {
        self.menu
            .iter()
            .filter(|item| filter.is_none_or(|c| item.category == c))
            .collect()
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    pub fn cart_subtotal(&self) -> Decimal {
        money::cart_subtotal(&self.cart)
    }

    pub fn table(&self) -> Option<TableNumber> {
        self.table
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    // ========================================================================
    // Customer commands
    // ========================================================================

    /// Add one unit of a menu item to the cart.
    ///
    /// Silent no-op for unknown or unavailable items. An existing line is
    /// incremented and keeps its note; otherwise a quantity-1 line with an
    /// empty note is inserted. Returns whether the cart changed.
    pub fn add_to_cart(&mut self, item_id: &str) -> bool {
        let Some(item) = self.menu.iter().find(|i| i.id == item_id) else {
            debug!(item_id, "add ignored: unknown item");
            return false;
        };
        if !item.is_available {
            debug!(item_id, "add ignored: item unavailable");
            return false;
        }
        if let Some(line) = self.cart.iter_mut().find(|l| l.item.id == item_id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.cart.push(CartLine::new(item.clone()));
        }
        true
    }

    /// Adjust a line's quantity by `delta`, clamped at 0; a line reaching
    /// 0 is removed. No upper bound. Unknown lines are ignored.
    pub fn adjust_quantity(&mut self, item_id: &str, delta: i32) {
        if let Some(pos) = self.cart.iter().position(|l| l.item.id == item_id) {
            let next = i64::from(self.cart[pos].quantity) + i64::from(delta);
            if next <= 0 {
                self.cart.remove(pos);
            } else {
                self.cart[pos].quantity = u32::try_from(next).unwrap_or(u32::MAX);
            }
        }
    }

    /// Replace a line's free-text note verbatim. No validation.
    pub fn set_note(&mut self, item_id: &str, note: impl Into<String>) {
        if let Some(line) = self.cart.iter_mut().find(|l| l.item.id == item_id) {
            line.note = note.into();
        }
    }

    /// Accepting a table (scan or manual pick) always implies dine-in.
    pub fn set_table(&mut self, table: TableNumber) {
        self.table = Some(table);
        self.order_type = OrderType::DineIn;
    }

    pub fn clear_table(&mut self) {
        self.table = None;
    }

    pub fn set_order_type(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    pub fn set_payment_method(&mut self, payment_method: PaymentMethod) {
        self.payment_method = payment_method;
    }

    /// Materialize an order from the current cart.
    ///
    /// The order snapshots the cart lines and fixes the total at the exact
    /// subtotal; later menu edits never touch it. On success the cart is
    /// cleared, so an immediate second checkout fails with `EmptyCart`.
    pub fn checkout(&mut self) -> StoreResult<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }
        let table_number = match self.order_type {
            OrderType::DineIn => TableRef::Table(self.table.ok_or(StoreError::TableRequired)?),
            OrderType::Takeaway => TableRef::Takeaway,
        };
        let order = Order {
            id: order_id(),
            table_number,
            order_type: self.order_type,
            items: self.cart.clone(),
            total: money::cart_subtotal(&self.cart),
            status: OrderStatus::Pending,
            payment_method: self.payment_method,
            payment_status: PaymentStatus::Unpaid,
            timestamp: now_millis(),
        };
        // Newest first, matching the staff order board
        self.orders.insert(0, order.clone());
        self.cart.clear();
        self.save();
        info!(order_id = %order.id, total = %order.total, seating = %order.table_number, "order placed");
        Ok(order)
    }

    // ========================================================================
    // Staff commands
    // ========================================================================

    /// Set an order's status. Unconditional: staff may jump to any state.
    pub fn update_status(&mut self, order_id: &str, status: OrderStatus) -> StoreResult<()> {
        {
            let order = self
                .orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;
            order.status = status;
        }
        self.save();
        info!(order_id, status = ?status, "order status updated");
        Ok(())
    }

    /// Set an order's payment status, independent of order status.
    pub fn set_payment_status(
        &mut self,
        order_id: &str,
        payment_status: PaymentStatus,
    ) -> StoreResult<()> {
        {
            let order = self
                .orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or_else(|| StoreError::OrderNotFound(order_id.to_string()))?;
            order.payment_status = payment_status;
        }
        self.save();
        Ok(())
    }

    /// Flip a menu item's availability; returns the new state. Only
    /// affects future `add_to_cart` calls, never existing cart lines or
    /// past orders.
    pub fn toggle_availability(&mut self, item_id: &str) -> StoreResult<bool> {
        let now_available = {
            let item = self
                .menu
                .iter_mut()
                .find(|i| i.id == item_id)
                .ok_or_else(|| StoreError::ItemNotFound(item_id.to_string()))?;
            item.is_available = !item.is_available;
            item.is_available
        };
        self.save();
        info!(item_id, available = now_available, "availability toggled");
        Ok(now_available)
    }

    /// Wipe the order book. The only way orders are ever destroyed.
    pub fn clear_orders(&mut self) {
        self.orders.clear();
        self.save();
        info!("order history cleared");
    }

    /// Mirror menu and orders wholesale. Failures are logged, not
    /// propagated: a broken disk must not block the order flow.
    fn save(&self) {
        if let Some(mirror) = &self.mirror {
            let state = PersistedState {
                menu: self.menu.clone(),
                orders: self.orders.clone(),
            };
            if let Err(e) = mirror.save(&state) {
                error!(error = %e, "failed to mirror state");
            }
        }
    }
}
