use super::*;

fn store() -> AppStore {
    AppStore::in_memory()
}

// ========================================================================
// Cart
// ========================================================================

#[test]
fn test_add_inserts_quantity_one_line() {
    let mut s = store();
    assert!(s.add_to_cart("m2"));
    assert_eq!(s.cart().len(), 1);
    assert_eq!(s.cart()[0].quantity, 1);
    assert_eq!(s.cart()[0].note, "");
}

#[test]
fn test_add_increments_and_preserves_note() {
    let mut s = store();
    s.add_to_cart("m2");
    s.set_note("m2", "less sugar");
    s.add_to_cart("m2");
    assert_eq!(s.cart().len(), 1);
    assert_eq!(s.cart()[0].quantity, 2);
    assert_eq!(s.cart()[0].note, "less sugar");
}

#[test]
fn test_add_unknown_item_is_silent_noop() {
    let mut s = store();
    assert!(!s.add_to_cart("nope"));
    assert!(s.cart().is_empty());
}

#[test]
fn test_add_unavailable_item_is_silent_noop() {
    let mut s = store();
    s.toggle_availability("m2").unwrap();
    assert!(!s.add_to_cart("m2"));
    assert!(s.cart().is_empty());
}

#[test]
fn test_availability_does_not_touch_existing_lines() {
    let mut s = store();
    s.add_to_cart("m2");
    s.toggle_availability("m2").unwrap();
    // The line already in the cart survives, only future adds are blocked
    assert_eq!(s.cart()[0].quantity, 1);
    assert!(!s.add_to_cart("m2"));
    assert_eq!(s.cart()[0].quantity, 1);
}

#[test]
fn test_adjust_quantity_clamps_and_removes() {
    let mut s = store();
    s.add_to_cart("m2");
    s.adjust_quantity("m2", 3);
    assert_eq!(s.cart()[0].quantity, 4);
    s.adjust_quantity("m2", -10);
    assert!(s.cart().is_empty());
    // Every remaining line is always >= 1
    s.add_to_cart("m1");
    s.adjust_quantity("m1", -1);
    assert!(s.cart().iter().all(|l| l.quantity >= 1));
}

#[test]
fn test_quantity_saturates_at_max() {
    let mut s = store();
    s.add_to_cart("m2");
    // 1 + 3×i32::MAX overshoots u32::MAX; the clamp holds instead of wrapping
    s.adjust_quantity("m2", i32::MAX);
    s.adjust_quantity("m2", i32::MAX);
    s.adjust_quantity("m2", i32::MAX);
    assert_eq!(s.cart()[0].quantity, u32::MAX);
    assert!(s.add_to_cart("m2"));
    assert_eq!(s.cart()[0].quantity, u32::MAX);
}

#[test]
fn test_adjust_quantity_unknown_line_ignored() {
    let mut s = store();
    s.adjust_quantity("nope", 1);
    assert!(s.cart().is_empty());
}

#[test]
fn test_cart_subtotal_exact() {
    let mut s = store();
    s.add_to_cart("m2"); // Teh Tarik 3.50
    s.add_to_cart("m2");
    assert_eq!(s.cart_subtotal(), Decimal::new(700, 2));
}

// ========================================================================
// Checkout
// ========================================================================

#[test]
fn test_checkout_takeaway_example() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m2");
    s.add_to_cart("m2");

    let order = s.checkout().unwrap();
    assert_eq!(order.total, Decimal::new(700, 2));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Unpaid);
    assert_eq!(order.table_number, TableRef::Takeaway);
    assert_eq!(order.order_type, OrderType::Takeaway);
    assert!(s.cart().is_empty());
    assert_eq!(s.orders().len(), 1);
}

#[test]
fn test_checkout_empty_cart_blocked() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    assert_eq!(s.checkout(), Err(StoreError::EmptyCart));
    assert!(s.orders().is_empty());
}

#[test]
fn test_second_checkout_creates_nothing() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m1");
    s.checkout().unwrap();
    assert_eq!(s.checkout(), Err(StoreError::EmptyCart));
    assert_eq!(s.orders().len(), 1);
}

#[test]
fn test_checkout_dine_in_requires_table() {
    let mut s = store();
    s.add_to_cart("m1");
    assert_eq!(s.order_type(), OrderType::DineIn);
    assert_eq!(s.checkout(), Err(StoreError::TableRequired));

    s.set_table(TableNumber::new(7).unwrap());
    let order = s.checkout().unwrap();
    assert_eq!(
        order.table_number,
        TableRef::Table(TableNumber::new(7).unwrap())
    );
}

#[test]
fn test_set_table_forces_dine_in() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.set_table(TableNumber::new(3).unwrap());
    assert_eq!(s.order_type(), OrderType::DineIn);
}

#[test]
fn test_order_snapshot_isolated_from_menu() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m2");
    let order = s.checkout().unwrap();
    let total_before = order.total;

    // Later menu mutation must not reach into the placed order
    s.toggle_availability("m2").unwrap();
    let stored = s.order(&order.id).unwrap();
    assert!(stored.items[0].item.is_available);
    assert_eq!(stored.total, total_before);
}

#[test]
fn test_order_ids_unique() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    let mut ids = std::collections::HashSet::new();
    for _ in 0..50 {
        s.add_to_cart("m1");
        ids.insert(s.checkout().unwrap().id);
    }
    assert_eq!(ids.len(), 50);
}

// ========================================================================
// Staff commands
// ========================================================================

#[test]
fn test_update_status_unconditional() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m1");
    let id = s.checkout().unwrap().id;

    // Staff can jump straight to any state, including backwards
    s.update_status(&id, OrderStatus::Delivered).unwrap();
    s.update_status(&id, OrderStatus::Preparing).unwrap();
    assert_eq!(s.order(&id).unwrap().status, OrderStatus::Preparing);
    s.update_status(&id, OrderStatus::Cancelled).unwrap();
    assert_eq!(s.order(&id).unwrap().status, OrderStatus::Cancelled);
}

#[test]
fn test_payment_status_orthogonal_to_status() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m1");
    let id = s.checkout().unwrap().id;

    s.update_status(&id, OrderStatus::Cancelled).unwrap();
    s.set_payment_status(&id, PaymentStatus::Paid).unwrap();
    let order = s.order(&id).unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.payment_status, PaymentStatus::Paid);
}

#[test]
fn test_unknown_order_errors() {
    let mut s = store();
    assert_eq!(
        s.update_status("ORD-0", OrderStatus::Ready),
        Err(StoreError::OrderNotFound("ORD-0".to_string()))
    );
    assert_eq!(
        s.set_payment_status("ORD-0", PaymentStatus::Paid),
        Err(StoreError::OrderNotFound("ORD-0".to_string()))
    );
}

#[test]
fn test_toggle_availability_roundtrip() {
    let mut s = store();
    assert_eq!(s.toggle_availability("m3"), Ok(false));
    assert_eq!(s.toggle_availability("m3"), Ok(true));
    assert_eq!(
        s.toggle_availability("nope"),
        Err(StoreError::ItemNotFound("nope".to_string()))
    );
}

#[test]
fn test_clear_orders() {
    let mut s = store();
    s.set_order_type(OrderType::Takeaway);
    s.add_to_cart("m1");
    s.checkout().unwrap();
    s.clear_orders();
    assert!(s.orders().is_empty());
}

#[test]
fn test_menu_by_category_filter() {
    let s = store();
    let all = s.menu_by_category(None);
    assert_eq!(all.len(), s.menu().len());
    let drinks = s.menu_by_category(Some(Category::Drinks));
    assert!(!drinks.is_empty());
    assert!(drinks.iter().all(|i| i.category == Category::Drinks));
}
