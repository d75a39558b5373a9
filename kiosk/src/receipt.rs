//! Plain-text receipt rendering
//!
//! The stored order total is authoritative; the subtotal/tax lines are the
//! fixed 6% reverse split from `money::ReceiptTotals`, shown only here.

use crate::money::{self, ReceiptTotals};
use chrono::{TimeZone, Utc};
use shared::{Order, OrderType};

/// Receipt column width in characters
const WIDTH: usize = 38;

/// Render an order as a text receipt.
pub fn render(order: &Order) -> String {
    let mut out = String::new();

    push_centered(&mut out, "THE LUNA SHOP");
    push_centered(&mut out, "Authentic Malaysian Food");
    push_rule(&mut out);

    push_pair(&mut out, "Receipt", &order.id);
    push_pair(&mut out, "Date", &format_time(order.timestamp));
    push_pair(&mut out, "Service Type", &order.order_type.to_string());
    if order.order_type == OrderType::DineIn {
        push_pair(&mut out, "Seating", &order.table_number.to_string());
    }
    push_pair(&mut out, "Payment", &order.payment_status.to_string());
    push_rule(&mut out);

    for line in &order.items {
        let label = format!("{}x {}", line.quantity, line.item.name);
        push_pair(&mut out, &label, &fmt_money(money::line_total(line)));
        if !line.note.is_empty() {
            out.push_str(&format!("   Note: {}\n", line.note));
        }
    }
    push_rule(&mut out);

    let totals = ReceiptTotals::from_total(order.total);
    push_pair(&mut out, "Subtotal", &fmt_money(totals.subtotal));
    push_pair(&mut out, "Service Tax (6%)", &fmt_money(totals.tax));
    push_pair(&mut out, "TOTAL", &fmt_money(totals.total));
    push_rule(&mut out);

    push_centered(&mut out, &format!("Paid via {}", order.payment_method));
    push_centered(&mut out, "Thank you for dining with us");
    out
}

/// Two decimal places regardless of the Decimal's scale; reloaded blobs
/// may carry prices like `3.5`.
fn fmt_money(value: rust_decimal::Decimal) -> String {
    format!("RM {:.2}", money::round_display(value))
}

fn push_pair(out: &mut String, left: &str, right: &str) {
    let gap = WIDTH.saturating_sub(left.len() + right.len()).max(1);
    out.push_str(&format!("{}{}{}\n", left, " ".repeat(gap), right));
}

fn push_centered(out: &mut String, text: &str) {
    let pad = WIDTH.saturating_sub(text.len()) / 2;
    out.push_str(&format!("{}{}\n", " ".repeat(pad), text));
}

fn push_rule(out: &mut String) {
    out.push_str(&"-".repeat(WIDTH));
    out.push('\n');
}

fn format_time(millis: i64) -> String {
    match Utc.timestamp_millis_opt(millis) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        _ => millis.to_string(),
    }
}
