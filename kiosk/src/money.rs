//! Money calculation utilities using rust_decimal for precision
//!
//! All pricing arithmetic stays in `Decimal`; rounding happens only at
//! receipt-display time. The stored order total is the exact cart subtotal.

use rust_decimal::prelude::*;
use shared::CartLine;

/// Rounding for displayed monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round a monetary value for display.
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit price × quantity.
pub fn line_total(line: &CartLine) -> Decimal {
    line.item.price * Decimal::from(line.quantity)
}

/// Cart subtotal: sum of line totals. Becomes the order total verbatim at
/// checkout; nothing is added on top.
pub fn cart_subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(line_total).sum()
}

/// Receipt decomposition of a tax-inclusive total.
///
/// The shop shows a fixed 6% service tax reverse-calculated from the
/// already-inclusive total: subtotal = total × 0.94, tax = total × 0.06.
/// Display-only; the stored total is never recomputed from these parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl ReceiptTotals {
    pub fn from_total(total: Decimal) -> Self {
        let subtotal_share = Decimal::new(94, 2); // 0.94
        let tax_share = Decimal::new(6, 2); // 0.06
        Self {
            subtotal: round_display(total * subtotal_share),
            tax: round_display(total * tax_share),
            total,
        }
    }
}
