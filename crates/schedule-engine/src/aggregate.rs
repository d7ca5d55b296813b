//! Section subtotal aggregation

use schedule_types::money::round2;
use schedule_types::LineItem;

/// Sum a section's weekly amounts, rounded to whole pence.
///
/// Commutative over item order; an empty section subtotals to zero.
/// Malformed amounts are rejected at document construction, so no
/// validation happens here.
pub fn section_subtotal(items: &[LineItem]) -> f64 {
    round2(items.iter().map(|item| item.amount).sum())
}
