//! Weekly totals over a schedule document

use schedule_types::{RentScheduleDocument, Totals};

use crate::aggregate::section_subtotal;

/// Recompute the totals block from the raw line items.
///
/// Never reads `document.totals`: recomputing on every call is the engine's
/// defense against drift between a stored total and the items on display.
pub fn compute_totals(document: &RentScheduleDocument) -> Totals {
    Totals::from_subtotals(
        section_subtotal(&document.core_rent.items),
        section_subtotal(&document.eligible_service_charges.items),
        section_subtotal(&document.ineligible_services.items),
    )
}
