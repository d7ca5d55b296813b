//! Read-only audits over schedule documents
//!
//! Fixture documents are authored by hand, so stored values can drift from
//! the items they summarize. The checker reports findings instead of
//! failing; an empty issue list means the document is clean.

use std::collections::HashSet;

use schedule_types::money::{approx_eq, round2};
use schedule_types::{IntegrityIssue, RentScheduleDocument, Section, Severity};

use crate::aggregate::section_subtotal;
use crate::extractors::{extract_annual_amount, extract_weekly_amount};
use crate::totals::compute_totals;

const WEEKS_PER_YEAR: f64 = 52.0;

/// Run every audit over a document.
pub fn check_document(document: &RentScheduleDocument) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    check_amounts(document, &mut issues);
    check_duplicate_ids(document, &mut issues);
    check_subtotals(document, &mut issues);
    check_totals(document, &mut issues);
    check_void_cover(document, &mut issues);
    check_calculation_notes(document, &mut issues);
    if !issues.is_empty() {
        tracing::warn!(
            document = %document.id,
            count = issues.len(),
            "integrity audit found issues"
        );
    }
    issues
}

fn check_amounts(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    for section in document.sections() {
        for item in &section.items {
            if !item.amount.is_finite() {
                issues.push(IntegrityIssue {
                    severity: Severity::Critical,
                    section: Some(section.kind),
                    item_id: Some(item.id.clone()),
                    message: format!("'{}' has a non-finite amount", item.label),
                });
            } else if item.amount < 0.0 {
                issues.push(IntegrityIssue {
                    severity: Severity::Critical,
                    section: Some(section.kind),
                    item_id: Some(item.id.clone()),
                    message: format!("'{}' has a negative amount {:.2}", item.label, item.amount),
                });
            }
        }
    }
}

fn check_duplicate_ids(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    let mut seen = HashSet::new();
    for section in document.sections() {
        for item in &section.items {
            if !seen.insert(item.id.as_str()) {
                issues.push(IntegrityIssue {
                    severity: Severity::Critical,
                    section: Some(section.kind),
                    item_id: Some(item.id.clone()),
                    message: format!("item id '{}' appears more than once", item.id),
                });
            }
        }
    }
}

fn check_subtotals(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    for section in document.sections() {
        let computed = section_subtotal(&section.items);
        if !approx_eq(section.subtotal, computed) {
            issues.push(IntegrityIssue {
                severity: Severity::Critical,
                section: Some(section.kind),
                item_id: None,
                message: format!(
                    "stored subtotal {:.2} does not match computed {:.2}",
                    section.subtotal, computed
                ),
            });
        }
    }
}

fn check_totals(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    let expected = compute_totals(document);
    let stored = &document.totals;
    let fields = [
        ("coreRentWeekly", stored.core_rent_weekly, expected.core_rent_weekly),
        (
            "serviceChargesWeekly",
            stored.service_charges_weekly,
            expected.service_charges_weekly,
        ),
        ("ineligibleWeekly", stored.ineligible_weekly, expected.ineligible_weekly),
        ("grossWeeklyRent", stored.gross_weekly_rent, expected.gross_weekly_rent),
        ("eligibleForHB", stored.eligible_for_hb, expected.eligible_for_hb),
        ("ineligibleForHB", stored.ineligible_for_hb, expected.ineligible_for_hb),
    ];
    for (name, stored_value, expected_value) in fields {
        if !approx_eq(stored_value, expected_value) {
            issues.push(IntegrityIssue {
                severity: Severity::Critical,
                section: None,
                item_id: None,
                message: format!(
                    "totals.{} stored {:.2} does not match computed {:.2}",
                    name, stored_value, expected_value
                ),
            });
        }
    }
}

fn check_void_cover(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    for section in document.sections() {
        let base = non_void_base(section);
        for item in &section.items {
            if !item.is_void_cover {
                continue;
            }
            match item.void_percentage {
                Some(pct) => {
                    let expected = round2(base * pct / 100.0);
                    if !approx_eq(item.amount, expected) {
                        issues.push(IntegrityIssue {
                            severity: Severity::Warning,
                            section: Some(section.kind),
                            item_id: Some(item.id.clone()),
                            message: format!(
                                "void cover amount {:.2} is not {}% of the section base {:.2} (expected {:.2})",
                                item.amount, pct, base, expected
                            ),
                        });
                    }
                }
                None => {
                    issues.push(IntegrityIssue {
                        severity: Severity::Info,
                        section: Some(section.kind),
                        item_id: Some(item.id.clone()),
                        message: "void cover item carries no percentage".to_string(),
                    });
                }
            }
        }
    }
}

fn non_void_base(section: &Section) -> f64 {
    round2(
        section
            .items
            .iter()
            .filter(|item| !item.is_void_cover)
            .map(|item| item.amount)
            .sum(),
    )
}

fn check_calculation_notes(document: &RentScheduleDocument, issues: &mut Vec<IntegrityIssue>) {
    for section in document.sections() {
        for item in &section.items {
            let note = match &item.calculation {
                Some(note) => note,
                None => continue,
            };
            // A stated weekly figure wins over an annual derivation.
            let derived = extract_weekly_amount(note)
                .or_else(|| extract_annual_amount(note).map(|annual| annual / WEEKS_PER_YEAR));
            if let Some(derived) = derived {
                let derived = round2(derived);
                if !approx_eq(derived, item.amount) {
                    issues.push(IntegrityIssue {
                        severity: Severity::Warning,
                        section: Some(section.kind),
                        item_id: Some(item.id.clone()),
                        message: format!(
                            "calculation note works out at {:.2} but the amount is {:.2}",
                            derived, item.amount
                        ),
                    });
                }
            }
        }
    }
}
