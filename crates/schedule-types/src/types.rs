use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::ChargeCategory;
use crate::error::ScheduleError;
use crate::money::{approx_eq, round2};

/// Display register selected by the viewer toolbar.
///
/// `EasyRead` swaps in simplified wording and merges related charges; it
/// never changes the underlying document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    Normal,
    EasyRead,
}

/// One weekly charge on a rent schedule.
///
/// Immutable once constructed; owned by its parent [`Section`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within the document.
    pub id: String,
    pub label: String,
    /// Weekly charge in pounds, non-negative.
    pub amount: f64,
    pub description: String,
    pub easy_read_description: String,
    pub category: ChargeCategory,
    /// Human-readable derivation note, e.g. "annual cost £221.00 ÷ 52".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation: Option<String>,
    #[serde(default)]
    pub is_void_cover: bool,
    /// Percentage uplift covering vacant units, present on void-cover items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub void_percentage: Option<f64>,
}

impl LineItem {
    /// Description text for the given display register.
    pub fn display_description(&self, mode: ViewMode) -> &str {
        match mode {
            ViewMode::Normal => &self.description,
            ViewMode::EasyRead => &self.easy_read_description,
        }
    }

    fn validate(&self) -> Result<(), ScheduleError> {
        if self.id.is_empty() {
            return Err(ScheduleError::InvalidLineItem {
                id: "<empty>".to_string(),
                reason: "empty id".to_string(),
            });
        }
        if !self.amount.is_finite() {
            return Err(ScheduleError::InvalidLineItem {
                id: self.id.clone(),
                reason: "amount is not a finite number".to_string(),
            });
        }
        if self.amount < 0.0 {
            return Err(ScheduleError::InvalidLineItem {
                id: self.id.clone(),
                reason: format!("negative amount {:.2}", self.amount),
            });
        }
        if let Some(pct) = self.void_percentage {
            if !pct.is_finite() || pct < 0.0 {
                return Err(ScheduleError::InvalidLineItem {
                    id: self.id.clone(),
                    reason: format!("invalid void percentage {}", pct),
                });
            }
        }
        Ok(())
    }
}

/// The three charge sections every rent schedule carries, in canonical
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionKind {
    #[serde(rename = "coreRent")]
    CoreRent,
    #[serde(rename = "eligibleServiceCharges")]
    EligibleServiceCharges,
    #[serde(rename = "ineligibleServices")]
    IneligibleServices,
}

impl SectionKind {
    /// The id tag used in fixture documents.
    pub fn name(&self) -> &'static str {
        match self {
            SectionKind::CoreRent => "coreRent",
            SectionKind::EligibleServiceCharges => "eligibleServiceCharges",
            SectionKind::IneligibleServices => "ineligibleServices",
        }
    }

    /// Whether Housing Benefit can cover charges in this section.
    pub fn is_hb_eligible(&self) -> bool {
        !matches!(self, SectionKind::IneligibleServices)
    }

    /// All kinds in canonical display order.
    pub fn all() -> [SectionKind; 3] {
        [
            SectionKind::CoreRent,
            SectionKind::EligibleServiceCharges,
            SectionKind::IneligibleServices,
        ]
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One categorized section of a schedule, with its stored subtotal.
///
/// Invariant: `subtotal == round2(sum of item amounts)`. [`Section::new`]
/// establishes it; [`RentScheduleDocument::verify`] checks it on documents
/// that arrive already populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub easy_read_title: String,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
}

impl Section {
    pub fn new(
        kind: SectionKind,
        title: impl Into<String>,
        easy_read_title: impl Into<String>,
        items: Vec<LineItem>,
    ) -> Self {
        let subtotal = computed_subtotal(&items);
        Self {
            kind,
            title: title.into(),
            easy_read_title: easy_read_title.into(),
            items,
            subtotal,
        }
    }

    /// Title text for the given display register.
    pub fn display_title(&self, mode: ViewMode) -> &str {
        match mode {
            ViewMode::Normal => &self.title,
            ViewMode::EasyRead => &self.easy_read_title,
        }
    }
}

fn computed_subtotal(items: &[LineItem]) -> f64 {
    round2(items.iter().map(|item| item.amount).sum())
}

/// Weekly totals block: the three section subtotals plus the derived gross
/// figure and the Housing Benefit split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub core_rent_weekly: f64,
    pub service_charges_weekly: f64,
    pub ineligible_weekly: f64,
    pub gross_weekly_rent: f64,
    #[serde(rename = "eligibleForHB")]
    pub eligible_for_hb: f64,
    #[serde(rename = "ineligibleForHB")]
    pub ineligible_for_hb: f64,
}

impl Totals {
    /// Derive the full totals block from the three section subtotals.
    ///
    /// Core rent and eligible service charges make up the HB-eligible
    /// figure; ineligible services are always paid by the tenant directly.
    pub fn from_subtotals(
        core_rent_weekly: f64,
        service_charges_weekly: f64,
        ineligible_weekly: f64,
    ) -> Self {
        Self {
            core_rent_weekly,
            service_charges_weekly,
            ineligible_weekly,
            gross_weekly_rent: round2(
                core_rent_weekly + service_charges_weekly + ineligible_weekly,
            ),
            eligible_for_hb: round2(core_rent_weekly + service_charges_weekly),
            ineligible_for_hb: ineligible_weekly,
        }
    }
}

/// A complete rent schedule for one scheme: exactly three sections plus the
/// weekly totals block.
///
/// Immutable display data. Constructed once, via [`RentScheduleDocument::new`]
/// (invariants established by construction) or
/// [`RentScheduleDocument::from_json`] (stored values verified against
/// recomputed ones), then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentScheduleDocument {
    pub id: String,
    pub scheme_name: String,
    pub effective_from: NaiveDate,
    pub core_rent: Section,
    pub eligible_service_charges: Section,
    pub ineligible_services: Section,
    pub totals: Totals,
}

impl RentScheduleDocument {
    /// Build a document from three sections, recomputing every subtotal and
    /// the totals block so the stored values cannot drift from the items.
    pub fn new(
        id: impl Into<String>,
        scheme_name: impl Into<String>,
        effective_from: NaiveDate,
        mut core_rent: Section,
        mut eligible_service_charges: Section,
        mut ineligible_services: Section,
    ) -> Result<Self, ScheduleError> {
        check_slot(SectionKind::CoreRent, &core_rent)?;
        check_slot(SectionKind::EligibleServiceCharges, &eligible_service_charges)?;
        check_slot(SectionKind::IneligibleServices, &ineligible_services)?;
        validate_items([
            &core_rent,
            &eligible_service_charges,
            &ineligible_services,
        ])?;

        core_rent.subtotal = computed_subtotal(&core_rent.items);
        eligible_service_charges.subtotal = computed_subtotal(&eligible_service_charges.items);
        ineligible_services.subtotal = computed_subtotal(&ineligible_services.items);

        let totals = Totals::from_subtotals(
            core_rent.subtotal,
            eligible_service_charges.subtotal,
            ineligible_services.subtotal,
        );

        Ok(Self {
            id: id.into(),
            scheme_name: scheme_name.into(),
            effective_from,
            core_rent,
            eligible_service_charges,
            ineligible_services,
            totals,
        })
    }

    /// Parse a fixture document and verify its stored values.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        let doc: Self =
            serde_json::from_str(json).map_err(|e| ScheduleError::Parse(e.to_string()))?;
        doc.verify()?;
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The three sections in canonical display order.
    pub fn sections(&self) -> [&Section; 3] {
        [
            &self.core_rent,
            &self.eligible_service_charges,
            &self.ineligible_services,
        ]
    }

    pub fn section(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::CoreRent => &self.core_rent,
            SectionKind::EligibleServiceCharges => &self.eligible_service_charges,
            SectionKind::IneligibleServices => &self.ineligible_services,
        }
    }

    /// Check every stored subtotal and totals field against values
    /// recomputed from the raw items. A drifted value is a
    /// [`ScheduleError::DataIntegrity`], not something to display.
    pub fn verify(&self) -> Result<(), ScheduleError> {
        check_slot(SectionKind::CoreRent, &self.core_rent)?;
        check_slot(
            SectionKind::EligibleServiceCharges,
            &self.eligible_service_charges,
        )?;
        check_slot(SectionKind::IneligibleServices, &self.ineligible_services)?;
        validate_items(self.sections())?;

        let mut computed = [0.0; 3];
        for (i, section) in self.sections().into_iter().enumerate() {
            computed[i] = computed_subtotal(&section.items);
            if !approx_eq(section.subtotal, computed[i]) {
                return Err(ScheduleError::DataIntegrity {
                    context: format!("section '{}' subtotal", section.kind),
                    stored: section.subtotal,
                    computed: computed[i],
                });
            }
        }

        let expected = Totals::from_subtotals(computed[0], computed[1], computed[2]);
        let fields = [
            ("totals.coreRentWeekly", self.totals.core_rent_weekly, expected.core_rent_weekly),
            (
                "totals.serviceChargesWeekly",
                self.totals.service_charges_weekly,
                expected.service_charges_weekly,
            ),
            (
                "totals.ineligibleWeekly",
                self.totals.ineligible_weekly,
                expected.ineligible_weekly,
            ),
            (
                "totals.grossWeeklyRent",
                self.totals.gross_weekly_rent,
                expected.gross_weekly_rent,
            ),
            (
                "totals.eligibleForHB",
                self.totals.eligible_for_hb,
                expected.eligible_for_hb,
            ),
            (
                "totals.ineligibleForHB",
                self.totals.ineligible_for_hb,
                expected.ineligible_for_hb,
            ),
        ];
        for (context, stored, computed) in fields {
            if !approx_eq(stored, computed) {
                return Err(ScheduleError::DataIntegrity {
                    context: context.to_string(),
                    stored,
                    computed,
                });
            }
        }

        Ok(())
    }
}

fn check_slot(slot: SectionKind, section: &Section) -> Result<(), ScheduleError> {
    if section.kind != slot {
        return Err(ScheduleError::SectionKindMismatch {
            slot,
            found: section.kind,
        });
    }
    Ok(())
}

fn validate_items(sections: [&Section; 3]) -> Result<(), ScheduleError> {
    let mut seen = std::collections::HashSet::new();
    for section in sections {
        for item in &section.items {
            item.validate()?;
            if !seen.insert(item.id.as_str()) {
                return Err(ScheduleError::DuplicateItemId {
                    id: item.id.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Issue severity for document audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// One finding from a document integrity audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntegrityIssue {
    pub severity: Severity,
    pub section: Option<SectionKind>,
    pub item_id: Option<String>,
    pub message: String,
}
