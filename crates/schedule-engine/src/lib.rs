pub mod aggregate;
pub mod extractors;
pub mod grouping;
pub mod integrity;
pub mod render;
pub mod rules;
pub mod totals;
pub mod view;

pub use grouping::DisplayItem;
pub use render::SectionView;
pub use rules::{GroupRule, STANDARD_GROUP_RULES};
pub use view::{ShowFilter, ViewConfig, ViewState};

use schedule_types::{IntegrityIssue, RentScheduleDocument, Totals};

/// ScheduleEngine entry point
pub struct ScheduleEngine;

impl ScheduleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Sections visible under the current filter, each with display rows
    /// chosen by the view mode.
    pub fn render_sections<'a>(
        &self,
        document: &'a RentScheduleDocument,
        view: &ViewState,
    ) -> Vec<SectionView<'a>> {
        render::render_sections(document, view)
    }

    /// Weekly totals recomputed from the raw line items.
    pub fn compute_totals(&self, document: &RentScheduleDocument) -> Totals {
        totals::compute_totals(document)
    }

    /// Audit a document's stored values, reporting findings without failing.
    pub fn check_document(&self, document: &RentScheduleDocument) -> Vec<IntegrityIssue> {
        integrity::check_document(document)
    }
}

impl Default for ScheduleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule_types::{ChargeCategory, LineItem, Section, SectionKind, ViewMode};

    fn item(id: &str, label: &str, amount: f64, category: ChargeCategory) -> LineItem {
        LineItem {
            id: id.to_string(),
            label: label.to_string(),
            amount,
            description: format!("{} charge", label),
            easy_read_description: format!("Money for {}", label.to_lowercase()),
            category,
            calculation: None,
            is_void_cover: false,
            void_percentage: None,
        }
    }

    fn document() -> RentScheduleDocument {
        RentScheduleDocument::new(
            "doc-1",
            "Elm Lodge",
            chrono::NaiveDate::from_ymd_opt(2026, 4, 6).unwrap(),
            Section::new(
                SectionKind::CoreRent,
                "Core rent",
                "Your rent",
                vec![item("core-1", "Base rent", 317.02, ChargeCategory::CoreRent)],
            ),
            Section::new(
                SectionKind::EligibleServiceCharges,
                "Eligible service charges",
                "Charges your benefit can cover",
                vec![
                    item("svc-1", "Fire alarm", 4.25, ChargeCategory::FireSafety),
                    item("svc-2", "Fire extinguishers", 1.50, ChargeCategory::FireSafety),
                    item("svc-3", "Communal cleaning", 80.67, ChargeCategory::Cleaning),
                ],
            ),
            Section::new(
                SectionKind::IneligibleServices,
                "Ineligible services",
                "Bills you pay yourself",
                vec![item("inel-1", "Personal electricity", 130.39, ChargeCategory::Electricity)],
            ),
        )
        .unwrap()
    }

    #[test]
    fn test_engine_totals_match_sections() {
        let engine = ScheduleEngine::new();
        let totals = engine.compute_totals(&document());
        assert_eq!(totals.gross_weekly_rent, 533.83);
        assert_eq!(totals.eligible_for_hb, 403.44);
        assert_eq!(totals.ineligible_for_hb, 130.39);
    }

    #[test]
    fn test_engine_renders_grouped_rows_in_easy_read() {
        let engine = ScheduleEngine::new();
        let doc = document();
        let mut state = ViewState::new();
        state.set_view_mode(ViewMode::EasyRead);
        let views = engine.render_sections(&doc, &state);

        let service_rows = &views[1].items;
        assert_eq!(service_rows.len(), 2);
        assert!(service_rows[0].is_grouped);
        assert_eq!(service_rows[0].amount, 5.75);
        assert_eq!(service_rows[1].id, "svc-3");
    }

    #[test]
    fn test_engine_accepts_clean_document() {
        let engine = ScheduleEngine::default();
        assert!(engine.check_document(&document()).is_empty());
    }

    #[test]
    fn test_engine_flags_tampered_document() {
        let engine = ScheduleEngine::new();
        let mut doc = document();
        doc.totals.gross_weekly_rent += 10.0;
        let issues = engine.check_document(&doc);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("grossWeeklyRent"));
    }
}
