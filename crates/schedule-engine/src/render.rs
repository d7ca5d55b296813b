//! Render pipeline: filter sections, pick the raw or grouped item pipeline

use schedule_types::{RentScheduleDocument, Section, ViewMode};

use crate::grouping::{group_items, passthrough_items, DisplayItem};
use crate::rules::STANDARD_GROUP_RULES;
use crate::view::ViewState;

/// One section prepared for display.
#[derive(Debug, Clone)]
pub struct SectionView<'a> {
    pub section: &'a Section,
    pub expanded: bool,
    pub items: Vec<DisplayItem>,
}

impl SectionView<'_> {
    /// Section heading for the current display register.
    pub fn title(&self, mode: ViewMode) -> &str {
        self.section.display_title(mode)
    }
}

/// Sections visible under the current filter, each with its display rows.
///
/// Rows are rebuilt from the raw items on every call; nothing is cached
/// between renders.
pub fn render_sections<'a>(
    document: &'a RentScheduleDocument,
    view: &ViewState,
) -> Vec<SectionView<'a>> {
    let sections: Vec<SectionView<'a>> = document
        .sections()
        .into_iter()
        .filter(|section| view.show_filter().includes(section.kind))
        .map(|section| {
            let items = match view.view_mode() {
                ViewMode::Normal => passthrough_items(&section.items, ViewMode::Normal),
                ViewMode::EasyRead => {
                    group_items(&section.items, STANDARD_GROUP_RULES, ViewMode::EasyRead)
                }
            };
            SectionView {
                section,
                expanded: view.is_section_expanded(section.kind),
                items,
            }
        })
        .collect();
    tracing::debug!(
        mode = ?view.view_mode(),
        filter = ?view.show_filter(),
        sections = sections.len(),
        "rendered schedule sections"
    );
    sections
}
