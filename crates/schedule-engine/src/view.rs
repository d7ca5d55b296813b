//! Viewer state machine: display mode, section filter, expansion, tooltip
//!
//! One [`ViewState`] per open viewer, created at mount from a
//! [`ViewConfig`] and dropped at unmount. Every mutation goes through an
//! explicit transition; none of them touch the underlying document.

use std::collections::BTreeSet;

use schedule_types::{SectionKind, ViewMode};
use serde::{Deserialize, Serialize};

/// Which sections the toolbar filter keeps visible.
///
/// There is no value isolating eligible service charges alone; the filter
/// set is `all` / `core` / `bills` by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowFilter {
    All,
    Core,
    Bills,
}

impl ShowFilter {
    /// Whether sections of `kind` render under this filter.
    pub fn includes(&self, kind: SectionKind) -> bool {
        match self {
            ShowFilter::All => true,
            ShowFilter::Core => kind == SectionKind::CoreRent,
            ShowFilter::Bills => kind == SectionKind::IneligibleServices,
        }
    }
}

/// Startup defaults for a viewer instance, typically loaded from stored
/// viewer preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub view_mode: ViewMode,
    pub show_filter: ShowFilter,
    pub sections_expanded: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Normal,
            show_filter: ShowFilter::All,
            sections_expanded: true,
        }
    }
}

impl ViewConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Per-viewer display state.
#[derive(Debug, Clone)]
pub struct ViewState {
    view_mode: ViewMode,
    expanded_sections: BTreeSet<SectionKind>,
    expanded_items: BTreeSet<String>,
    active_tooltip: Option<String>,
    show_filter: ShowFilter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::with_config(&ViewConfig::default())
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        let expanded_sections = if config.sections_expanded {
            SectionKind::all().into_iter().collect()
        } else {
            BTreeSet::new()
        };
        Self {
            view_mode: config.view_mode,
            expanded_sections,
            expanded_items: BTreeSet::new(),
            active_tooltip: None,
            show_filter: config.show_filter,
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn show_filter(&self) -> ShowFilter {
        self.show_filter
    }

    pub fn active_tooltip(&self) -> Option<&str> {
        self.active_tooltip.as_deref()
    }

    pub fn is_section_expanded(&self, kind: SectionKind) -> bool {
        self.expanded_sections.contains(&kind)
    }

    pub fn is_item_expanded(&self, id: &str) -> bool {
        self.expanded_items.contains(id)
    }

    /// Unconditional overwrite; expansion state survives mode switches.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        tracing::debug!(?mode, "view mode changed");
        self.view_mode = mode;
    }

    /// Unconditional overwrite; affects which sections render, nothing else.
    pub fn set_show_filter(&mut self, filter: ShowFilter) {
        tracing::debug!(?filter, "section filter changed");
        self.show_filter = filter;
    }

    /// Membership toggle: toggling twice restores the original state.
    pub fn toggle_section(&mut self, kind: SectionKind) {
        if !self.expanded_sections.remove(&kind) {
            self.expanded_sections.insert(kind);
        }
    }

    /// Membership toggle: toggling twice restores the original state.
    pub fn toggle_item(&mut self, id: &str) {
        if !self.expanded_items.remove(id) {
            self.expanded_items.insert(id.to_string());
        }
    }

    /// Activating the already-active tooltip clears it; any other id
    /// replaces it. At most one tooltip is ever active.
    pub fn toggle_tooltip(&mut self, id: &str) {
        if self.active_tooltip.as_deref() == Some(id) {
            self.active_tooltip = None;
        } else {
            self.active_tooltip = Some(id.to_string());
        }
    }

    pub fn clear_tooltip(&mut self) {
        self.active_tooltip = None;
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.view_mode(), ViewMode::Normal);
        assert_eq!(state.show_filter(), ShowFilter::All);
        assert_eq!(state.active_tooltip(), None);
        for kind in SectionKind::all() {
            assert!(state.is_section_expanded(kind));
        }
        assert!(!state.is_item_expanded("core-1"));
    }

    #[test]
    fn test_toggle_section_symmetry() {
        let mut state = ViewState::new();
        for kind in SectionKind::all() {
            let before = state.is_section_expanded(kind);
            state.toggle_section(kind);
            assert_eq!(state.is_section_expanded(kind), !before);
            state.toggle_section(kind);
            assert_eq!(state.is_section_expanded(kind), before);
        }
    }

    #[test]
    fn test_toggle_item_symmetry() {
        let mut state = ViewState::new();
        assert!(!state.is_item_expanded("svc-3"));
        state.toggle_item("svc-3");
        assert!(state.is_item_expanded("svc-3"));
        state.toggle_item("svc-3");
        assert!(!state.is_item_expanded("svc-3"));
    }

    #[test]
    fn test_mode_switch_preserves_expansion() {
        let mut state = ViewState::new();
        state.toggle_section(SectionKind::CoreRent);
        state.toggle_item("svc-1");
        state.set_view_mode(ViewMode::EasyRead);
        assert!(!state.is_section_expanded(SectionKind::CoreRent));
        assert!(state.is_item_expanded("svc-1"));
        state.set_view_mode(ViewMode::Normal);
        assert!(!state.is_section_expanded(SectionKind::CoreRent));
        assert!(state.is_item_expanded("svc-1"));
    }

    #[test]
    fn test_filter_includes() {
        assert!(ShowFilter::All.includes(SectionKind::CoreRent));
        assert!(ShowFilter::All.includes(SectionKind::EligibleServiceCharges));
        assert!(ShowFilter::All.includes(SectionKind::IneligibleServices));

        assert!(ShowFilter::Core.includes(SectionKind::CoreRent));
        assert!(!ShowFilter::Core.includes(SectionKind::EligibleServiceCharges));
        assert!(!ShowFilter::Core.includes(SectionKind::IneligibleServices));

        assert!(!ShowFilter::Bills.includes(SectionKind::CoreRent));
        assert!(!ShowFilter::Bills.includes(SectionKind::EligibleServiceCharges));
        assert!(ShowFilter::Bills.includes(SectionKind::IneligibleServices));
    }

    #[test]
    fn test_tooltip_at_most_one_active() {
        let mut state = ViewState::new();
        state.toggle_tooltip("svc-1");
        assert_eq!(state.active_tooltip(), Some("svc-1"));
        state.toggle_tooltip("svc-2");
        assert_eq!(state.active_tooltip(), Some("svc-2"));
        state.toggle_tooltip("svc-2");
        assert_eq!(state.active_tooltip(), None);
        state.toggle_tooltip("svc-1");
        state.clear_tooltip();
        assert_eq!(state.active_tooltip(), None);
    }

    #[test]
    fn test_with_config_collapsed_start() {
        let config = ViewConfig {
            view_mode: ViewMode::EasyRead,
            show_filter: ShowFilter::Core,
            sections_expanded: false,
        };
        let state = ViewState::with_config(&config);
        assert_eq!(state.view_mode(), ViewMode::EasyRead);
        assert_eq!(state.show_filter(), ShowFilter::Core);
        for kind in SectionKind::all() {
            assert!(!state.is_section_expanded(kind));
        }
    }

    #[test]
    fn test_config_json_roundtrip_and_defaults() {
        let config = ViewConfig::from_json("{\"viewMode\":\"easyRead\"}").unwrap();
        assert_eq!(config.view_mode, ViewMode::EasyRead);
        assert_eq!(config.show_filter, ShowFilter::All);
        assert!(config.sections_expanded);

        let json = config.to_json().unwrap();
        let back = ViewConfig::from_json(&json).unwrap();
        assert_eq!(back, config);
    }
}
