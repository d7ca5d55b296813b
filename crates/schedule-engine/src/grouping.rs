//! Simple-view aggregation: merging related line items into combined rows
//!
//! The transform always runs on the canonical raw item list, exactly once
//! per render. Its output carries no categories, so it is never chained
//! onto itself.

use schedule_types::money::round2;
use schedule_types::{LineItem, ViewMode};

use crate::rules::GroupRule;

/// One display row: a line item passed through unchanged, or several
/// related items merged by a group rule.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    /// `grouped_<rule id>` for merged rows, the original item id otherwise.
    pub id: String,
    pub label: String,
    pub amount: f64,
    pub description: String,
    pub is_grouped: bool,
    /// Source labels of a merged row, in original item order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grouped_from: Option<Vec<String>>,
}

impl DisplayItem {
    fn from_item(item: &LineItem, mode: ViewMode) -> Self {
        Self {
            id: item.id.clone(),
            label: item.label.clone(),
            amount: item.amount,
            description: item.display_description(mode).to_string(),
            is_grouped: false,
            grouped_from: None,
        }
    }
}

/// Raw pass-through pipeline: one row per item, in item order.
pub fn passthrough_items(items: &[LineItem], mode: ViewMode) -> Vec<DisplayItem> {
    items
        .iter()
        .map(|item| DisplayItem::from_item(item, mode))
        .collect()
}

/// Merge items matching the rule table into combined rows.
///
/// Rules apply in declaration order over the not-yet-consumed items. A rule
/// only fires when it matches two or more items — a single match stays on
/// its own row. Grouped rows come first in rule order, then every remaining
/// item unchanged in original order.
pub fn group_items(items: &[LineItem], rules: &[GroupRule], mode: ViewMode) -> Vec<DisplayItem> {
    let mut consumed = vec![false; items.len()];
    let mut out = Vec::new();

    for rule in rules {
        let matched: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(i, item)| !consumed[*i] && rule.match_categories.contains(&item.category))
            .map(|(i, _)| i)
            .collect();
        // No groups of one.
        if matched.len() < 2 {
            continue;
        }
        for &i in &matched {
            consumed[i] = true;
        }

        let labels: Vec<String> = matched.iter().map(|&i| items[i].label.clone()).collect();
        let amount = round2(matched.iter().map(|&i| items[i].amount).sum());
        let label = match mode {
            ViewMode::Normal => rule.display_label,
            ViewMode::EasyRead => rule.easy_read_label,
        };
        tracing::trace!(
            rule = rule.group_id,
            merged = matched.len(),
            "applied group rule"
        );
        out.push(DisplayItem {
            id: format!("grouped_{}", rule.group_id),
            label: label.to_string(),
            amount,
            description: format!("Includes: {}", labels.join(", ")),
            is_grouped: true,
            grouped_from: Some(labels),
        });
    }

    for (i, item) in items.iter().enumerate() {
        if !consumed[i] {
            out.push(DisplayItem::from_item(item, mode));
        }
    }

    out
}
