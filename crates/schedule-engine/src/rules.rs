//! Group rule table for the simple-view transform
//!
//! Rules are evaluated in declaration order, so the order here fixes the
//! order of grouped rows in the output.

use schedule_types::ChargeCategory;

/// One simple-view grouping rule: line items whose category appears in
/// `match_categories` merge into a single combined row.
#[derive(Debug, Clone, Copy)]
pub struct GroupRule {
    pub group_id: &'static str,
    pub display_label: &'static str,
    pub easy_read_label: &'static str,
    pub match_categories: &'static [ChargeCategory],
}

/// The standard rule table used by the schedule viewer.
///
/// Core rent categories are deliberately absent: the core rent section
/// stays itemized even in simple view.
pub const STANDARD_GROUP_RULES: &[GroupRule] = &[
    GroupRule {
        group_id: "cleaning-gardening",
        display_label: "Cleaning & Gardening",
        easy_read_label: "Keeping the building clean and tidy",
        match_categories: &[
            ChargeCategory::Cleaning,
            ChargeCategory::WindowCleaning,
            ChargeCategory::Gardening,
        ],
    },
    GroupRule {
        group_id: "safety-compliance",
        display_label: "Safety & Compliance",
        easy_read_label: "Keeping you safe",
        match_categories: &[ChargeCategory::FireSafety, ChargeCategory::ElectricalSafety],
    },
    GroupRule {
        group_id: "pest-control",
        display_label: "Pest Control",
        easy_read_label: "Dealing with pests",
        match_categories: &[ChargeCategory::PestControl],
    },
    GroupRule {
        group_id: "repairs-replacements",
        display_label: "Repairs & Replacements",
        easy_read_label: "Fixing and replacing things",
        match_categories: &[ChargeCategory::Maintenance, ChargeCategory::Furnishings],
    },
    GroupRule {
        group_id: "household-bills",
        display_label: "Household Bills",
        easy_read_label: "Your gas, electric and water",
        match_categories: &[
            ChargeCategory::Electricity,
            ChargeCategory::Gas,
            ChargeCategory::Water,
        ],
    },
    GroupRule {
        group_id: "tv-internet",
        display_label: "TV & Internet",
        easy_read_label: "Your TV and internet",
        match_categories: &[ChargeCategory::TvLicence, ChargeCategory::Broadband],
    },
];
