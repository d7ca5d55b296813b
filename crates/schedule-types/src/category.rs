//! Charge categories for rent schedule line items
//!
//! Categories are a closed set rather than free-form tags, so the grouping
//! rule table can only ever reference categories that exist. Fixture JSON
//! carries the kebab-case tag form (`"fire-safety"`, `"tv-licence"`).

use serde::{Deserialize, Serialize};

/// Category tag carried by every line item on a rent schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChargeCategory {
    // Core rent
    CoreRent,
    VoidCover,
    // Eligible service charges
    Cleaning,
    WindowCleaning,
    Gardening,
    FireSafety,
    ElectricalSafety,
    PestControl,
    Laundry,
    Furnishings,
    Maintenance,
    Management,
    Insurance,
    // Ineligible services
    Electricity,
    Gas,
    Water,
    TvLicence,
    Broadband,
}

impl ChargeCategory {
    /// The kebab-case tag used in fixture documents.
    pub fn tag(&self) -> &'static str {
        match self {
            ChargeCategory::CoreRent => "core-rent",
            ChargeCategory::VoidCover => "void-cover",
            ChargeCategory::Cleaning => "cleaning",
            ChargeCategory::WindowCleaning => "window-cleaning",
            ChargeCategory::Gardening => "gardening",
            ChargeCategory::FireSafety => "fire-safety",
            ChargeCategory::ElectricalSafety => "electrical-safety",
            ChargeCategory::PestControl => "pest-control",
            ChargeCategory::Laundry => "laundry",
            ChargeCategory::Furnishings => "furnishings",
            ChargeCategory::Maintenance => "maintenance",
            ChargeCategory::Management => "management",
            ChargeCategory::Insurance => "insurance",
            ChargeCategory::Electricity => "electricity",
            ChargeCategory::Gas => "gas",
            ChargeCategory::Water => "water",
            ChargeCategory::TvLicence => "tv-licence",
            ChargeCategory::Broadband => "broadband",
        }
    }

    /// Parse from a tag (case-insensitive).
    pub fn parse_tag(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "core-rent" => Some(ChargeCategory::CoreRent),
            "void-cover" => Some(ChargeCategory::VoidCover),
            "cleaning" => Some(ChargeCategory::Cleaning),
            "window-cleaning" => Some(ChargeCategory::WindowCleaning),
            "gardening" => Some(ChargeCategory::Gardening),
            "fire-safety" => Some(ChargeCategory::FireSafety),
            "electrical-safety" => Some(ChargeCategory::ElectricalSafety),
            "pest-control" => Some(ChargeCategory::PestControl),
            "laundry" => Some(ChargeCategory::Laundry),
            "furnishings" => Some(ChargeCategory::Furnishings),
            "maintenance" => Some(ChargeCategory::Maintenance),
            "management" => Some(ChargeCategory::Management),
            "insurance" => Some(ChargeCategory::Insurance),
            "electricity" => Some(ChargeCategory::Electricity),
            "gas" => Some(ChargeCategory::Gas),
            "water" => Some(ChargeCategory::Water),
            "tv-licence" => Some(ChargeCategory::TvLicence),
            "broadband" => Some(ChargeCategory::Broadband),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChargeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
