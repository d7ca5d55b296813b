pub mod category;
pub mod error;
pub mod money;
pub mod types;

pub use category::ChargeCategory;
pub use error::ScheduleError;
pub use types::{
    IntegrityIssue, LineItem, RentScheduleDocument, Section, SectionKind, Severity, Totals,
    ViewMode,
};
