use thiserror::Error;

use crate::types::SectionKind;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid line item '{id}': {reason}")]
    InvalidLineItem { id: String, reason: String },

    #[error("duplicate line item id '{id}'")]
    DuplicateItemId { id: String },

    #[error("section slot '{slot}' carries kind '{found}'")]
    SectionKindMismatch { slot: SectionKind, found: SectionKind },

    #[error("{context}: stored value {stored:.2} does not match computed {computed:.2}")]
    DataIntegrity {
        context: String,
        stored: f64,
        computed: f64,
    },

    #[error("failed to parse schedule document: {0}")]
    Parse(String),
}
