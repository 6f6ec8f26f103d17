//! Validated value objects used by domain entities.
//!
//! Each value object either constructs a valid instance or fails with a
//! [`ValueError`] naming the offending field. Entities never hold raw
//! primitives for validated fields — every mutation goes back through these
//! factories.

pub mod deviation_score;
pub mod email;
pub mod id;
pub mod name;

pub use deviation_score::DeviationScore;
pub use email::EmailAddress;
pub use id::Id;
pub use name::Name;

use crate::error::AppError;
use serde_json::json;

/// Construction failures for value objects.
///
/// The `&'static str` payloads carry the field label shown to the caller
/// (e.g. "university name"), so the same value object type can report
/// different fields depending on where it is used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} has an invalid format")]
    Format(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },
}

impl ValueError {
    /// The label of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(field) | Self::Format(field) => field,
            Self::OutOfRange { field, .. } => field,
        }
    }
}

impl From<ValueError> for AppError {
    fn from(e: ValueError) -> Self {
        AppError::bad_request(e.to_string(), json!({ "field": e.field() }))
    }
}
