//! Identifier value object.

use std::fmt;

use uuid::Uuid;

use super::ValueError;

/// A non-empty string identifier.
///
/// Compared by value and immutable once constructed. New aggregates mint
/// their identifier via [`Id::generate`]; identifiers arriving from the
/// outside (route parameters, foreign keys, audit columns) go through
/// [`Id::required`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id(String);

impl Id {
    /// Validates an externally supplied identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when the value is empty or
    /// whitespace-only.
    pub fn required(raw: &str, field: &'static str) -> Result<Self, ValueError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueError::Required(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Mints a fresh random identifier for a new aggregate.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
