//! Display-name value object.

use std::fmt;

use super::ValueError;

/// A non-empty trimmed display name.
///
/// The field label passed at construction drives the error message, so a
/// `Name` rejected as a university name reads differently from one rejected
/// as a department name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Trims and validates a name.
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

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
