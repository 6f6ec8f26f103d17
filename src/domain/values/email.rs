//! Email address value object.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::ValueError;

// Deliberately permissive: one @, no whitespace, a dotted host part.
// Deliverability checks belong to the mail infrastructure, not the domain.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// An email address validated against an RFC-like format at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Trims and validates an email address.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Required`] when empty, [`ValueError::Format`]
    /// when the value does not look like an address.
    pub fn required(raw: &str, field: &'static str) -> Result<Self, ValueError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValueError::Required(field));
        }
        if !EMAIL_FORMAT.is_match(trimmed) {
            return Err(ValueError::Format(field));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        let email = EmailAddress::required("taro.yamada@example.co.jp", "email address").unwrap();
        assert_eq!(email.as_str(), "taro.yamada@example.co.jp");
    }

    #[test]
    fn test_accepts_plus_addressing() {
        assert!(EmailAddress::required("taro+hr@example.com", "email address").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            EmailAddress::required("", "email address").unwrap_err(),
            ValueError::Required("email address")
        );
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(
            EmailAddress::required("taro.example.com", "email address").unwrap_err(),
            ValueError::Format("email address")
        );
    }

    #[test]
    fn test_rejects_missing_host_dot() {
        assert_eq!(
            EmailAddress::required("taro@localhost", "email address").unwrap_err(),
            ValueError::Format("email address")
        );
    }

    #[test]
    fn test_rejects_embedded_whitespace() {
        assert_eq!(
            EmailAddress::required("taro yamada@example.com", "email address").unwrap_err(),
            ValueError::Format("email address")
        );
    }
}
