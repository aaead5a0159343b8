//! Fluent string validator chain

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").expect("valid integer pattern"));
static ALPHABETIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("valid alphabetic pattern"));
static ALPHANUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid alphanumeric pattern"));
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-+]?\d*\.?\d+$").expect("valid numeric pattern"));
static USERNAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid username pattern"));
static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").expect("valid name pattern"));
static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid uuid pattern")
});

/// Start a string validation chain.
///
/// Accepts a value or `None` for absent input; checks other than
/// [`required`](StringValidator::required) skip absent values.
pub fn string<'a>(value: impl Into<Option<&'a str>>) -> StringValidator<'a> {
    StringValidator {
        value: value.into(),
        message: None,
    }
}

/// Chainable validator over a single optional string.
///
/// Checks do not short-circuit; when several fail, the last failing check's
/// message is the one reported by [`validate`](StringValidator::validate).
/// Every check takes an optional custom message that replaces its default.
#[derive(Debug, Clone)]
pub struct StringValidator<'a> {
    value: Option<&'a str>,
    message: Option<String>,
}

impl<'a> StringValidator<'a> {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    /// The empty string counts as absent, matching `required`.
    fn present(&self) -> Option<&'a str> {
        self.value.filter(|v| !v.is_empty())
    }

    fn fail(&mut self, custom: Option<&str>, default: impl Into<String>) {
        self.message = Some(custom.map_or_else(|| default.into(), str::to_owned));
    }

    /// Fails when the value is absent or empty.
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.present().is_none() {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails when the value does not match `regex`.
    pub fn matches(mut self, regex: &Regex, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !regex.is_match(value) {
                self.fail(message, "Invalid value");
            }
        }
        self
    }

    /// Fails when the value is not a well-formed email address.
    pub fn email(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !EMAIL.is_match(value) {
                self.fail(message, "Invalid email");
            }
        }
        self
    }

    /// Fails unless the value consists solely of digits.
    pub fn integer(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !INTEGER.is_match(value) {
                self.fail(message, "Value must be an integer");
            }
        }
        self
    }

    /// Fails unless the value consists solely of ASCII letters.
    pub fn alphabetic(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !ALPHABETIC.is_match(value) {
                self.fail(message, "Value must be alphabetic");
            }
        }
        self
    }

    /// Fails unless the value consists solely of ASCII letters and digits.
    pub fn alphanumeric(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !ALPHANUMERIC.is_match(value) {
                self.fail(message, "Value must be alphanumeric");
            }
        }
        self
    }

    /// Fails unless the value is a number, with optional sign and decimals.
    pub fn numeric(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !NUMERIC.is_match(value) {
                self.fail(message, "Value must be a number");
            }
        }
        self
    }

    /// Fails unless the value parses as an absolute URL.
    pub fn url(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if Url::parse(value).is_err() {
                self.fail(message, "Invalid URL");
            }
        }
        self
    }

    /// Fails unless the value is exactly `length` characters long.
    pub fn length(mut self, length: usize, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if value.chars().count() != length {
                self.fail(message, format!("Value must contain exactly {length} chars"));
            }
        }
        self
    }

    /// Fails when the value is shorter than `min_length` characters.
    pub fn min(mut self, min_length: usize, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if value.chars().count() < min_length {
                self.fail(
                    message,
                    format!("Value must contain at least {min_length} chars"),
                );
            }
        }
        self
    }

    /// Fails when the value is longer than `max_length` characters.
    pub fn max(mut self, max_length: usize, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if value.chars().count() > max_length {
                self.fail(
                    message,
                    format!("Value must contain at most {max_length} chars"),
                );
            }
        }
        self
    }

    /// Fails unless the value contains only letters, digits and underscores.
    pub fn username(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !USERNAME.is_match(value) {
                self.fail(message, "Value contains invalid characters");
            }
        }
        self
    }

    /// Fails unless the value contains only letters and whitespace.
    pub fn name(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !NAME.is_match(value) {
                self.fail(message, "Value contains invalid characters");
            }
        }
        self
    }

    /// Fails unless the value is a canonical hyphenated UUID.
    pub fn uuid(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if !UUID.is_match(value) {
                self.fail(message, "Invalid UUID");
            }
        }
        self
    }

    /// Fails when the value differs from its lowercase form.
    pub fn lowercase(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if value != value.to_lowercase() {
                self.fail(message, "Value must be lowercase");
            }
        }
        self
    }

    /// Fails when the value differs from its uppercase form.
    pub fn uppercase(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.present() {
            if value != value.to_uppercase() {
                self.fail(message, "Value must be uppercase");
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(string("John").required(None).validate().is_none());
        assert_eq!(
            string(None).required(None).validate(),
            Some("Required field".to_string())
        );
        // The empty string counts as missing.
        assert_eq!(
            string("").required(Some("X")).validate(),
            Some("X".to_string())
        );
    }

    #[test]
    fn test_checks_skip_absent_values() {
        let result = string(None)
            .email(None)
            .integer(None)
            .url(None)
            .min(3, None)
            .uuid(None)
            .validate();
        assert!(result.is_none());

        assert!(string("").email(None).length(5, None).validate().is_none());
    }

    #[test]
    fn test_email() {
        assert!(string("john@example.com").email(None).validate().is_none());
        assert!(string("john@example").email(None).validate().is_some());
        assert_eq!(
            string("not-an-email").email(Some("bad email")).validate(),
            Some("bad email".to_string())
        );
    }

    #[test]
    fn test_integer_and_numeric() {
        assert!(string("12345").integer(None).validate().is_none());
        assert!(string("12.5").integer(None).validate().is_some());
        assert!(string("-12.5").numeric(None).validate().is_none());
        assert!(string("+42").numeric(None).validate().is_none());
        assert!(string("4a2").numeric(None).validate().is_some());
    }

    #[test]
    fn test_character_classes() {
        assert!(string("Hello").alphabetic(None).validate().is_none());
        assert!(string("Hello1").alphabetic(None).validate().is_some());
        assert!(string("Hello1").alphanumeric(None).validate().is_none());
        assert!(string("Hello 1").alphanumeric(None).validate().is_some());
        assert!(string("john_doe1").username(None).validate().is_none());
        assert!(string("john doe").username(None).validate().is_some());
        assert!(string("John Doe").name(None).validate().is_none());
        assert!(string("John Doe 3rd").name(None).validate().is_some());
    }

    #[test]
    fn test_url() {
        assert!(string("https://example.com/a?b=c")
            .url(None)
            .validate()
            .is_none());
        assert!(string("not a url").url(None).validate().is_some());
    }

    #[test]
    fn test_lengths() {
        assert!(string("abcde").length(5, None).validate().is_none());
        assert!(string("abcde").length(4, None).validate().is_some());
        assert!(string("abcde").min(5, None).validate().is_none());
        assert!(string("abcd").min(5, None).validate().is_some());
        assert!(string("abcde").max(5, None).validate().is_none());
        assert!(string("abcdef").max(5, None).validate().is_some());
        // Character count, not byte count.
        assert!(string("héllo").length(5, None).validate().is_none());
    }

    #[test]
    fn test_uuid() {
        assert!(string("123e4567-e89b-12d3-a456-426655440000")
            .uuid(None)
            .validate()
            .is_none());
        assert!(string("invalid-uuid").uuid(None).validate().is_some());
        // Simple (dashless) form is rejected.
        assert!(string("123e4567e89b12d3a456426655440000")
            .uuid(None)
            .validate()
            .is_some());
    }

    #[test]
    fn test_case_checks() {
        assert!(string("hello").lowercase(None).validate().is_none());
        assert!(string("Hello").lowercase(None).validate().is_some());
        assert!(string("HELLO").uppercase(None).validate().is_none());
        assert!(string("Hello").uppercase(None).validate().is_some());
    }

    #[test]
    fn test_last_failure_wins() {
        let result = string("ab")
            .min(3, Some("too short"))
            .integer(Some("not a number"))
            .validate();
        assert_eq!(result, Some("not a number".to_string()));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let chain = string("ab").min(3, Some("too short"));
        assert_eq!(chain.validate(), Some("too short".to_string()));
        assert_eq!(chain.validate(), Some("too short".to_string()));
    }

    #[test]
    fn test_custom_matches() {
        let re = Regex::new(r"^[A-Z]{3}$").unwrap();
        assert!(string("ABC").matches(&re, None).validate().is_none());
        assert_eq!(
            string("abc").matches(&re, None).validate(),
            Some("Invalid value".to_string())
        );
    }
}
