//! Validation error map and fault types

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Boxed error returned by a faulting async validator.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Message recorded when an async validator returns an error instead of a
/// validation verdict. Deliberately distinct from any chain default so
/// callers can tell a fault from an ordinary failure.
pub(crate) fn fault_message(field: &str) -> String {
    format!("An error occurred while the validator [{field}] was running")
}

/// Sparse map of field names to their current failing message.
///
/// Fields that pass validation are absent, never present with an empty
/// string. Each field holds at most one message; a later failure for the
/// same field overwrites the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
pub struct Errors {
    fields: HashMap<String, String>,
}

impl Errors {
    /// Create an empty error map.
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Record a failing message for a field, replacing any existing entry.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.insert(field.into(), message.into());
    }

    /// Remove the entry for a field, if any.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    /// Get the failing message for a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Check whether a field currently has a failing message.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Check whether any field is failing.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Merge another error map into this one; entries in `other` win.
    pub fn merge(&mut self, other: Errors) {
        self.fields.extend(other.fields);
    }

    /// Iterate over `(field, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.fields.len())?;
            for (field, message) in &self.fields {
                write!(f, "\n  {}: {}", field, message)?;
            }
            Ok(())
        }
    }
}

impl FromIterator<(String, String)> for Errors {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut errors = Errors::new();
        errors.insert("email", "Invalid email");
        errors.insert("age", "Required field");

        assert_eq!(errors.len(), 2);
        assert!(errors.contains("email"));
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert!(!errors.contains("name"));
    }

    #[test]
    fn test_later_entry_overwrites() {
        let mut errors = Errors::new();
        errors.insert("email", "Required field");
        errors.insert("email", "Invalid email");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut errors = Errors::new();
        errors.insert("a", "x");
        errors.insert("b", "y");

        assert_eq!(errors.remove("a"), Some("x".to_string()));
        assert!(!errors.contains("a"));

        errors.clear();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = Errors::new();
        base.insert("a", "old");

        let mut incoming = Errors::new();
        incoming.insert("a", "new");
        incoming.insert("b", "y");

        base.merge(incoming);
        assert_eq!(base.get("a"), Some("new"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = Errors::new();
        assert_eq!(errors.to_string(), "No validation errors");

        errors.insert("email", "Invalid email");
        let rendered = errors.to_string();
        assert!(rendered.contains("1 field(s)"));
        assert!(rendered.contains("email: Invalid email"));
    }

    #[test]
    fn test_fault_message_names_field() {
        let message = fault_message("age");
        assert!(message.contains("[age]"));
    }
}
