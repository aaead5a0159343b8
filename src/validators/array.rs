//! Fluent array validator chain

use std::collections::HashSet;
use std::hash::Hash;

/// Start an array validation chain over a slice.
///
/// An empty slice is a present value; it passes
/// [`required`](ArrayValidator::required) and only
/// [`not_empty`](ArrayValidator::not_empty) rejects it.
pub fn array<'a, T>(value: impl Into<Option<&'a [T]>>) -> ArrayValidator<'a, T> {
    ArrayValidator {
        value: value.into(),
        message: None,
    }
}

/// Chainable validator over a single optional slice.
#[derive(Debug, Clone)]
pub struct ArrayValidator<'a, T> {
    value: Option<&'a [T]>,
    message: Option<String>,
}

impl<'a, T> ArrayValidator<'a, T> {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    fn fail(&mut self, custom: Option<&str>, default: impl Into<String>) {
        self.message = Some(custom.map_or_else(|| default.into(), str::to_owned));
    }

    /// Fails when the value is absent. Empty-but-present slices pass.
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.value.is_none() {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails when the slice has no elements.
    pub fn not_empty(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value.is_empty() {
                self.fail(message, "Array must not be empty");
            }
        }
        self
    }

    /// Fails when the slice has fewer than `min_length` elements.
    pub fn min_length(mut self, min_length: usize, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value.len() < min_length {
                self.fail(
                    message,
                    format!("Array must have at least {min_length} elements"),
                );
            }
        }
        self
    }

    /// Fails unless every element satisfies `predicate`.
    pub fn all_match(mut self, predicate: impl Fn(&T) -> bool, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if !value.iter().all(predicate) {
                self.fail(message, "All elements must match the predicate");
            }
        }
        self
    }
}

impl<'a, T: PartialEq> ArrayValidator<'a, T> {
    /// Fails unless the slice contains `element`.
    pub fn contains(mut self, element: &T, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if !value.contains(element) {
                self.fail(message, "Array must contain the required element");
            }
        }
        self
    }
}

impl<'a, T: Eq + Hash> ArrayValidator<'a, T> {
    /// Fails when any element appears more than once, judged by set-size
    /// equality.
    pub fn has_no_duplicates(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            let unique: HashSet<&T> = value.iter().collect();
            if unique.len() != value.len() {
                self.fail(message, "Array must not contain duplicates");
            }
        }
        self
    }
}
