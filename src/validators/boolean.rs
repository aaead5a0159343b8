//! Fluent boolean validator chain

/// Start a boolean validation chain.
///
/// `false` is a present value; only `None` counts as absent.
pub fn boolean(value: impl Into<Option<bool>>) -> BooleanValidator {
    BooleanValidator {
        value: value.into(),
        message: None,
    }
}

/// Chainable validator over a single optional boolean.
#[derive(Debug, Clone)]
pub struct BooleanValidator {
    value: Option<bool>,
    message: Option<String>,
}

impl BooleanValidator {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    fn fail(&mut self, custom: Option<&str>, default: &str) {
        self.message = Some(custom.unwrap_or(default).to_string());
    }

    /// Fails when the value is absent. `false` passes.
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.value.is_none() {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails when the value is `false`. Absent values are skipped.
    pub fn is_true(mut self, message: Option<&str>) -> Self {
        if self.value == Some(false) {
            self.fail(message, "Required field to be true");
        }
        self
    }

    /// Fails when the value is `true`. Absent values are skipped.
    pub fn is_false(mut self, message: Option<&str>) -> Self {
        if self.value == Some(true) {
            self.fail(message, "Required field to be false");
        }
        self
    }
}
