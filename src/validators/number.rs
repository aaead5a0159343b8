//! Fluent number validator chain

/// Start a number validation chain.
///
/// Checks other than [`required`](NumberValidator::required) skip absent
/// values. `0.0` is a present value, and so is `NaN`.
pub fn number(value: impl Into<Option<f64>>) -> NumberValidator {
    NumberValidator {
        value: value.into(),
        message: None,
    }
}

/// Chainable validator over a single optional number.
#[derive(Debug, Clone)]
pub struct NumberValidator {
    value: Option<f64>,
    message: Option<String>,
}

impl NumberValidator {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    fn fail(&mut self, custom: Option<&str>, default: impl Into<String>) {
        self.message = Some(custom.map_or_else(|| default.into(), str::to_owned));
    }

    /// Fails when the value is absent. Zero and `NaN` both pass.
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.value.is_none() {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails unless the value is a whole number. `NaN` fails.
    pub fn integer(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value.is_nan() || value.fract() != 0.0 {
                self.fail(message, "Value must be an integer");
            }
        }
        self
    }

    /// Fails unless the value is finite with a fractional part. `NaN` fails.
    pub fn decimal(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if !value.is_finite() || value.fract() == 0.0 {
                self.fail(message, "Value must be a decimal");
            }
        }
        self
    }

    /// Fails when the value is below zero. Zero passes.
    pub fn positive(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value < 0.0 {
                self.fail(message, "Value must be positive");
            }
        }
        self
    }

    /// Fails when the value is zero or above.
    pub fn negative(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value >= 0.0 {
                self.fail(message, "Value must be negative");
            }
        }
        self
    }

    /// Fails when the value falls outside `[min, max]` (inclusive).
    pub fn range(mut self, min: f64, max: f64, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value < min || value > max {
                self.fail(message, format!("Value must be between {min} and {max}"));
            }
        }
        self
    }

    /// Fails when the value is below `min` (inclusive bound).
    pub fn min(mut self, min: f64, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value < min {
                self.fail(message, format!("Value must be at least {min}"));
            }
        }
        self
    }

    /// Fails when the value is above `max` (inclusive bound).
    pub fn max(mut self, max: f64, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value > max {
                self.fail(message, format!("Value must be at most {max}"));
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
        assert!(number(25.0).required(None).validate().is_none());
        // Zero is a present value.
        assert!(number(0.0).required(None).validate().is_none());
        assert!(number(f64::NAN).required(None).validate().is_none());
        assert_eq!(
            number(None).required(Some("X")).validate(),
            Some("X".to_string())
        );
    }

    #[test]
    fn test_checks_skip_absent_values() {
        let result = number(None)
            .integer(None)
            .decimal(None)
            .positive(None)
            .range(0.0, 10.0, None)
            .validate();
        assert!(result.is_none());
    }

    #[test]
    fn test_integer() {
        assert!(number(42.0).integer(None).validate().is_none());
        assert!(number(-3.0).integer(None).validate().is_none());
        assert!(number(3.5).integer(None).validate().is_some());
        assert!(number(f64::NAN).integer(None).validate().is_some());
    }

    #[test]
    fn test_decimal() {
        assert!(number(3.5).decimal(None).validate().is_none());
        assert!(number(42.0).decimal(None).validate().is_some());
        assert!(number(f64::NAN).decimal(None).validate().is_some());
        assert!(number(f64::INFINITY).decimal(None).validate().is_some());
    }

    #[test]
    fn test_sign_checks() {
        assert!(number(1.0).positive(None).validate().is_none());
        assert!(number(0.0).positive(None).validate().is_none());
        assert!(number(-1.0).positive(None).validate().is_some());

        assert!(number(-1.0).negative(None).validate().is_none());
        assert!(number(0.0).negative(None).validate().is_some());
        assert!(number(1.0).negative(None).validate().is_some());
    }

    #[test]
    fn test_range_inclusive() {
        assert!(number(0.0).range(0.0, 10.0, None).validate().is_none());
        assert!(number(10.0).range(0.0, 10.0, None).validate().is_none());
        assert!(number(10.1).range(0.0, 10.0, None).validate().is_some());
        assert!(number(-0.1).range(0.0, 10.0, None).validate().is_some());
    }

    #[test]
    fn test_min_max() {
        assert!(number(5.0).min(5.0, None).validate().is_none());
        assert!(number(4.9).min(5.0, None).validate().is_some());
        assert!(number(5.0).max(5.0, None).validate().is_none());
        assert!(number(5.1).max(5.0, None).validate().is_some());
    }

    #[test]
    fn test_last_failure_wins() {
        let result = number(-3.5)
            .integer(Some("not integer"))
            .positive(Some("not positive"))
            .validate();
        assert_eq!(result, Some("not positive".to_string()));
    }
}
