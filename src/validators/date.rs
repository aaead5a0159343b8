//! Fluent date validator chain
//!
//! Construction coerces its input: chrono dates are taken as-is and strings
//! are parsed (RFC 3339, `%Y-%m-%d %H:%M:%S`, or `%Y-%m-%d`). A string that
//! fails to parse yields a chain in a distinct *invalid* state: it still
//! passes [`required`](DateValidator::required), fails
//! [`is_valid`](DateValidator::is_valid), and is skipped by the value checks.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DateValue {
    Missing,
    Invalid,
    Valid(NaiveDateTime),
}

/// Inputs accepted by [`date`].
pub trait IntoDateValue {
    fn into_date_value(self) -> DateValue;
}

impl IntoDateValue for NaiveDateTime {
    fn into_date_value(self) -> DateValue {
        DateValue::Valid(self)
    }
}

impl IntoDateValue for NaiveDate {
    fn into_date_value(self) -> DateValue {
        DateValue::Valid(self.and_hms_opt(0, 0, 0).unwrap_or_default())
    }
}

impl IntoDateValue for &str {
    fn into_date_value(self) -> DateValue {
        parse_date(self).map_or(DateValue::Invalid, DateValue::Valid)
    }
}

impl<T: IntoDateValue> IntoDateValue for Option<T> {
    fn into_date_value(self) -> DateValue {
        self.map_or(DateValue::Missing, IntoDateValue::into_date_value)
    }
}

fn parse_date(input: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Start a date validation chain from a chrono value, a string, or `None`.
pub fn date(value: impl IntoDateValue) -> DateValidator {
    DateValidator {
        value: value.into_date_value(),
        message: None,
    }
}

/// Chainable validator over a single optional date.
#[derive(Debug, Clone)]
pub struct DateValidator {
    value: DateValue,
    message: Option<String>,
}

impl DateValidator {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    fn valid(&self) -> Option<NaiveDateTime> {
        match self.value {
            DateValue::Valid(dt) => Some(dt),
            _ => None,
        }
    }

    fn fail(&mut self, custom: Option<&str>, default: impl Into<String>) {
        self.message = Some(custom.map_or_else(|| default.into(), str::to_owned));
    }

    /// Fails when the value is absent. An unparseable input is present,
    /// catch it with [`is_valid`](DateValidator::is_valid).
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.value == DateValue::Missing {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails when construction could not parse the input as a date.
    pub fn is_valid(mut self, message: Option<&str>) -> Self {
        if self.value == DateValue::Invalid {
            self.fail(message, "Invalid date");
        }
        self
    }

    /// Fails unless the date falls in a Gregorian leap year.
    pub fn leap_year(mut self, message: Option<&str>) -> Self {
        if let Some(dt) = self.valid() {
            let year = dt.year();
            if !((year % 4 == 0 && year % 100 != 0) || year % 400 == 0) {
                self.fail(message, "Date must be leap year");
            }
        }
        self
    }

    /// Fails unless the date is strictly after `compare_date`.
    pub fn greater_than(mut self, compare_date: NaiveDateTime, message: Option<&str>) -> Self {
        if let Some(dt) = self.valid() {
            if dt <= compare_date {
                self.fail(message, format!("Date must be greater than {compare_date}"));
            }
        }
        self
    }

    /// Fails unless the date is strictly before `compare_date`.
    pub fn less_than(mut self, compare_date: NaiveDateTime, message: Option<&str>) -> Self {
        if let Some(dt) = self.valid() {
            if dt >= compare_date {
                self.fail(message, format!("Date must be less than {compare_date}"));
            }
        }
        self
    }

    /// Fails when the date falls outside `[start, end]` (inclusive).
    pub fn range(mut self, start: NaiveDateTime, end: NaiveDateTime, message: Option<&str>) -> Self {
        if let Some(dt) = self.valid() {
            if dt < start || dt > end {
                self.fail(message, format!("Date must be between {start} and {end}"));
            }
        }
        self
    }
}
