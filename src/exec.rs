//! Stateless batch validation entry points
//!
//! These run a validator mapping against an arbitrary data record without
//! any reactive form state: the record goes in, an [`Outcome`] comes out
//! with the same record untouched.

use futures_util::future::join_all;
use serde_json::Value;
use tracing::warn;

use crate::error::{fault_message, Errors};
use crate::form::{AsyncValidations, FormData, Validations};

/// Result of a batch validation run.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Exactly the failing fields.
    pub errors: Errors,
    /// Whether no field failed.
    pub valid: bool,
    /// The input record, passed through unchanged.
    pub data: FormData,
}

/// Run every registered validator sequentially, in registration order.
///
/// Fields absent from `data` validate as JSON null; the returned record is
/// never padded with missing keys. An empty registry short-circuits to a
/// valid outcome.
pub fn exec_validators(data: FormData, validations: &Validations) -> Outcome {
    if validations.is_empty() {
        return Outcome {
            errors: Errors::new(),
            valid: true,
            data,
        };
    }

    let mut errors = Errors::new();
    let null = Value::Null;

    for (field, validator) in validations.iter() {
        let value = data.get(field).unwrap_or(&null);
        if let Some(message) = validator(value, &data) {
            errors.insert(field, message);
        }
    }

    let valid = errors.is_empty();
    Outcome {
        errors,
        valid,
        data,
    }
}

/// Run every registered async validator concurrently and wait for all of
/// them to settle.
///
/// A validator `Err` is converted into the synthetic failure naming the
/// field; the returned future itself never fails.
pub async fn exec_async_validators(data: FormData, async_validations: &AsyncValidations) -> Outcome {
    if async_validations.is_empty() {
        return Outcome {
            errors: Errors::new(),
            valid: true,
            data,
        };
    }

    let tasks = async_validations.iter().map(|(field, validator)| {
        let value = data.get(field).cloned().unwrap_or(Value::Null);
        let future = validator(value, data.clone());
        let field = field.to_string();
        async move { (field, future.await) }
    });
    let results = join_all(tasks).await;

    let mut errors = Errors::new();
    for (field, result) in results {
        match result {
            Ok(Some(message)) => errors.insert(&field, message),
            Ok(None) => {}
            Err(error) => {
                warn!(field = %field, %error, "async validator faulted");
                errors.insert(&field, fault_message(&field));
            }
        }
    }

    let valid = errors.is_empty();
    Outcome {
        errors,
        valid,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{async_validator, validator};
    use crate::validators::{boolean, number, string};
    use serde_json::json;

    fn record(value: serde_json::Value) -> FormData {
        value.as_object().expect("object fixture").clone()
    }

    fn fixtures() -> Validations {
        Validations::new()
            .field(
                "name",
                validator(|v: &Value, _: &FormData| {
                    string(v.as_str()).required(Some("X")).validate()
                }),
            )
            .field(
                "last_name",
                validator(|v: &Value, _: &FormData| {
                    string(v.as_str()).required(Some("X")).validate()
                }),
            )
            .field(
                "age",
                validator(|v: &Value, _: &FormData| {
                    number(v.as_f64()).required(Some("X")).validate()
                }),
            )
            .field(
                "sex",
                validator(|v: &Value, _: &FormData| {
                    boolean(v.as_bool()).required(Some("X")).validate()
                }),
            )
    }

    #[test]
    fn test_valid_record() {
        let validations = Validations::new().field(
            "name",
            validator(|v: &Value, _: &FormData| string(v.as_str()).required(None).validate()),
        );
        let input = record(json!({"name": "John"}));

        let outcome = exec_validators(input.clone(), &validations);
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.data, input);
    }

    #[test]
    fn test_invalid_record_reports_only_failing_fields() {
        let input = record(json!({"name": "John", "age": 25}));

        let outcome = exec_validators(input.clone(), &fixtures());
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors.get("last_name"), Some("X"));
        assert_eq!(outcome.errors.get("sex"), Some("X"));
        // The record is returned as given, not padded with missing keys.
        assert_eq!(outcome.data, input);
    }

    #[test]
    fn test_empty_registry_short_circuits() {
        let input = record(json!({"anything": 1}));
        let outcome = exec_validators(input.clone(), &Validations::new());
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.data, input);
    }

    #[tokio::test]
    async fn test_async_valid_record() {
        let validations = AsyncValidations::new().field(
            "name",
            async_validator(|v: Value, _: FormData| async move {
                Ok(string(v.as_str()).required(Some("X")).validate())
            }),
        );
        let input = record(json!({"name": "John"}));

        let outcome = exec_async_validators(input.clone(), &validations).await;
        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.data, input);
    }

    #[tokio::test]
    async fn test_async_invalid_record() {
        let validations = AsyncValidations::new()
            .field(
                "name",
                async_validator(|v: Value, _: FormData| async move {
                    Ok(string(v.as_str()).required(Some("X")).validate())
                }),
            )
            .field(
                "last_name",
                async_validator(|v: Value, _: FormData| async move {
                    Ok(string(v.as_str()).required(Some("X")).validate())
                }),
            );
        let input = record(json!({"name": "John"}));

        let outcome = exec_async_validators(input, &validations).await;
        assert!(!outcome.valid);
        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors.get("last_name"), Some("X"));
    }

    #[tokio::test]
    async fn test_async_fault_does_not_fail_the_run() {
        let validations = AsyncValidations::new()
            .field(
                "name",
                async_validator(|_: Value, _: FormData| async move {
                    Err("lookup service down".into())
                }),
            )
            .field(
                "age",
                async_validator(|v: Value, _: FormData| async move {
                    Ok(number(v.as_f64()).required(None).validate())
                }),
            );
        let input = record(json!({"name": "John", "age": 25}));

        let outcome = exec_async_validators(input, &validations).await;
        assert!(!outcome.valid);
        // The fault surfaces as a per-field message shaped like any other.
        let message = outcome.errors.get("name").unwrap();
        assert!(message.contains("[name]"));
        assert!(!outcome.errors.contains("age"));
    }
}
