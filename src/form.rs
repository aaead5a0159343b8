//! Form state orchestration over per-field validator functions
//!
//! A [`Form`] owns a working copy of the caller's data plus observable
//! error/validity/loading cells, and runs registered validators against
//! current field values. Validators are free functions receiving the field
//! value and the whole form, returning a failing message or `None`; they are
//! typically built from the chains in [`crate::validators`] but any closure
//! with the right shape works.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{fault_message, BoxError, Errors};
use crate::reactive::Signal;

/// Form data record: field name to JSON value.
pub type FormData = Map<String, Value>;

/// Synchronous field validator: `(value, whole form) -> failing message`.
pub type Validator = Arc<dyn Fn(&Value, &FormData) -> Option<String> + Send + Sync>;

/// Future returned by an async field validator. An `Err` marks a fault in
/// the validator itself and is reported as a synthetic failure.
pub type AsyncValidatorFuture =
    Pin<Box<dyn Future<Output = Result<Option<String>, BoxError>> + Send>>;

/// Asynchronous field validator.
pub type AsyncValidator = Arc<dyn Fn(Value, FormData) -> AsyncValidatorFuture + Send + Sync>;

/// Wrap a closure as a [`Validator`].
pub fn validator<F>(f: F) -> Validator
where
    F: Fn(&Value, &FormData) -> Option<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Wrap an async closure as an [`AsyncValidator`].
pub fn async_validator<F, Fut>(f: F) -> AsyncValidator
where
    F: Fn(Value, FormData) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Option<String>, BoxError>> + Send + 'static,
{
    Arc::new(move |value, form| Box::pin(f(value, form)))
}

/// Field-to-validator registry preserving registration order.
///
/// Validation passes run validators in the order fields were registered.
/// Registering a field twice replaces its validator.
#[derive(Clone)]
pub struct FieldValidators<V> {
    entries: Vec<(String, V)>,
}

/// Registry of synchronous validators.
pub type Validations = FieldValidators<Validator>;

/// Registry of asynchronous validators.
pub type AsyncValidations = FieldValidators<AsyncValidator>;

impl<V> FieldValidators<V> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a validator for a field.
    pub fn field(mut self, name: impl Into<String>, validator: V) -> Self {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = validator;
        } else {
            self.entries.push((name, validator));
        }
        self
    }

    /// Look up the validator registered for a field.
    pub fn get(&self, field: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over `(field, validator)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, v)| (name.as_str(), v))
    }
}

impl<V> Default for FieldValidators<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> std::fmt::Debug for FieldValidators<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldValidators")
            .field("fields", &self.entries.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}

/// Options for [`use_form`].
pub struct FormOptions {
    data: FormData,
    validations: Validations,
    async_validations: AsyncValidations,
}

impl FormOptions {
    /// Start options from the initial form data.
    pub fn new(data: FormData) -> Self {
        Self {
            data,
            validations: Validations::new(),
            async_validations: AsyncValidations::new(),
        }
    }

    /// Register the synchronous validator mapping.
    pub fn validations(mut self, validations: Validations) -> Self {
        self.validations = validations;
        self
    }

    /// Register the asynchronous validator mapping.
    pub fn async_validations(mut self, async_validations: AsyncValidations) -> Self {
        self.async_validations = async_validations;
        self
    }
}

/// Create a [`Form`] from options.
pub fn use_form(options: FormOptions) -> Form {
    let FormOptions {
        data,
        validations,
        async_validations,
    } = options;

    debug!(
        fields = data.len(),
        sync_validators = validations.len(),
        async_validators = async_validations.len(),
        "form created"
    );

    Form {
        form_data: Signal::new(data.clone()),
        errors: Signal::new(Errors::new()),
        valid: Signal::new(true),
        loading: Signal::new(false),
        initial: data,
        validations,
        async_validations,
    }
}

/// Reactive form state plus its validation operations.
pub struct Form {
    initial: FormData,
    /// Working copy of the form data, seeded from the initial data.
    pub form_data: Signal<FormData>,
    /// Sparse map of currently failing fields.
    pub errors: Signal<Errors>,
    /// Result of the most recent full validation pass.
    pub valid: Signal<bool>,
    /// True only while an async full-form pass is in flight.
    pub loading: Signal<bool>,
    validations: Validations,
    async_validations: AsyncValidations,
}

impl Form {
    /// Restore the form to its initial data, clear all errors, and reset
    /// `valid` to true and `loading` to false.
    pub fn reset_form(&self) {
        self.form_data.set(self.initial.clone());
        self.errors.set(Errors::new());
        self.valid.set(true);
        self.loading.set(false);
        debug!("form reset");
    }

    /// Run every registered synchronous validator in registration order.
    ///
    /// The error map is wholly replaced by this pass's failures, so fields
    /// that newly pass lose their stale entries. Returns whether the form is
    /// valid. With no registered validators this returns true without
    /// touching any state.
    pub fn validate_form(&self) -> bool {
        if self.validations.is_empty() {
            return true;
        }

        let snapshot = self.form_data.get();
        let mut failures = Errors::new();
        let null = Value::Null;

        for (field, validator) in self.validations.iter() {
            let value = snapshot.get(field).unwrap_or(&null);
            if let Some(message) = validator(value, &snapshot) {
                failures.insert(field, message);
            }
        }

        let is_valid = failures.is_empty();
        debug!(failing = failures.len(), "sync full-form pass complete");
        self.errors.set(failures);
        self.valid.set(is_valid);
        is_valid
    }

    /// Run every registered asynchronous validator concurrently and wait for
    /// all of them to settle.
    ///
    /// Each validator writes into its own result slot; slots are merged into
    /// the error map only after the join, replacing the previous map. A
    /// validator returning `Err` is reported as a synthetic failure naming
    /// the field, never as a failure of the pass itself. `loading` is true
    /// for the duration of the pass.
    pub async fn validate_form_async(&self) -> bool {
        if self.async_validations.is_empty() {
            return true;
        }

        self.loading.set(true);
        let snapshot = self.form_data.get();

        let tasks = self.async_validations.iter().map(|(field, validator)| {
            let value = snapshot.get(field).cloned().unwrap_or(Value::Null);
            let future = validator(value, snapshot.clone());
            let field = field.to_string();
            async move { (field, future.await) }
        });
        let results = join_all(tasks).await;

        let mut failures = Errors::new();
        for (field, result) in results {
            match result {
                Ok(Some(message)) => failures.insert(&field, message),
                Ok(None) => {}
                Err(error) => {
                    warn!(field = %field, %error, "async validator faulted");
                    failures.insert(&field, fault_message(&field));
                }
            }
        }

        let is_valid = failures.is_empty();
        debug!(failing = failures.len(), "async full-form pass complete");
        self.errors.set(failures);
        self.valid.set(is_valid);
        self.loading.set(false);
        is_valid
    }

    /// Validate a single field with its synchronous validator.
    ///
    /// On failure the field's error entry is set and `valid` forced false;
    /// on success only that field's entry is removed, other entries and
    /// `valid` stay untouched. Fields without a registered validator pass
    /// trivially with no side effects.
    pub fn validate_input(&self, field: &str) -> bool {
        if self.validations.is_empty() {
            return true;
        }
        let Some(validator) = self.validations.get(field) else {
            return true;
        };

        let snapshot = self.form_data.get();
        let null = Value::Null;
        let value = snapshot.get(field).unwrap_or(&null);

        match validator(value, &snapshot) {
            Some(message) => {
                self.errors.update(|errors| errors.insert(field, message));
                self.valid.set(false);
                false
            }
            None => {
                self.errors.update(|errors| {
                    errors.remove(field);
                });
                true
            }
        }
    }

    /// Validate a single field with its asynchronous validator.
    ///
    /// Mirrors [`validate_input`](Form::validate_input); a validator `Err`
    /// becomes the synthetic failure for the field. Does not touch
    /// `loading`.
    pub async fn validate_input_async(&self, field: &str) -> bool {
        if self.async_validations.is_empty() {
            return true;
        }
        let Some(validator) = self.async_validations.get(field) else {
            return true;
        };

        let snapshot = self.form_data.get();
        let value = snapshot.get(field).cloned().unwrap_or(Value::Null);

        let outcome = match validator(value, snapshot).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(field = %field, %error, "async validator faulted");
                Some(fault_message(field))
            }
        };

        match outcome {
            Some(message) => {
                self.errors.update(|errors| errors.insert(field, message));
                self.valid.set(false);
                false
            }
            None => {
                self.errors.update(|errors| {
                    errors.remove(field);
                });
                true
            }
        }
    }
}
