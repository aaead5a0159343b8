//! # formguard
//!
//! Fluent value validators and form state orchestration.
//!
//! Two independent pieces:
//!
//! - **Validator chains** ([`validators`]): one fluent chain per data kind
//!   (string, number, boolean, date, array, object). Build a chain from a
//!   value, stack checks, read the failing message with `validate()`:
//!
//!   ```
//!   use formguard::string;
//!
//!   let error = string("john@example").required(None).email(None).validate();
//!   assert_eq!(error, Some("Invalid email".to_string()));
//!   ```
//!
//! - **Form orchestration** ([`form`], [`exec`]): wire per-field validator
//!   functions to a reactive form record with sync and async full-form and
//!   per-field passes, or run a validator mapping statelessly over any
//!   record with [`exec_validators`]/[`exec_async_validators`].

pub mod error;
pub mod exec;
pub mod form;
pub mod reactive;
pub mod validators;

// Re-exports for easy access
pub use error::{BoxError, Errors};
pub use exec::{exec_async_validators, exec_validators, Outcome};
pub use form::{
    async_validator, use_form, validator, AsyncValidations, AsyncValidator, FieldValidators, Form,
    FormData, FormOptions, Validations, Validator,
};
pub use reactive::Signal;

// Validator chain factories
pub use validators::{
    array::{array, ArrayValidator},
    boolean::{boolean, BooleanValidator},
    date::{date, DateValidator},
    number::{number, NumberValidator},
    object::{object, ObjectValidator},
    string::{string, StringValidator},
};
