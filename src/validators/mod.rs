//! Fluent validator chains, one per data kind
//!
//! Each chain wraps a single optional value. Checks are chainable, never
//! short-circuit, and each failing check overwrites the recorded message, so
//! the last failure wins. Every check except `required` skips absent values;
//! compose `required()` with shape checks when presence matters.

pub mod array;
pub mod boolean;
pub mod date;
pub mod number;
pub mod object;
pub mod string;

pub use array::{array, ArrayValidator};
pub use boolean::{boolean, BooleanValidator};
pub use date::{date, DateValidator};
pub use number::{number, NumberValidator};
pub use object::{object, ObjectValidator};
pub use string::{string, StringValidator};
