//! Fluent JSON object validator chain

use serde_json::{Map, Value};

/// Start an object validation chain over a JSON object.
pub fn object<'a>(value: impl Into<Option<&'a Map<String, Value>>>) -> ObjectValidator<'a> {
    ObjectValidator {
        value: value.into(),
        message: None,
    }
}

/// Chainable validator over a single optional JSON object.
#[derive(Debug, Clone)]
pub struct ObjectValidator<'a> {
    value: Option<&'a Map<String, Value>>,
    message: Option<String>,
}

impl<'a> ObjectValidator<'a> {
    /// The recorded failing message, if any check failed.
    pub fn validate(&self) -> Option<String> {
        self.message.clone()
    }

    fn fail(&mut self, custom: Option<&str>, default: impl Into<String>) {
        self.message = Some(custom.map_or_else(|| default.into(), str::to_owned));
    }

    /// Fails when the value is absent. An empty object passes.
    pub fn required(mut self, message: Option<&str>) -> Self {
        if self.value.is_none() {
            self.fail(message, "Required field");
        }
        self
    }

    /// Fails when the object has no keys.
    pub fn not_empty(mut self, message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value.is_empty() {
                self.fail(message, "Object must not be empty");
            }
        }
        self
    }

    /// Fails unless every listed property is present and truthy. Dotted
    /// paths (`"a.b.c"`) traverse nested objects level by level.
    pub fn has_required_properties(mut self, required: &[&str], message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if !have_properties(value, required) {
                self.fail(
                    message,
                    format!("Object must contain {}", required.join(",")),
                );
            }
        }
        self
    }

    /// Fails when any top-level key falls outside `allowed`. Nested objects
    /// are not inspected.
    pub fn has_only_allowed_properties(mut self, allowed: &[&str], message: Option<&str>) -> Self {
        if let Some(value) = self.value {
            if value.keys().any(|key| !allowed.contains(&key.as_str())) {
                self.fail(
                    message,
                    format!("Object only can contain {}", allowed.join(",")),
                );
            }
        }
        self
    }
}

/// JSON truthiness: `null`, `false`, `0`, and `""` count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn have_properties(object: &Map<String, Value>, properties: &[&str]) -> bool {
    properties.iter().all(|property| {
        match property.split_once('.') {
            Some((head, rest)) => match object.get(head).filter(|v| is_truthy(v)) {
                Some(Value::Object(nested)) => have_properties(nested, &[rest]),
                _ => false,
            },
            None => object.get(*property).is_some_and(is_truthy),
        }
    })
}
