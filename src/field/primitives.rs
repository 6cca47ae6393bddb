#![deny(missing_docs)]

//! # Built-in Field Validators
//!
//! The primitive builders (`string`, `number`, `boolean`, ...) assemble a JSON
//! Schema fragment and validate through [`JsonSchemaField`]. Only what JSON
//! Schema cannot say is written by hand: absence and `null` wrappers, and
//! caller supplied checks.

use crate::error::{AppError, AppResult};
use crate::field::{FieldError, FieldRef, FieldSchema, JsonSchemaField};
use serde_json::{json, Value};
use std::fmt;
use std::sync::Arc;

/// Forwards [`FieldSchema`] to the wrapped [`JsonSchemaField`].
macro_rules! backed_by_json_schema {
    ($($ty:ident),+ $(,)?) => {$(
        impl FieldSchema for $ty {
            fn validate(&self, value: &Value) -> Result<Value, FieldError> {
                self.0.validate(value)
            }

            fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
                self.0.validate_missing()
            }
        }

        impl $ty {
            /// The JSON Schema fragment this field checks against.
            pub fn json_schema(&self) -> &Value {
                self.0.raw()
            }
        }
    )+};
}

/// Accepts JSON strings, with optional length, pattern and email checks.
#[derive(Debug, Clone)]
pub struct StringField(JsonSchemaField);

impl Default for StringField {
    fn default() -> Self {
        Self(JsonSchemaField::deferred(json!({"type": "string"})))
    }
}

impl StringField {
    /// Requires at least `n` characters.
    pub fn min_len(self, n: usize) -> Self {
        Self(self.0.keyword("minLength", n))
    }

    /// Allows at most `n` characters.
    pub fn max_len(self, n: usize) -> Self {
        Self(self.0.keyword("maxLength", n))
    }

    /// Requires the value to match `pattern` (ECMA 262 syntax, unanchored).
    pub fn pattern(self, pattern: &str) -> AppResult<Self> {
        let field = self.0.keyword("pattern", pattern);
        field
            .ensure_compiled()
            .map_err(|e| AppError::General(format!("Invalid pattern '{}': {}", pattern, e)))?;
        Ok(Self(field))
    }

    /// Requires an email-shaped value (`format: email`).
    pub fn email(self) -> Self {
        Self(self.0.keyword("format", "email"))
    }
}

/// Accepts JSON numbers, optionally bounded or restricted to integers.
#[derive(Debug, Clone)]
pub struct NumberField(JsonSchemaField);

impl Default for NumberField {
    fn default() -> Self {
        Self(JsonSchemaField::deferred(json!({"type": "number"})))
    }
}

impl NumberField {
    /// Inclusive lower bound.
    pub fn min(self, min: f64) -> Self {
        Self(self.0.keyword("minimum", min))
    }

    /// Inclusive upper bound.
    pub fn max(self, max: f64) -> Self {
        Self(self.0.keyword("maximum", max))
    }

    /// Rejects values with a fractional part.
    pub fn int(self) -> Self {
        Self(self.0.keyword("type", "integer"))
    }
}

/// Accepts JSON booleans.
#[derive(Debug, Clone)]
pub struct BooleanField(JsonSchemaField);

impl Default for BooleanField {
    fn default() -> Self {
        Self(JsonSchemaField::deferred(json!({"type": "boolean"})))
    }
}

/// Accepts exactly one JSON value.
#[derive(Debug, Clone)]
pub struct LiteralField(JsonSchemaField);

impl LiteralField {
    /// Creates a literal check.
    pub fn new(expected: Value) -> Self {
        Self(JsonSchemaField::deferred(json!({"const": expected})))
    }
}

/// Accepts one of a fixed set of strings.
#[derive(Debug, Clone)]
pub struct OneOfField(JsonSchemaField);

impl OneOfField {
    /// Creates an enumeration check.
    pub fn new(options: Vec<String>) -> Self {
        Self(JsonSchemaField::deferred(
            json!({"type": "string", "enum": options}),
        ))
    }
}

backed_by_json_schema!(StringField, NumberField, BooleanField, LiteralField, OneOfField);

/// Accepts anything, including absence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyField;

impl FieldSchema for AnyField {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        Ok(value.clone())
    }

    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        Ok(None)
    }
}

/// Accepts arrays whose elements all pass `items`.
///
/// The container bounds are a JSON Schema fragment; each element then goes
/// through `items`, so element errors carry the index in their path.
#[derive(Debug, Clone)]
pub struct ArrayField {
    container: JsonSchemaField,
    items: FieldRef,
}

impl ArrayField {
    /// Creates an array check.
    pub fn new(items: FieldRef) -> Self {
        Self {
            container: JsonSchemaField::deferred(json!({"type": "array"})),
            items,
        }
    }

    /// Requires at least `n` elements.
    pub fn min_items(mut self, n: usize) -> Self {
        self.container = self.container.keyword("minItems", n);
        self
    }

    /// Allows at most `n` elements.
    pub fn max_items(mut self, n: usize) -> Self {
        self.container = self.container.keyword("maxItems", n);
        self
    }
}

impl FieldSchema for ArrayField {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        self.container.validate(value)?;
        let elements = value.as_array().map(Vec::as_slice).unwrap_or_default();
        let validated = elements
            .iter()
            .enumerate()
            .map(|(i, el)| self.items.validate(el).map_err(|e| e.at(i.to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Value::Array(validated))
    }
}

/// Makes the inner field absent-tolerant.
#[derive(Debug, Clone)]
pub struct Optional<F> {
    inner: F,
}

impl<F> Optional<F> {
    /// Wraps `inner`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FieldSchema> FieldSchema for Optional<F> {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        self.inner.validate(value)
    }

    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        Ok(None)
    }
}

/// Lets the inner field accept `null`.
#[derive(Debug, Clone)]
pub struct Nullable<F> {
    inner: F,
}

impl<F> Nullable<F> {
    /// Wraps `inner`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: FieldSchema> FieldSchema for Nullable<F> {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        if value.is_null() {
            return Ok(Value::Null);
        }
        self.inner.validate(value)
    }

    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        self.inner.validate_missing()
    }
}

/// Fills in a default when the field is absent.
#[derive(Debug, Clone)]
pub struct Defaulted<F> {
    inner: F,
    default: Value,
}

impl<F> Defaulted<F> {
    /// Wraps `inner` with a fallback value.
    pub fn new(inner: F, default: Value) -> Self {
        Self { inner, default }
    }
}

impl<F: FieldSchema> FieldSchema for Defaulted<F> {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        self.inner.validate(value)
    }

    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        Ok(Some(self.default.clone()))
    }
}

type CheckFn = dyn Fn(&Value) -> Result<Value, String> + Send + Sync;

/// A caller supplied check.
#[derive(Clone)]
pub struct CustomField {
    name: String,
    check: Arc<CheckFn>,
}

impl CustomField {
    /// Creates a named custom check.
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for CustomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomField({:?})", self.name)
    }
}

impl FieldSchema for CustomField {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        (self.check)(value).map_err(FieldError::new)
    }
}
