#![deny(missing_docs)]

//! # Field Schemas
//!
//! The single capability every field validator implements, plus the composed
//! object shape assembled from an endpoint's declared fields.
//!
//! - **primitives**: Builders that compile to JSON Schema fragments, plus the
//!   absence wrappers and caller supplied checks.
//! - **json_schema**: A validator backed by a JSON Schema fragment.

pub mod json_schema;
pub mod primitives;

pub use json_schema::JsonSchemaField;
pub use primitives::{
    AnyField, ArrayField, BooleanField, CustomField, Defaulted, LiteralField, Nullable,
    NumberField, OneOfField, Optional, StringField,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A failure reported by a field validator.
///
/// `path` locates the offending value relative to the object being validated,
/// outermost segment first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Segments leading to the rejected value (field names or array indices).
    pub path: Vec<String>,
    /// Human readable reason.
    pub message: String,
}

impl FieldError {
    /// Creates an error located at the current value.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            path: Vec::new(),
            message: message.into(),
        }
    }

    /// The error reported for a declared field that is absent from the input.
    pub fn required() -> Self {
        Self::new("Required")
    }

    /// Reports a value of the wrong JSON type.
    pub fn type_mismatch(expected: &str, received: &Value) -> Self {
        Self::new(format!(
            "Expected {}, received {}",
            expected,
            json_type_name(received)
        ))
    }

    /// Prefixes the path with an enclosing segment.
    pub fn at(mut self, segment: impl Into<String>) -> Self {
        self.path.insert(0, segment.into());
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

impl std::error::Error for FieldError {}

/// The validation capability shared by every field type.
///
/// Callers never branch on the concrete kind; composed shapes only invoke
/// these two methods.
pub trait FieldSchema: fmt::Debug + Send + Sync {
    /// Validates (and possibly coerces) a present value.
    fn validate(&self, value: &Value) -> Result<Value, FieldError>;

    /// Decides what an absent field resolves to.
    ///
    /// `Ok(None)` omits the key from the output, `Ok(Some(v))` fills it in.
    /// The default rejects the absence.
    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        Err(FieldError::required())
    }
}

/// Shared handle to a field validator.
pub type FieldRef = Arc<dyn FieldSchema>;

/// Declared fields in declaration order.
pub type FieldMap = IndexMap<String, FieldRef>;

/// Combinators available on every field validator.
pub trait FieldSchemaExt: FieldSchema + Sized {
    /// Accepts an absent field (the key is omitted from the output).
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }

    /// Accepts an explicit `null` in addition to the inner type.
    fn nullable(self) -> Nullable<Self> {
        Nullable::new(self)
    }

    /// Substitutes `value` when the field is absent.
    fn default_value(self, value: impl Into<Value>) -> Defaulted<Self> {
        Defaulted::new(self, value.into())
    }

    /// Erases the concrete type.
    fn into_ref(self) -> FieldRef
    where
        Self: 'static,
    {
        Arc::new(self)
    }
}

impl<T: FieldSchema + Sized> FieldSchemaExt for T {}

/// How a composed object treats keys that were not declared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeys {
    /// Reject the whole object.
    #[default]
    Strict,
    /// Drop undeclared keys from the output.
    Strip,
    /// Copy undeclared keys into the output unchanged.
    Passthrough,
}

/// Validates `value` as an object whose keys are exactly `fields`.
///
/// Fields are checked in declaration order and the first failure wins.
/// Undeclared keys are handled after every declared field passed.
pub fn validate_object(
    fields: &FieldMap,
    unknown_keys: UnknownKeys,
    value: &Value,
) -> Result<Value, FieldError> {
    let Value::Object(input) = value else {
        return Err(FieldError::type_mismatch("object", value));
    };

    let mut output = Map::new();
    for (name, field) in fields {
        let resolved = match input.get(name) {
            Some(present) => Some(field.validate(present).map_err(|e| e.at(name.as_str()))?),
            None => field.validate_missing().map_err(|e| e.at(name.as_str()))?,
        };
        if let Some(v) = resolved {
            output.insert(name.clone(), v);
        }
    }

    let unknown: Vec<&String> = input.keys().filter(|k| !fields.contains_key(*k)).collect();
    if !unknown.is_empty() {
        match unknown_keys {
            UnknownKeys::Strict => {
                let listed = unknown
                    .iter()
                    .map(|k| format!("'{}'", k))
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(FieldError::new(format!(
                    "Unrecognized key(s) in object: {}",
                    listed
                )));
            }
            UnknownKeys::Strip => {}
            UnknownKeys::Passthrough => {
                for key in unknown {
                    output.insert(key.clone(), input[key.as_str()].clone());
                }
            }
        }
    }

    Ok(Value::Object(output))
}

/// A nested object field composed from its own declared fields.
#[derive(Debug, Clone)]
pub struct ObjectShape {
    fields: FieldMap,
    unknown_keys: UnknownKeys,
}

impl ObjectShape {
    /// Creates a strict object shape.
    pub fn new(fields: FieldMap) -> Self {
        Self {
            fields,
            unknown_keys: UnknownKeys::Strict,
        }
    }

    /// Overrides the undeclared-key policy.
    pub fn unknown_keys(mut self, policy: UnknownKeys) -> Self {
        self.unknown_keys = policy;
        self
    }

    /// The declared fields.
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

impl FieldSchema for ObjectShape {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        validate_object(&self.fields, self.unknown_keys, value)
    }
}

/// Short JSON type name used in mismatch messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Builds a [`StringField`].
pub fn string() -> StringField {
    StringField::default()
}

/// Builds a [`NumberField`] accepting any JSON number.
pub fn number() -> NumberField {
    NumberField::default()
}

/// Builds a [`NumberField`] restricted to whole numbers.
pub fn integer() -> NumberField {
    NumberField::default().int()
}

/// Builds a [`BooleanField`].
pub fn boolean() -> BooleanField {
    BooleanField::default()
}

/// Builds an [`AnyField`].
pub fn any() -> AnyField {
    AnyField
}

/// Builds a [`LiteralField`] accepting exactly `value`.
pub fn literal(value: impl Into<Value>) -> LiteralField {
    LiteralField::new(value.into())
}

/// Builds a [`OneOfField`] accepting one of the given strings.
pub fn one_of<I, S>(options: I) -> OneOfField
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    OneOfField::new(options.into_iter().map(Into::into).collect())
}

/// Builds an [`ArrayField`] validating every element with `items`.
pub fn array(items: impl FieldSchema + 'static) -> ArrayField {
    ArrayField::new(Arc::new(items))
}

/// Builds a strict nested [`ObjectShape`].
pub fn object<I, K>(fields: I) -> ObjectShape
where
    I: IntoIterator<Item = (K, FieldRef)>,
    K: Into<String>,
{
    ObjectShape::new(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
}

/// Builds a [`CustomField`] from a closure.
pub fn custom<F>(name: impl Into<String>, check: F) -> CustomField
where
    F: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
{
    CustomField::new(name, check)
}
