#![deny(missing_docs)]

//! # JSON Schema Fields
//!
//! Fields described by a JSON Schema fragment, checked by the `jsonschema`
//! crate. The built-in builders in [`crate::field::primitives`] all produce one
//! of these.

use crate::error::{AppError, AppResult};
use crate::field::{FieldError, FieldSchema};
use jsonschema::Validator;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::OnceLock;

fn compile(schema: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .map_err(|e| format!("Invalid JSON Schema: {}", e))
}

/// Decodes one JSON Pointer reference token (`~1` is `/`, `~0` is `~`).
fn decode_pointer_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Splits a JSON Pointer into decoded segments.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(decode_pointer_segment)
        .collect()
}

/// A field validated against a JSON Schema fragment.
///
/// The fragment is compiled on first use and the compiled validator is reused.
pub struct JsonSchemaField {
    raw: Value,
    compiled: OnceLock<Result<Validator, String>>,
    optional: bool,
}

impl JsonSchemaField {
    /// Compiles `schema`, rejecting invalid schemas up front.
    pub fn new(schema: Value) -> AppResult<Self> {
        let field = Self::deferred(schema);
        field.ensure_compiled()?;
        Ok(field)
    }

    /// Wraps `schema` without compiling it yet.
    pub(crate) fn deferred(schema: Value) -> Self {
        Self {
            raw: schema,
            compiled: OnceLock::new(),
            optional: false,
        }
    }

    /// Adds (or replaces) a keyword on an object fragment.
    pub fn keyword(mut self, name: &str, value: impl Into<Value>) -> Self {
        if !self.raw.is_object() {
            self.raw = Value::Object(Map::new());
        }
        if let Value::Object(obj) = &mut self.raw {
            obj.insert(name.to_string(), value.into());
        }
        self.compiled = OnceLock::new();
        self
    }

    /// Accepts absence of the field.
    ///
    /// JSON Schema has no notion of an absent value, so this lives on the field.
    pub fn allow_missing(mut self) -> Self {
        self.optional = true;
        self
    }

    /// The schema this field was compiled from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Compiles the fragment now, reporting an invalid schema.
    pub fn ensure_compiled(&self) -> AppResult<()> {
        match self.validator() {
            Ok(_) => Ok(()),
            Err(msg) => Err(AppError::General(msg.clone())),
        }
    }

    fn validator(&self) -> &Result<Validator, String> {
        self.compiled.get_or_init(|| compile(&self.raw))
    }
}

impl Clone for JsonSchemaField {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            compiled: OnceLock::new(),
            optional: self.optional,
        }
    }
}

impl fmt::Debug for JsonSchemaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonSchemaField")
            .field("schema", &self.raw)
            .field("optional", &self.optional)
            .finish()
    }
}

impl FieldSchema for JsonSchemaField {
    fn validate(&self, value: &Value) -> Result<Value, FieldError> {
        let validator = self.validator().as_ref().map_err(FieldError::new)?;
        match validator.iter_errors(value).next() {
            None => Ok(value.clone()),
            Some(err) => Err(FieldError {
                path: pointer_segments(&err.instance_path.to_string()),
                message: err.to_string(),
            }),
        }
    }

    fn validate_missing(&self) -> Result<Option<Value>, FieldError> {
        if self.optional {
            Ok(None)
        } else {
            Err(FieldError::required())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_conforming_value() {
        let f = JsonSchemaField::new(json!({"type": "integer", "minimum": 0})).unwrap();
        assert_eq!(f.validate(&json!(3)).unwrap(), json!(3));
    }

    #[test]
    fn test_reports_first_error_with_pointer_path() {
        let f = JsonSchemaField::new(json!({
            "type": "object",
            "properties": {"tags": {"type": "array", "items": {"type": "string"}}}
        }))
        .unwrap();
        let err = f.validate(&json!({"tags": ["a", 1]})).unwrap_err();
        assert_eq!(err.path, vec!["tags".to_string(), "1".to_string()]);
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_path_segments_are_unescaped() {
        let f = JsonSchemaField::new(json!({
            "type": "object",
            "properties": {
                "a/b": {"type": "string"},
                "c~d": {"type": "string"}
            }
        }))
        .unwrap();
        let err = f.validate(&json!({"a/b": 1})).unwrap_err();
        assert_eq!(err.path, vec!["a/b".to_string()]);
        let err = f.validate(&json!({"c~d": 1})).unwrap_err();
        assert_eq!(err.path, vec!["c~d".to_string()]);
    }

    #[test]
    fn test_pointer_decoding_order() {
        assert_eq!(pointer_segments(""), Vec::<String>::new());
        assert_eq!(pointer_segments("/x/0"), vec!["x", "0"]);
        // `~01` is a literal `~1`, not a slash.
        assert_eq!(pointer_segments("/~01"), vec!["~1"]);
    }

    #[test]
    fn test_invalid_schema_is_rejected() {
        assert!(JsonSchemaField::new(json!({"type": 12})).is_err());
    }

    #[test]
    fn test_invalid_deferred_schema_reports_on_validate() {
        let f = JsonSchemaField::deferred(json!({"type": 12}));
        let err = f.validate(&json!(1)).unwrap_err();
        assert!(err.message.starts_with("Invalid JSON Schema"));
    }

    #[test]
    fn test_keyword_recompiles() {
        let f = JsonSchemaField::new(json!({"type": "string"})).unwrap();
        assert!(f.validate(&json!("abc")).is_ok());
        let f = f.keyword("maxLength", 2);
        assert!(f.validate(&json!("abc")).is_err());
    }

    #[test]
    fn test_missing_handling() {
        let f = JsonSchemaField::new(json!({"type": "string"})).unwrap();
        assert!(f.validate_missing().is_err());
        assert_eq!(f.allow_missing().validate_missing(), Ok(None));
    }
}
