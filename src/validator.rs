#![deny(missing_docs)]

//! # Request/Response Validation
//!
//! Applies an endpoint's declared fields to caller data once the
//! [`PathMatcher`] has resolved the endpoint.
//!
//! Checks run params, then query, then body, and stop at the first failure.
//! Errors never escape as `Err`: every outcome is a [`ValidationResult`].

use crate::error::{AppError, AppResult};
use crate::field::{validate_object, FieldMap, UnknownKeys};
use crate::matcher::PathMatcher;
use crate::schema::{ApiSchema, Endpoint};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Validation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// Policy for keys the endpoint does not declare.
    pub unknown_keys: UnknownKeys,
}

/// Caller supplied request parts. Path parameters come from the path itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    /// Parsed query string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,
    /// Parsed request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestData {
    /// Creates empty request data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the query mapping.
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    /// Sets the body mapping.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// The data as a JSON object, omitting absent parts.
    pub fn to_value(&self) -> Value {
        let mut obj = Map::new();
        if let Some(query) = &self.query {
            obj.insert("query".to_string(), query.clone());
        }
        if let Some(body) = &self.body {
            obj.insert("body".to_string(), body.clone());
        }
        Value::Object(obj)
    }
}

/// Outcome of a validation call: validated data or error messages, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The input was accepted.
    Valid {
        /// Validated data; `None` when the caller supplied nothing.
        data: Option<Value>,
    },
    /// The input was rejected.
    Invalid {
        /// Human readable reasons (one per failed step).
        errors: Vec<String>,
    },
}

impl ValidationResult {
    /// Success carrying `data`.
    pub fn valid(data: Option<Value>) -> Self {
        ValidationResult::Valid { data }
    }

    /// Failure carrying a single message derived from `err`.
    pub fn invalid(err: &AppError) -> Self {
        ValidationResult::Invalid {
            errors: vec![err.to_string()],
        }
    }

    /// Whether validation succeeded.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid { .. })
    }

    /// Validated data, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            ValidationResult::Valid { data } => data.as_ref(),
            ValidationResult::Invalid { .. } => None,
        }
    }

    /// Error messages (empty on success).
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Valid { .. } => &[],
            ValidationResult::Invalid { errors } => errors,
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<Option<Value>, Vec<String>> {
        match self {
            ValidationResult::Valid { data } => Ok(data),
            ValidationResult::Invalid { errors } => Err(errors),
        }
    }
}

impl From<AppResult<Option<Value>>> for ValidationResult {
    fn from(result: AppResult<Option<Value>>) -> Self {
        match result {
            Ok(data) => ValidationResult::valid(data),
            Err(err) => ValidationResult::invalid(&err),
        }
    }
}

/// Serializes as `{"valid": bool, "data"?: .., "errors"?: [..]}`.
impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("valid", &self.is_valid())?;
        match self {
            ValidationResult::Valid { data: Some(data) } => map.serialize_entry("data", data)?,
            ValidationResult::Valid { data: None } => {}
            ValidationResult::Invalid { errors } => map.serialize_entry("errors", errors)?,
        }
        map.end()
    }
}

/// Validates requests and responses against a shared schema.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Arc<ApiSchema>,
    options: ValidatorOptions,
}

impl Validator {
    /// Creates a validator with default options.
    pub fn new(schema: Arc<ApiSchema>) -> Self {
        Self::with_options(schema, ValidatorOptions::default())
    }

    /// Creates a validator with explicit options.
    pub fn with_options(schema: Arc<ApiSchema>, options: ValidatorOptions) -> Self {
        Self { schema, options }
    }

    /// The schema being validated against.
    pub fn schema(&self) -> &ApiSchema {
        &self.schema
    }

    /// Active options.
    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validates an incoming request.
    ///
    /// Declared params are checked against an empty object, since extracted
    /// path values are not passed through. A validated body replaces the
    /// returned data; otherwise the caller's data is echoed back unchanged.
    pub fn validate_request(
        &self,
        method: &str,
        path: &str,
        data: Option<&RequestData>,
    ) -> ValidationResult {
        let result = PathMatcher::new(&self.schema)
            .resolve(method, path)
            .and_then(|endpoint| self.check_request(endpoint, data));
        self.report(method, path, result)
    }

    /// Validates an outgoing response body as a whole.
    pub fn validate_response(&self, method: &str, path: &str, data: &Value) -> ValidationResult {
        let result = PathMatcher::new(&self.schema)
            .resolve(method, path)
            .and_then(|endpoint| self.compose(&endpoint.response, data).map(Some));
        self.report(method, path, result)
    }

    fn check_request(
        &self,
        endpoint: &Endpoint,
        data: Option<&RequestData>,
    ) -> AppResult<Option<Value>> {
        if let Some(params) = &endpoint.params {
            self.compose(params, &Value::Object(Map::new()))?;
        }

        if let (Some(query), Some(supplied)) =
            (&endpoint.query, data.and_then(|d| d.query.as_ref()))
        {
            self.compose(query, supplied)?;
        }

        if let (Some(body), Some(supplied)) = (&endpoint.body, data.and_then(|d| d.body.as_ref()))
        {
            return self.compose(body, supplied).map(Some);
        }

        Ok(data.map(RequestData::to_value))
    }

    fn compose(&self, fields: &FieldMap, value: &Value) -> AppResult<Value> {
        validate_object(fields, self.options.unknown_keys, value)
            .map_err(|e| AppError::ValidationFailed(e.to_string()))
    }

    fn report(&self, method: &str, path: &str, result: AppResult<Option<Value>>) -> ValidationResult {
        if let Err(err) = &result {
            tracing::debug!(method, path, error = %err, "validation rejected");
        }
        result.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{self, FieldSchemaExt};
    use crate::schema::{EndpointConfig, SchemaBuilder};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn users_schema() -> Arc<ApiSchema> {
        Arc::new(
            SchemaBuilder::new()
                .get(
                    "/users",
                    EndpointConfig::new()
                        .query("page", field::integer().optional())
                        .response("id", field::number()),
                )
                .post(
                    "/users",
                    EndpointConfig::new()
                        .body("name", field::string())
                        .body("email", field::string())
                        .response("id", field::number())
                        .response("name", field::string()),
                )
                .get(
                    "/users/:id",
                    EndpointConfig::new()
                        .param("id", field::string())
                        .response("id", field::number()),
                )
                .get(
                    "/orgs/:org",
                    EndpointConfig::new()
                        .param("org", field::string().optional())
                        .response("id", field::number()),
                )
                .build(),
        )
    }

    #[test]
    fn test_not_found() {
        let v = Validator::new(users_schema());
        let result = v.validate_request("PATCH", "/users", None);
        assert_eq!(
            result,
            ValidationResult::Invalid {
                errors: vec!["Endpoint not found: PATCH /users".into()]
            }
        );
    }

    #[test]
    fn test_no_data_is_valid() {
        let v = Validator::new(users_schema());
        assert_eq!(
            v.validate_request("GET", "/users", None),
            ValidationResult::Valid { data: None }
        );
    }

    #[test]
    fn test_body_is_validated_and_returned() {
        let v = Validator::new(users_schema());
        let data = RequestData::new().with_body(json!({"name": "John", "email": "john@example.com"}));
        let result = v.validate_request("POST", "/users", Some(&data));
        assert_eq!(
            result.data(),
            Some(&json!({"name": "John", "email": "john@example.com"}))
        );
    }

    #[test]
    fn test_body_failure_has_single_message() {
        let v = Validator::new(users_schema());
        let data = RequestData::new().with_body(json!({"name": 1}));
        let result = v.validate_request("POST", "/users", Some(&data));
        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
        assert!(result.errors()[0].starts_with("name: "), "{:?}", result.errors());
    }

    #[test]
    fn test_query_validated_but_data_echoed() {
        let v = Validator::new(users_schema());
        let data = RequestData::new().with_query(json!({"page": 2}));
        let result = v.validate_request("GET", "/users", Some(&data));
        assert_eq!(result.data(), Some(&json!({"query": {"page": 2}})));

        let bad = RequestData::new().with_query(json!({"page": 2, "sort": "asc"}));
        let result = v.validate_request("GET", "/users", Some(&bad));
        assert_eq!(
            result.errors(),
            &["Unrecognized key(s) in object: 'sort'".to_string()]
        );
    }

    #[test]
    fn test_body_result_discards_query_echo() {
        let schema = Arc::new(
            SchemaBuilder::new()
                .post(
                    "/search",
                    EndpointConfig::new()
                        .query("q", field::string())
                        .body("limit", field::integer()),
                )
                .build(),
        );
        let v = Validator::new(schema);
        let data = RequestData::new()
            .with_query(json!({"q": "rust"}))
            .with_body(json!({"limit": 5}));
        let result = v.validate_request("POST", "/search", Some(&data));
        assert_eq!(result, ValidationResult::valid(Some(json!({"limit": 5}))));
    }

    #[test]
    fn test_required_params_always_fail() {
        let v = Validator::new(users_schema());
        let result = v.validate_request("GET", "/users/123", None);
        assert_eq!(result.errors(), &["id: Required".to_string()]);
    }

    #[test]
    fn test_optional_params_pass() {
        let v = Validator::new(users_schema());
        assert!(v.validate_request("GET", "/orgs/acme", None).is_valid());
    }

    #[test]
    fn test_strip_policy() {
        let v = Validator::with_options(
            users_schema(),
            ValidatorOptions {
                unknown_keys: UnknownKeys::Strip,
            },
        );
        let data = RequestData::new().with_body(json!({
            "name": "John", "email": "john@example.com", "admin": true
        }));
        let result = v.validate_request("POST", "/users", Some(&data));
        assert_eq!(
            result.data(),
            Some(&json!({"name": "John", "email": "john@example.com"}))
        );
    }

    #[test]
    fn test_validate_response() {
        let v = Validator::new(users_schema());
        let ok = v.validate_response("POST", "/users", &json!({"id": 1, "name": "A"}));
        assert_eq!(ok.data(), Some(&json!({"id": 1, "name": "A"})));

        let bad = v.validate_response("POST", "/users", &json!({"id": 1}));
        assert_eq!(bad.errors(), &["name: Required".to_string()]);

        let missing = v.validate_response("GET", "/nope", &json!({}));
        assert_eq!(
            missing.errors(),
            &["Endpoint not found: GET /nope".to_string()]
        );
    }

    #[test]
    fn test_result_serialization_shape() {
        let ok = serde_json::to_value(ValidationResult::valid(Some(json!({"a": 1})))).unwrap();
        assert_eq!(ok, json!({"valid": true, "data": {"a": 1}}));
        let bare = serde_json::to_value(ValidationResult::valid(None)).unwrap();
        assert_eq!(bare, json!({"valid": true}));
        let err = serde_json::to_value(ValidationResult::Invalid {
            errors: vec!["x".into()],
        })
        .unwrap();
        assert_eq!(err, json!({"valid": false, "errors": ["x"]}));
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let opts: ValidatorOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(opts.unknown_keys, UnknownKeys::Strict);
        let opts: ValidatorOptions =
            serde_json::from_value(json!({"unknownKeys": "passthrough"})).unwrap();
        assert_eq!(opts.unknown_keys, UnknownKeys::Passthrough);
    }
}
