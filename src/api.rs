#![deny(missing_docs)]

//! # API Validator Facade
//!
//! One entry point over a schema: request/response validation plus every
//! generator.

use crate::generators::{
    MockDataGenerator, OpenApiDocument, OpenApiGenerator, OpenApiInfo, TypeScriptGenerator,
};
use crate::schema::{ApiSchema, HttpMethod};
use crate::validator::{RequestData, ValidationResult, Validator, ValidatorOptions};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Listing entry for a registered endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointSummary {
    /// Declared method.
    pub method: HttpMethod,
    /// Template as registered.
    pub path: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Grouping tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Validation and generation over one immutable schema.
///
/// Cloning is cheap; clones share the schema.
#[derive(Debug, Clone)]
pub struct ApiValidator {
    schema: Arc<ApiSchema>,
    validator: Validator,
}

impl ApiValidator {
    /// Creates a facade with default validation options.
    pub fn new(schema: ApiSchema) -> Self {
        Self::with_options(schema, ValidatorOptions::default())
    }

    /// Creates a facade with explicit validation options.
    pub fn with_options(schema: ApiSchema, options: ValidatorOptions) -> Self {
        let schema = Arc::new(schema);
        tracing::debug!(endpoints = schema.len(), "api validator constructed");
        Self {
            validator: Validator::with_options(Arc::clone(&schema), options),
            schema,
        }
    }

    /// The underlying schema.
    pub fn schema(&self) -> &ApiSchema {
        &self.schema
    }

    /// Validates an incoming request.
    pub fn validate_request(
        &self,
        method: &str,
        path: &str,
        data: Option<&RequestData>,
    ) -> ValidationResult {
        self.validator.validate_request(method, path, data)
    }

    /// Validates an outgoing response.
    pub fn validate_response(&self, method: &str, path: &str, data: &Value) -> ValidationResult {
        self.validator.validate_response(method, path, data)
    }

    /// Generates the OpenAPI document; title and version default to `API` and `1.0.0`.
    pub fn generate_openapi(&self, title: Option<&str>, version: Option<&str>) -> OpenApiDocument {
        let defaults = OpenApiInfo::default();
        let info = OpenApiInfo::new(
            title.unwrap_or(&defaults.title),
            version.unwrap_or(&defaults.version),
        );
        OpenApiGenerator::generate(&self.schema, &info)
    }

    /// Generates the OpenAPI document with full metadata.
    pub fn generate_openapi_with_info(&self, info: &OpenApiInfo) -> OpenApiDocument {
        OpenApiGenerator::generate(&self.schema, info)
    }

    /// Generates TypeScript declarations.
    pub fn generate_typescript(&self) -> String {
        TypeScriptGenerator::generate(&self.schema)
    }

    /// Generates a mock response payload.
    pub fn generate_mock_response(&self, method: &str, path: &str) -> Value {
        MockDataGenerator::generate_mock_response(&self.schema, method, path)
    }

    /// Generates a mock request body.
    pub fn generate_mock_request(&self, method: &str, path: &str) -> Value {
        MockDataGenerator::generate_mock_request(&self.schema, method, path)
    }

    /// Every registered endpoint in registration order.
    pub fn endpoints(&self) -> Vec<EndpointSummary> {
        self.schema
            .endpoints()
            .map(|e| EndpointSummary {
                method: e.method,
                path: e.path().to_string(),
                description: e.description.clone(),
                tags: e.tags.clone(),
            })
            .collect()
    }
}

/// Wraps `schema` in an [`ApiValidator`] with default options.
pub fn api_validator(schema: ApiSchema) -> ApiValidator {
    ApiValidator::new(schema)
}
