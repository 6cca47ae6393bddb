#![deny(missing_docs)]

//! # OpenAPI Generator
//!
//! Maps a schema to an OpenAPI 3.0 document: one path item per template and one
//! operation per method.
//!
//! Field validators are opaque, so parameters are always typed as `string` and
//! bodies reference an empty object schema.

use crate::error::AppResult;
use crate::field::FieldMap;
use crate::schema::{ApiSchema, Endpoint};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

const OPENAPI_VERSION: &str = "3.0.0";
const DEFAULT_TITLE: &str = "API";
const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_TAG: &str = "default";

/// Minimal OpenAPI Info metadata for document generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiInfo {
    /// The title of the API.
    pub title: String,
    /// The version of the API document.
    pub version: String,
    /// Optional description for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl OpenApiInfo {
    /// Creates a new OpenApiInfo with required fields.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: version.into(),
            description: None,
        }
    }

    /// Sets an optional description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Default for OpenApiInfo {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, DEFAULT_VERSION)
    }
}

/// A generated OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Specification version, always `3.0.0`.
    pub openapi: String,
    /// API metadata.
    pub info: OpenApiInfo,
    /// Path items keyed by template, each keyed by lower-case method.
    pub paths: IndexMap<String, Map<String, Value>>,
}

impl OpenApiDocument {
    /// The document as a JSON value.
    pub fn to_json_value(&self) -> AppResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// YAML rendering.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Builds OpenAPI documents from schemas.
pub struct OpenApiGenerator;

impl OpenApiGenerator {
    /// Generates a document for every registered endpoint.
    pub fn generate(schema: &ApiSchema, info: &OpenApiInfo) -> OpenApiDocument {
        let mut paths: IndexMap<String, Map<String, Value>> = IndexMap::new();

        for endpoint in schema.endpoints() {
            let method = endpoint.method.as_str();
            paths
                .entry(endpoint.path().to_string())
                .or_default()
                .insert(method.to_ascii_lowercase(), build_operation(endpoint));
        }

        tracing::debug!(paths = paths.len(), "generated OpenAPI document");

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: info.clone(),
            paths,
        }
    }
}

fn build_operation(endpoint: &Endpoint) -> Value {
    let mut op = Map::new();

    let summary = endpoint
        .description
        .clone()
        .unwrap_or_else(|| format!("{} {}", endpoint.method, endpoint.path()));
    op.insert("summary".to_string(), json!(summary));

    let tags = endpoint
        .tags
        .clone()
        .unwrap_or_else(|| vec![DEFAULT_TAG.to_string()]);
    op.insert("tags".to_string(), json!(tags));

    op.insert(
        "responses".to_string(),
        json!({
            "200": {
                "description": "Success",
                "content": {
                    "application/json": { "schema": placeholder_schema(&endpoint.response) }
                }
            }
        }),
    );

    let mut parameters = Vec::new();
    if let Some(params) = &endpoint.params {
        parameters.extend(params.keys().map(|name| build_parameter(name, "path", true)));
    }
    if let Some(query) = &endpoint.query {
        parameters.extend(query.keys().map(|name| build_parameter(name, "query", false)));
    }
    // An empty declared map still produces an (empty) parameter list.
    if endpoint.params.is_some() || endpoint.query.is_some() {
        op.insert("parameters".to_string(), Value::Array(parameters));
    }

    if let Some(body) = &endpoint.body {
        op.insert(
            "requestBody".to_string(),
            json!({
                "required": true,
                "content": {
                    "application/json": { "schema": placeholder_schema(body) }
                }
            }),
        );
    }

    Value::Object(op)
}

fn build_parameter(name: &str, location: &str, required: bool) -> Value {
    json!({
        "name": name,
        "in": location,
        "required": required,
        "schema": { "type": "string" }
    })
}

/// Field validators are not introspected; every shape becomes an empty object schema.
fn placeholder_schema(_fields: &FieldMap) -> Value {
    json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}
