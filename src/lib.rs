#![deny(missing_docs)]

//! # API Contract
//!
//! Describe REST endpoints once (method, path template, params, query, body and
//! response fields) and derive request/response validation, an OpenAPI
//! document, TypeScript declarations and mock payloads from that description.
//!
//! Everything is synchronous and side-effect free. A built [`ApiSchema`] is
//! immutable and can be shared across threads.

/// Shared error types.
pub mod error;

/// Field validators and composed object shapes.
pub mod field;

/// Endpoint model, path templates, registry and builder.
pub mod schema;

/// Path-to-endpoint resolution.
pub mod matcher;

/// Request and response validation.
pub mod validator;

/// OpenAPI, TypeScript and mock generation.
pub mod generators;

/// The facade tying everything together.
pub mod api;

pub use api::{api_validator, ApiValidator, EndpointSummary};
pub use error::{AppError, AppResult};
pub use field::{FieldError, FieldMap, FieldRef, FieldSchema, FieldSchemaExt, UnknownKeys};
pub use generators::{
    MockDataGenerator, OpenApiDocument, OpenApiGenerator, OpenApiInfo, TypeScriptGenerator,
};
pub use matcher::PathMatcher;
pub use schema::{
    schema_builder, ApiSchema, Endpoint, EndpointConfig, HttpMethod, PathTemplate, SchemaBuilder,
};
pub use validator::{RequestData, ValidationResult, Validator, ValidatorOptions};
