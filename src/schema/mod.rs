#![deny(missing_docs)]

//! # Schema Module
//!
//! - **models**: Endpoint definitions and HTTP methods.
//! - **template**: Compiled path templates.
//! - **registry**: The ordered endpoint registry.
//! - **builder**: Fluent registration API.

pub mod builder;
pub mod models;
pub mod registry;
pub mod template;

pub use builder::{schema_builder, SchemaBuilder};
pub use models::{endpoint_key, Endpoint, EndpointConfig, HttpMethod};
pub use registry::ApiSchema;
pub use template::{PathTemplate, Segment};
