#![deny(missing_docs)]

//! # Schema Builder
//!
//! Fluent registration of endpoints. The method helpers overwrite silently on
//! a repeated `METHOD:path` key; [`SchemaBuilder::try_route`] is the strict
//! alternative.

use crate::error::AppResult;
use crate::schema::models::{Endpoint, EndpointConfig, HttpMethod};
use crate::schema::registry::ApiSchema;

/// Accumulates endpoints into an [`ApiSchema`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: ApiSchema,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an endpoint, replacing any previous one with the same key.
    pub fn route(mut self, method: HttpMethod, path: &str, config: EndpointConfig) -> Self {
        if let Some(previous) = self.schema.insert(Endpoint::new(method, path, config)) {
            tracing::warn!(key = %previous.key(), "endpoint redefined, keeping the latest");
        }
        self
    }

    /// Registers an endpoint, failing if the key already exists.
    pub fn try_route(
        mut self,
        method: HttpMethod,
        path: &str,
        config: EndpointConfig,
    ) -> AppResult<Self> {
        self.schema
            .try_insert(Endpoint::new(method, path, config))?;
        Ok(self)
    }

    /// Registers a `GET` endpoint.
    pub fn get(self, path: &str, config: EndpointConfig) -> Self {
        self.route(HttpMethod::Get, path, config)
    }

    /// Registers a `POST` endpoint.
    pub fn post(self, path: &str, config: EndpointConfig) -> Self {
        self.route(HttpMethod::Post, path, config)
    }

    /// Registers a `PUT` endpoint.
    pub fn put(self, path: &str, config: EndpointConfig) -> Self {
        self.route(HttpMethod::Put, path, config)
    }

    /// Registers a `DELETE` endpoint.
    pub fn delete(self, path: &str, config: EndpointConfig) -> Self {
        self.route(HttpMethod::Delete, path, config)
    }

    /// Registers a `PATCH` endpoint.
    pub fn patch(self, path: &str, config: EndpointConfig) -> Self {
        self.route(HttpMethod::Patch, path, config)
    }

    /// Returns the accumulated schema.
    pub fn build(self) -> ApiSchema {
        self.schema
    }
}

/// Starts an empty [`SchemaBuilder`].
pub fn schema_builder() -> SchemaBuilder {
    SchemaBuilder::new()
}
