#![deny(missing_docs)]

//! # Schema Registry
//!
//! The immutable API surface handed to validators and generators: endpoints
//! keyed by `METHOD:template`, iterated in registration order.

use crate::error::{AppError, AppResult};
use crate::schema::models::{endpoint_key, Endpoint, HttpMethod};
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Registered endpoints in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ApiSchema {
    endpoints: IndexMap<String, Endpoint>,
}

impl ApiSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `endpoint`, replacing any endpoint with the same key.
    ///
    /// A replaced endpoint keeps its original position in iteration order.
    pub fn insert(&mut self, endpoint: Endpoint) -> Option<Endpoint> {
        let key = endpoint.key();
        tracing::debug!(key = %key, "registering endpoint");
        self.endpoints.insert(key, endpoint)
    }

    /// Inserts `endpoint`, failing if its key is already registered.
    pub fn try_insert(&mut self, endpoint: Endpoint) -> AppResult<()> {
        match self.endpoints.entry(endpoint.key()) {
            Entry::Occupied(occupied) => Err(AppError::DuplicateEndpoint(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                tracing::debug!(key = %vacant.key(), "registering endpoint");
                vacant.insert(endpoint);
                Ok(())
            }
        }
    }

    /// Looks up an endpoint by its exact template (no pattern matching).
    pub fn get(&self, method: HttpMethod, template: &str) -> Option<&Endpoint> {
        self.endpoints.get(&endpoint_key(method, template))
    }

    /// Looks up an endpoint by registry key.
    pub fn get_by_key(&self, key: &str) -> Option<&Endpoint> {
        self.endpoints.get(key)
    }

    /// Iterates `(key, endpoint)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Endpoint)> {
        self.endpoints.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates endpoints in registration order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
