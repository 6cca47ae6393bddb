#![deny(missing_docs)]

//! # Path Matcher
//!
//! Resolves a concrete `(method, path)` pair to a registered endpoint.
//!
//! Endpoints are scanned in registration order and the first structural
//! match wins. A template with a parameter registered before a literal
//! template therefore shadows it: with `/users/:id` registered ahead of
//! `/users/active`, the path `/users/active` resolves to `/users/:id`.

use crate::error::{AppError, AppResult};
use crate::schema::{ApiSchema, Endpoint};

/// Read-only resolver over a schema.
#[derive(Debug, Clone, Copy)]
pub struct PathMatcher<'a> {
    schema: &'a ApiSchema,
}

impl<'a> PathMatcher<'a> {
    /// Creates a matcher for `schema`.
    pub fn new(schema: &'a ApiSchema) -> Self {
        Self { schema }
    }

    /// Returns the first endpoint whose method equals `method` exactly and
    /// whose template matches `path`.
    pub fn find(&self, method: &str, path: &str) -> Option<&'a Endpoint> {
        for endpoint in self.schema.endpoints() {
            tracing::trace!(
                method,
                path,
                candidate = %endpoint.key(),
                "checking endpoint"
            );
            if endpoint.method.as_str() != method {
                continue;
            }
            if endpoint.path() == path || endpoint.template.matches(path) {
                tracing::debug!(method, path, template = endpoint.path(), "endpoint resolved");
                return Some(endpoint);
            }
        }
        tracing::debug!(method, path, "no endpoint matched");
        None
    }

    /// Like [`PathMatcher::find`], reporting a miss as `EndpointNotFound`.
    pub fn resolve(&self, method: &str, path: &str) -> AppResult<&'a Endpoint> {
        self.find(method, path)
            .ok_or_else(|| AppError::EndpointNotFound {
                method: method.to_string(),
                path: path.to_string(),
            })
    }
}
