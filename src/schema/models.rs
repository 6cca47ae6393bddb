#![deny(missing_docs)]

//! # Schema Models
//!
//! Endpoint definitions as held by the registry.

use crate::error::AppError;
use crate::field::{FieldMap, FieldSchema};
use crate::schema::template::PathTemplate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// HTTP methods an endpoint may be declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
}

impl HttpMethod {
    /// Upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    /// Only exact upper-case names are accepted; matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(AppError::InvalidMethod(other.to_string())),
        }
    }
}

/// Registry key for an endpoint: `METHOD:template`.
pub fn endpoint_key(method: HttpMethod, path: &str) -> String {
    format!("{}:{}", method.as_str(), path)
}

/// The declarative part of an endpoint, supplied by callers.
#[derive(Debug, Clone, Default)]
pub struct EndpointConfig {
    /// Path parameter fields.
    pub params: Option<FieldMap>,
    /// Query string fields.
    pub query: Option<FieldMap>,
    /// Request body fields.
    pub body: Option<FieldMap>,
    /// Response body fields.
    pub response: FieldMap,
    /// Free-text description.
    pub description: Option<String>,
    /// Grouping tags.
    pub tags: Option<Vec<String>>,
}

fn insert_field(
    map: &mut Option<FieldMap>,
    name: impl Into<String>,
    field: impl FieldSchema + 'static,
) {
    map.get_or_insert_with(FieldMap::new)
        .insert(name.into(), Arc::new(field));
}

impl EndpointConfig {
    /// Creates an empty config (no fields, empty response).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a path parameter field.
    pub fn param(mut self, name: impl Into<String>, field: impl FieldSchema + 'static) -> Self {
        insert_field(&mut self.params, name, field);
        self
    }

    /// Declares a query field.
    pub fn query(mut self, name: impl Into<String>, field: impl FieldSchema + 'static) -> Self {
        insert_field(&mut self.query, name, field);
        self
    }

    /// Declares a body field.
    pub fn body(mut self, name: impl Into<String>, field: impl FieldSchema + 'static) -> Self {
        insert_field(&mut self.body, name, field);
        self
    }

    /// Declares a response field.
    pub fn response(mut self, name: impl Into<String>, field: impl FieldSchema + 'static) -> Self {
        self.response.insert(name.into(), Arc::new(field));
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Replaces the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A registered endpoint: method, compiled template and declared shapes.
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Declared method.
    pub method: HttpMethod,
    /// Compiled path template.
    pub template: PathTemplate,
    /// Path parameter fields.
    pub params: Option<FieldMap>,
    /// Query string fields.
    pub query: Option<FieldMap>,
    /// Request body fields.
    pub body: Option<FieldMap>,
    /// Response body fields.
    pub response: FieldMap,
    /// Free-text description.
    pub description: Option<String>,
    /// Grouping tags.
    pub tags: Option<Vec<String>>,
}

impl Endpoint {
    /// Compiles `path` and attaches `config`.
    pub fn new(method: HttpMethod, path: &str, config: EndpointConfig) -> Self {
        Self {
            method,
            template: PathTemplate::parse(path),
            params: config.params,
            query: config.query,
            body: config.body,
            response: config.response,
            description: config.description,
            tags: config.tags,
        }
    }

    /// The template as written at registration.
    pub fn path(&self) -> &str {
        self.template.as_str()
    }

    /// Registry key (`METHOD:template`).
    pub fn key(&self) -> String {
        endpoint_key(self.method, self.path())
    }
}
