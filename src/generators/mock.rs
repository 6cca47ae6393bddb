#![deny(missing_docs)]

//! # Mock Data
//!
//! Placeholder payloads for tests and prototyping. The shapes are fixed and do
//! not depend on the endpoint's declared fields.

use crate::schema::ApiSchema;
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde_json::{json, Value};

const MOCK_NAME: &str = "John Doe";
const MOCK_EMAIL: &str = "john@example.com";
const MOCK_STATUS: &str = "active";

/// Builds mock request and response payloads.
pub struct MockDataGenerator;

impl MockDataGenerator {
    /// A response payload with `id`, `name`, `email`, `createdAt` and `status`.
    pub fn generate_mock_response(schema: &ApiSchema, method: &str, path: &str) -> Value {
        Self::generate_mock_response_with(&mut rand::thread_rng(), schema, method, path)
    }

    /// Same as [`MockDataGenerator::generate_mock_response`] with a caller supplied RNG.
    pub fn generate_mock_response_with<R: Rng>(
        rng: &mut R,
        _schema: &ApiSchema,
        _method: &str,
        _path: &str,
    ) -> Value {
        let id: u32 = rng.gen_range(0..1000);
        json!({
            "id": id,
            "name": MOCK_NAME,
            "email": MOCK_EMAIL,
            "createdAt": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "status": MOCK_STATUS,
        })
    }

    /// A request body with `name` and `email`.
    pub fn generate_mock_request(_schema: &ApiSchema, _method: &str, _path: &str) -> Value {
        json!({
            "name": MOCK_NAME,
            "email": MOCK_EMAIL,
        })
    }
}
