#![deny(missing_docs)]

//! # TypeScript Generator
//!
//! Emits `.d.ts` style declarations: a `<Name>Response` interface per endpoint
//! and a `<Name>Request` interface for endpoints that declare a body. Members
//! are an untyped index signature.

use crate::generators::naming::operation_name;
use crate::schema::ApiSchema;

const BANNER: &str = "
// AUTO-GENERATED - DO NOT EDIT MANUALLY
// Generated from API schema

";

/// Builds TypeScript declarations from schemas.
pub struct TypeScriptGenerator;

impl TypeScriptGenerator {
    /// Generates declaration text for every registered endpoint.
    pub fn generate(schema: &ApiSchema) -> String {
        let mut output = String::from(BANNER);

        for endpoint in schema.endpoints() {
            let name = operation_name(endpoint.method.as_str(), endpoint.path());
            output.push_str(&interface(&format!("{}Response", name), "Response fields"));
            if endpoint.body.is_some() {
                output.push_str(&interface(&format!("{}Request", name), "Request fields"));
            }
        }

        output
    }
}

fn interface(name: &str, comment: &str) -> String {
    format!(
        "export interface {} {{\n  // {}\n  [key: string]: any;\n}}\n\n",
        name, comment
    )
}
