#![deny(missing_docs)]

//! # Generators
//!
//! Pure transformations from an [`crate::schema::ApiSchema`] to derived artifacts.
//! None of them inspect field validators; their output shapes are fixed.
//!
//! - **openapi**: OpenAPI 3.0 document.
//! - **typescript**: TypeScript declaration text.
//! - **mock**: Placeholder payloads.

pub mod mock;
pub mod naming;
pub mod openapi;
pub mod typescript;

pub use mock::MockDataGenerator;
pub use naming::operation_name;
pub use openapi::{OpenApiDocument, OpenApiGenerator, OpenApiInfo};
pub use typescript::TypeScriptGenerator;
