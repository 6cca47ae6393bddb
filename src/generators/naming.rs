#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helper functions for deriving type names from HTTP methods and path templates.

/// Upper-cases the first character and leaves the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Converts one path segment to PascalCase, dropping the first parameter marker.
///
/// e.g. `:user_id` -> `UserId`, `order-items` -> `OrderItems`
fn segment_to_pascal(segment: &str) -> String {
    segment
        .replacen(':', "", 1)
        .split(['-', '_'])
        .map(capitalize)
        .collect()
}

/// Derives an operation name from the HTTP Method and path template.
///
/// e.g. `GET /users/:id` -> `GetUsersId`
pub fn operation_name(method: &str, path: &str) -> String {
    let name: String = path
        .split('/')
        .filter(|p| !p.is_empty())
        .map(segment_to_pascal)
        .collect();

    let mut chars = method.chars();
    let prefix = match chars.next() {
        Some(first) => format!("{}{}", first, chars.as_str().to_lowercase()),
        None => String::new(),
    };
    format!("{}{}", prefix, name)
}
