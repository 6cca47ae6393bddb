#![deny(missing_docs)]

//! # Path Templates
//!
//! Templates such as `/users/:id` are compiled once into a segment list and
//! matched against concrete paths segment by segment.
//!
//! A segment is a parameter when it contains a `:` followed by at least one
//! character. Everything from that colon to the end of the segment is the
//! parameter name; text before the colon is a literal prefix the concrete
//! segment must start with. A parameter matches one or more characters and
//! never crosses a `/`.

use indexmap::IndexMap;
use std::fmt;

/// A single slash-delimited piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the concrete segment exactly.
    Literal(String),
    /// Matches `prefix` followed by one or more characters.
    Param {
        /// Literal text preceding the marker (usually empty).
        prefix: String,
        /// Parameter name, without the marker.
        name: String,
    },
}

impl Segment {
    fn parse(raw: &str) -> Self {
        match raw.find(':') {
            Some(idx) if idx + 1 < raw.len() => Segment::Param {
                prefix: raw[..idx].to_string(),
                name: raw[idx + 1..].to_string(),
            },
            _ => Segment::Literal(raw.to_string()),
        }
    }

    /// Returns the captured value when `concrete` satisfies this segment.
    fn capture<'p>(&self, concrete: &'p str) -> Option<&'p str> {
        match self {
            Segment::Literal(lit) => (lit == concrete).then_some(""),
            Segment::Param { prefix, .. } => concrete
                .strip_prefix(prefix.as_str())
                .filter(|rest| !rest.is_empty()),
        }
    }
}

/// A compiled path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl PathTemplate {
    /// Compiles a template. Every string is a valid template.
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('/').map(Segment::parse).collect(),
        }
    }

    /// The template exactly as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Compiled segments, including the empty leading segment of absolute paths.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in template order.
    pub fn params(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// True when the template has no parameter segments.
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Literal(_)))
    }

    /// Whether `path` satisfies the template.
    ///
    /// No normalization happens: trailing slashes, case and percent-encoding
    /// are significant.
    pub fn matches(&self, path: &str) -> bool {
        self.raw == path || self.captures(path).is_some()
    }

    /// Extracts parameter values from a matching `path`.
    pub fn captures(&self, path: &str) -> Option<IndexMap<String, String>> {
        let mut concrete = path.split('/');
        let mut values = IndexMap::new();
        for segment in &self.segments {
            let part = concrete.next()?;
            let captured = segment.capture(part)?;
            if let Segment::Param { name, .. } = segment {
                values.insert(name.clone(), captured.to_string());
            }
        }
        if concrete.next().is_some() {
            return None;
        }
        Some(values)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
