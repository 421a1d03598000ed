//! Naming-convention classification.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// A recognized naming convention.
///
/// `Other` is the catch-all for strings matching none of the structural
/// patterns (spaces, mixed separators, leading digits with separators, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Convention {
    #[serde(rename = "snake_case")]
    Snake,
    #[serde(rename = "kebab-case")]
    Kebab,
    #[serde(rename = "camelCase")]
    Camel,
    #[serde(rename = "PascalCase")]
    Pascal,
    #[serde(rename = "other")]
    Other,
}

static SNAKE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:_[a-z0-9]+)*$").unwrap());

static KEBAB_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

static CAMEL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap());

static PASCAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());

/// Classify a string's naming convention.
///
/// Patterns are tried in a fixed priority order. A pure-lowercase single
/// word ("example") matches both the snake and camel patterns; snake wins
/// because it is tried first. That tie-break is deliberate.
pub fn classify(s: &str) -> Convention {
    let ordered: [(&Regex, Convention); 4] = [
        (&SNAKE_PATTERN, Convention::Snake),
        (&KEBAB_PATTERN, Convention::Kebab),
        (&CAMEL_PATTERN, Convention::Camel),
        (&PASCAL_PATTERN, Convention::Pascal),
    ];

    for (pattern, convention) in ordered {
        if pattern.is_match(s) {
            return convention;
        }
    }

    Convention::Other
}

impl Convention {
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Snake => "snake_case",
            Convention::Kebab => "kebab-case",
            Convention::Camel => "camelCase",
            Convention::Pascal => "PascalCase",
            Convention::Other => "other",
        }
    }

    /// Parse a user-supplied convention tag.
    ///
    /// This is the one place an unrecognized tag can exist: inside the
    /// enum everything is exhaustively matched at compile time.
    pub fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "snake_case" => Ok(Convention::Snake),
            "kebab-case" => Ok(Convention::Kebab),
            "camelCase" => Ok(Convention::Camel),
            "PascalCase" => Ok(Convention::Pascal),
            "other" => Ok(Convention::Other),
            _ => Err(Error::unsupported_convention(
                tag,
                ["snake_case", "kebab-case", "camelCase", "PascalCase", "other"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            )),
        }
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
