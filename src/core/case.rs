//! Cross-convention string conversion.
//!
//! kebab-case is the canonical pivot: every conversion first canonicalizes
//! to kebab via [`to_kebab`], then projects into the target convention.

use crate::convention::Convention;

/// Canonicalize any convention to kebab form.
///
/// Underscores and spaces become hyphens, a hyphen is inserted before each
/// uppercase letter past position 0 (splitting camel/Pascal word joins),
/// everything is lowercased, and separator runs collapse to a single hyphen.
///
/// Leading/trailing hyphens are NOT trimmed. An input like "_foo" maps to
/// "-foo"; that fidelity is relied on by the substitution engine, which
/// pairs needle and replacement variants positionally.
pub fn to_kebab(s: &str) -> String {
    let mut dashed = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        match ch {
            '_' | ' ' => dashed.push('-'),
            c if c.is_ascii_uppercase() => {
                if i > 0 {
                    dashed.push('-');
                }
                dashed.extend(c.to_lowercase());
            }
            c => dashed.extend(c.to_lowercase()),
        }
    }

    // Collapse runs left by mixed separators ("foo_-bar", "foo_Bar")
    let mut out = String::with_capacity(dashed.len());
    let mut prev_dash = false;
    for ch in dashed.chars() {
        if ch == '-' {
            if prev_dash {
                continue;
            }
            prev_dash = true;
        } else {
            prev_dash = false;
        }
        out.push(ch);
    }

    out
}

/// Convert a string into the target convention.
///
/// `Other` returns the input verbatim; canonicalization is skipped
/// entirely, not applied and discarded.
pub fn convert(s: &str, target: Convention) -> String {
    match target {
        Convention::Other => s.to_string(),
        Convention::Kebab => to_kebab(s),
        Convention::Snake => to_snake(&to_kebab(s)),
        Convention::Camel => to_camel(&to_kebab(s)),
        Convention::Pascal => to_pascal(&to_kebab(s)),
    }
}

/// Project a kebab string to camelCase: first token lowercased verbatim,
/// every following token capitalized, no separators.
pub(crate) fn to_camel(kebab: &str) -> String {
    let mut parts = kebab.split('-');
    let mut out = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

/// Project a kebab string to PascalCase: every token capitalized.
pub(crate) fn to_pascal(kebab: &str) -> String {
    kebab.split('-').map(capitalize).collect()
}

/// Project a kebab string to snake_case.
pub(crate) fn to_snake(kebab: &str) -> String {
    kebab.replace('-', "_")
}

/// Uppercase the first character only; the remainder of the token is left
/// untouched (never lowercased).
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
