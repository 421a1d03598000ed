//! Variation generation: one string rendered in every convention.

use serde::Serialize;

use crate::case::{to_camel, to_kebab, to_pascal, to_snake};

/// Key into a [`CaseVariationSet`].
///
/// The declared order is load-bearing: the filename substitution policy is
/// first-match-wins over exactly this sequence, so it lives in an explicit
/// ordered list ([`KEY_ORDER`]), never a hash map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariationKey {
    Original,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

pub const KEY_ORDER: [VariationKey; 5] = [
    VariationKey::Original,
    VariationKey::Camel,
    VariationKey::Pascal,
    VariationKey::Snake,
    VariationKey::Kebab,
];

impl VariationKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariationKey::Original => "original",
            VariationKey::Camel => "camelCase",
            VariationKey::Pascal => "PascalCase",
            VariationKey::Snake => "snake_case",
            VariationKey::Kebab => "kebab-case",
        }
    }
}

/// One source string rendered in every convention.
///
/// All five values share the same tokenization; `kebab` is the canonical
/// form the other projections derive from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseVariationSet {
    pub original: String,
    #[serde(rename = "camelCase")]
    pub camel: String,
    #[serde(rename = "PascalCase")]
    pub pascal: String,
    #[serde(rename = "snake_case")]
    pub snake: String,
    #[serde(rename = "kebab-case")]
    pub kebab: String,
}

impl CaseVariationSet {
    pub fn get(&self, key: VariationKey) -> &str {
        match key {
            VariationKey::Original => &self.original,
            VariationKey::Camel => &self.camel,
            VariationKey::Pascal => &self.pascal,
            VariationKey::Snake => &self.snake,
            VariationKey::Kebab => &self.kebab,
        }
    }

    /// Iterate the five entries in declared key order.
    pub fn entries(&self) -> impl Iterator<Item = (VariationKey, &str)> {
        KEY_ORDER.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Generate all convention-variants of `text`.
///
/// The generator tolerates empty input structurally; rename/replace flows
/// reject empty needles before getting here.
pub fn variations(text: &str) -> CaseVariationSet {
    let kebab = to_kebab(text);

    CaseVariationSet {
        original: text.to_string(),
        camel: to_camel(&kebab),
        pascal: to_pascal(&kebab),
        snake: to_snake(&kebab),
        kebab,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variations_from_kebab_input() {
        let set = variations("this-is-kebab-case");
        assert_eq!(set.original, "this-is-kebab-case");
        assert_eq!(set.camel, "thisIsKebabCase");
        assert_eq!(set.pascal, "ThisIsKebabCase");
        assert_eq!(set.snake, "this_is_kebab_case");
        assert_eq!(set.kebab, "this-is-kebab-case");
    }

    #[test]
    fn variations_from_camel_input() {
        let set = variations("testString");
        assert_eq!(set.original, "testString");
        assert_eq!(set.camel, "testString");
        assert_eq!(set.pascal, "TestString");
        assert_eq!(set.snake, "test_string");
        assert_eq!(set.kebab, "test-string");
    }

    #[test]
    fn single_word_variants() {
        let set = variations("example");
        assert_eq!(set.camel, "example");
        assert_eq!(set.pascal, "Example");
        assert_eq!(set.snake, "example");
        assert_eq!(set.kebab, "example");
    }

    #[test]
    fn entries_follow_declared_order() {
        let set = variations("some-term");
        let keys: Vec<&str> = set.entries().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["original", "camelCase", "PascalCase", "snake_case", "kebab-case"]
        );
    }

    #[test]
    fn serializes_with_convention_tags_as_keys() {
        let set = variations("my-term");
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["original"], "my-term");
        assert_eq!(json["camelCase"], "myTerm");
        assert_eq!(json["PascalCase"], "MyTerm");
        assert_eq!(json["snake_case"], "my_term");
        assert_eq!(json["kebab-case"], "my-term");
    }

    #[test]
    fn empty_input_is_tolerated() {
        let set = variations("");
        assert!(set.entries().all(|(_, v)| v.is_empty()));
    }
}
