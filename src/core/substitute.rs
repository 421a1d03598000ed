//! Substitution engine: replace needle variants with the matching
//! replacement variant in filenames and file content.
//!
//! The two policies differ on purpose and must not be unified:
//! - filenames: first matching variant wins, then stop;
//! - content: every matching variant is replaced in one pass.

use crate::error::{Error, Result};
use crate::variations::{CaseVariationSet, KEY_ORDER};

/// A content substitution result with its replacement count.
#[derive(Debug, Clone)]
pub struct ContentEdit {
    pub content: String,
    pub replacements: usize,
}

/// Substitute the needle in a filename.
///
/// Walks the variant keys in declared order; the FIRST variant found as a
/// substring has all of its occurrences replaced with the same-keyed
/// replacement variant, and no further keys are checked. A name containing
/// two differently-cased variants only has the earliest-keyed one replaced.
pub fn substitute_in_name(
    name: &str,
    needles: &CaseVariationSet,
    replacements: &CaseVariationSet,
) -> Result<String> {
    ensure_needle(needles)?;

    for key in KEY_ORDER {
        let needle = needles.get(key);
        // An empty variant would match between every character
        if needle.is_empty() {
            continue;
        }
        if name.contains(needle) {
            return Ok(name.replace(needle, replacements.get(key)));
        }
    }

    Ok(name.to_string())
}

/// Substitute the needle in file content.
///
/// Unlike the filename policy this does not short-circuit: every variant
/// key is tried against the (possibly already-modified) content, so a file
/// holding camelCase and snake_case occurrences gets both replaced in one
/// pass. Variants identical between needle and replacement are a no-op,
/// not an error.
pub fn substitute_in_content(
    content: &str,
    needles: &CaseVariationSet,
    replacements: &CaseVariationSet,
) -> Result<String> {
    substitute_in_content_counted(content, needles, replacements).map(|edit| edit.content)
}

/// Content substitution that also reports how many occurrences were
/// replaced, for per-file reporting.
pub fn substitute_in_content_counted(
    content: &str,
    needles: &CaseVariationSet,
    replacements: &CaseVariationSet,
) -> Result<ContentEdit> {
    ensure_needle(needles)?;

    let mut out = content.to_string();
    let mut total = 0;

    for key in KEY_ORDER {
        let needle = needles.get(key);
        if needle.is_empty() {
            continue;
        }
        let count = out.matches(needle).count();
        if count == 0 {
            continue;
        }
        out = out.replace(needle, replacements.get(key));
        total += count;
    }

    Ok(ContentEdit {
        content: out,
        replacements: total,
    })
}

fn ensure_needle(needles: &CaseVariationSet) -> Result<()> {
    if needles.original.is_empty() {
        return Err(Error::empty_needle());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variations::variations;

    #[test]
    fn name_replaces_matched_variant() {
        let result = substitute_in_name(
            "thisIsAnExampleFile.txt",
            &variations("example"),
            &variations("sample"),
        )
        .unwrap();
        assert_eq!(result, "thisIsAnSampleFile.txt");
    }

    #[test]
    fn name_replaces_all_occurrences_of_one_variant() {
        let result = substitute_in_name(
            "example-example-file.txt",
            &variations("example"),
            &variations("sample"),
        )
        .unwrap();
        assert_eq!(result, "sample-sample-file.txt");
    }

    #[test]
    fn name_without_needle_is_unchanged() {
        let result = substitute_in_name(
            "unrelated.txt",
            &variations("example"),
            &variations("sample"),
        )
        .unwrap();
        assert_eq!(result, "unrelated.txt");
    }

    #[test]
    fn name_stops_at_first_matching_key() {
        // Both the camelCase and snake_case variants appear; only the
        // earlier key (camelCase) is substituted.
        let result = substitute_in_name(
            "myTerm_and_my_term.txt",
            &variations("myTerm"),
            &variations("newWord"),
        )
        .unwrap();
        assert_eq!(result, "newWord_and_my_term.txt");
    }

    #[test]
    fn content_replaces_every_variant() {
        let content = "let x = testString;\nlet y = test_string;\nTestString::new()";
        let result = substitute_in_content(
            content,
            &variations("testString"),
            &variations("demoExample"),
        )
        .unwrap();
        assert_eq!(
            result,
            "let x = demoExample;\nlet y = demo_example;\nDemoExample::new()"
        );
    }

    #[test]
    fn content_counts_replacements() {
        let edit = substitute_in_content_counted(
            "a test-string, a testString, another test-string",
            &variations("testString"),
            &variations("demoExample"),
        )
        .unwrap();
        assert_eq!(edit.replacements, 3);
        assert_eq!(
            edit.content,
            "a demo-example, a demoExample, another demo-example"
        );
    }

    #[test]
    fn content_without_needle_is_unchanged() {
        let edit = substitute_in_content_counted(
            "nothing to see",
            &variations("example"),
            &variations("sample"),
        )
        .unwrap();
        assert_eq!(edit.replacements, 0);
        assert_eq!(edit.content, "nothing to see");
    }

    #[test]
    fn identical_variants_are_a_noop_not_an_error() {
        // Replacement already present in the content
        let result = substitute_in_content(
            "keep sample here",
            &variations("sample"),
            &variations("sample"),
        )
        .unwrap();
        assert_eq!(result, "keep sample here");
    }

    #[test]
    fn empty_needle_fails_both_operations() {
        let needles = variations("");
        let replacements = variations("sample");

        let err = substitute_in_name("file.txt", &needles, &replacements).unwrap_err();
        assert_eq!(err.code.as_str(), "case.empty_needle");

        let err = substitute_in_content("content", &needles, &replacements).unwrap_err();
        assert_eq!(err.code.as_str(), "case.empty_needle");
    }
}
