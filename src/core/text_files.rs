//! Text-or-not decisions for the content replace flow.

use glob_match::glob_match;

/// Extensions treated as text; anything else is skipped by the content
/// flow rather than risk mangling a binary.
const TEXT_FILE_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".rst", ".log", ".csv",
    ".rs", ".py", ".rb", ".go", ".swift", ".kt", ".java", ".scala", ".groovy",
    ".c", ".cpp", ".cc", ".h", ".hpp", ".cs", ".m",
    ".js", ".jsx", ".mjs", ".ts", ".tsx", ".vue", ".svelte",
    ".html", ".xhtml", ".css", ".scss", ".less",
    ".php", ".phtml", ".twig", ".erb", ".jsp", ".asp", ".aspx",
    ".json", ".xml", ".yaml", ".yml", ".toml", ".ini", ".conf", ".cfg",
    ".properties", ".plist", ".env", ".lock",
    ".sh", ".bash", ".zsh", ".fish", ".ksh", ".csh", ".bat", ".cmd", ".ps1",
    ".sql", ".graphql", ".proto",
    ".ex", ".exs", ".erl", ".hs", ".ml", ".mli", ".clj", ".cljs", ".edn",
    ".lua", ".pl", ".pm", ".r", ".jl", ".dart", ".elm", ".nix", ".tex",
];

/// Guess whether a file is text from its filename extension.
pub(crate) fn is_text_by_extension(filename: &str) -> bool {
    let lower = filename.to_lowercase();
    TEXT_FILE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Match a filename against user exclude patterns ("*.min.js", "*.lock").
pub(crate) fn is_excluded(filename: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|pattern| glob_match(pattern, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_text_extensions() {
        assert!(is_text_by_extension("main.rs"));
        assert!(is_text_by_extension("config.JSON"));
        assert!(is_text_by_extension("notes.md"));
    }

    #[test]
    fn rejects_binary_extensions() {
        assert!(!is_text_by_extension("photo.png"));
        assert!(!is_text_by_extension("archive.zip"));
        assert!(!is_text_by_extension("binary"));
    }

    #[test]
    fn exclude_patterns_use_glob_syntax() {
        let patterns = vec!["*.min.js".to_string(), "Cargo.lock".to_string()];
        assert!(is_excluded("app.min.js", &patterns));
        assert!(is_excluded("Cargo.lock", &patterns));
        assert!(!is_excluded("app.js", &patterns));
    }
}
