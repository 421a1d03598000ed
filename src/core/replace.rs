//! Content replace flow: plan edits across a tree, then write them back.

use serde::Serialize;

use crate::core::text_files::{is_excluded, is_text_by_extension};
use crate::core::walk::walk_files;
use crate::error::{Error, Result};
use crate::rename::{relative, SkippedFile};
use crate::substitute::substitute_in_content_counted;
use crate::utils::io::write_file;
use crate::variations::variations;

#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    pub root: std::path::PathBuf,
    pub needle: String,
    pub replacement: String,
    pub exclude_dirs: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

/// An edit to apply to a file's content.
#[derive(Debug, Clone, Serialize)]
pub struct FileEdit {
    /// File path relative to root.
    pub file: String,
    /// Number of replacements in this file.
    pub replacements: usize,
    /// New content after all replacements.
    #[serde(skip)]
    pub new_content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplaceReport {
    pub edits: Vec<FileEdit>,
    pub skipped: Vec<SkippedFile>,
    pub applied: bool,
}

/// Plan content edits for every text file under the root containing any
/// needle variant. Non-text extensions, excluded patterns, and unreadable
/// files are passed over.
pub fn plan_edits(opts: &ReplaceOptions) -> Result<ReplaceReport> {
    if !opts.root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "directory",
            format!("'{}' is not a directory", opts.root.display()),
            Some(opts.root.display().to_string()),
        ));
    }
    if opts.needle.is_empty() {
        return Err(Error::empty_needle());
    }

    let needles = variations(&opts.needle);
    let replacements = variations(&opts.replacement);

    let mut edits = Vec::new();
    for file_path in walk_files(&opts.root, &opts.exclude_dirs) {
        let Some(name) = file_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_text_by_extension(name) || is_excluded(name, &opts.exclude_patterns) {
            continue;
        }

        // Unreadable or non-UTF-8 content: not a candidate, move on
        let Ok(content) = std::fs::read_to_string(&file_path) else {
            continue;
        };

        let edit = substitute_in_content_counted(&content, &needles, &replacements)?;
        if edit.replacements == 0 {
            continue;
        }

        edits.push(FileEdit {
            file: relative(&file_path, &opts.root),
            replacements: edit.replacements,
            new_content: edit.content,
        });
    }

    Ok(ReplaceReport {
        edits,
        skipped: Vec::new(),
        applied: false,
    })
}

/// Write planned edits back to disk. A failing write is recorded and
/// logged, then the run continues with the next file.
pub fn apply_edits(opts: &ReplaceOptions, report: &mut ReplaceReport) -> Result<()> {
    let mut skipped = Vec::new();

    for edit in &report.edits {
        let path = opts.root.join(&edit.file);
        match write_file(&path, &edit.new_content, "apply content edit") {
            Ok(()) => {
                crate::log_status!(
                    "replace",
                    "Replaced {} occurrence(s) in {}",
                    edit.replacements,
                    edit.file
                );
            }
            Err(e) => {
                crate::log_status!("replace", "Skipped {}: {}", edit.file, e);
                skipped.push(SkippedFile {
                    path: edit.file.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    report.skipped = skipped;
    report.applied = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn opts(root: &Path, needle: &str, replacement: &str) -> ReplaceOptions {
        ReplaceOptions {
            root: root.to_path_buf(),
            needle: needle.to_string(),
            replacement: replacement.to_string(),
            exclude_dirs: Vec::new(),
            exclude_patterns: Vec::new(),
        }
    }

    #[test]
    fn plans_edits_for_all_variants_in_one_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("code.rs"),
            "fn testString() {}\nconst A: &str = \"test_string\";\nstruct TestString;\n",
        )
        .unwrap();

        let report = plan_edits(&opts(dir.path(), "testString", "demoExample")).unwrap();

        assert_eq!(report.edits.len(), 1);
        assert_eq!(report.edits[0].replacements, 3);
        assert_eq!(
            report.edits[0].new_content,
            "fn demoExample() {}\nconst A: &str = \"demo_example\";\nstruct DemoExample;\n"
        );
    }

    #[test]
    fn skips_non_text_extensions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("image.png"), "widget").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "widget").unwrap();

        let report = plan_edits(&opts(dir.path(), "widget", "gadget")).unwrap();

        assert_eq!(report.edits.len(), 1);
        assert_eq!(report.edits[0].file, "notes.txt");
    }

    #[test]
    fn skips_excluded_patterns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.min.js"), "widget").unwrap();
        std::fs::write(dir.path().join("app.js"), "widget").unwrap();

        let mut options = opts(dir.path(), "widget", "gadget");
        options.exclude_patterns = vec!["*.min.js".to_string()];

        let report = plan_edits(&options).unwrap();
        assert_eq!(report.edits.len(), 1);
        assert_eq!(report.edits[0].file, "app.js");
    }

    #[test]
    fn plan_does_not_touch_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keep.txt");
        std::fs::write(&path, "widget here").unwrap();

        plan_edits(&opts(dir.path(), "widget", "gadget")).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "widget here");
    }

    #[test]
    fn apply_writes_edits_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "name = \"my-widget\"\nid = \"my_widget\"\n").unwrap();

        let options = opts(dir.path(), "my-widget", "our-gadget");
        let mut report = plan_edits(&options).unwrap();
        apply_edits(&options, &mut report).unwrap();

        assert!(report.applied);
        assert!(report.skipped.is_empty());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "name = \"our-gadget\"\nid = \"our_gadget\"\n"
        );
    }

    #[test]
    fn files_without_matches_are_not_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("other.txt"), "nothing relevant").unwrap();

        let report = plan_edits(&opts(dir.path(), "widget", "gadget")).unwrap();
        assert!(report.edits.is_empty());
    }

    #[test]
    fn empty_needle_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = plan_edits(&opts(dir.path(), "", "gadget")).unwrap_err();
        assert_eq!(err.code.as_str(), "case.empty_needle");
    }
}
