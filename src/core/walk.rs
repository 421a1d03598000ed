//! Directory traversal shared by the rename and replace flows.

use std::path::{Path, PathBuf};

/// Dependency/VCS directories skipped at any depth, on top of the
/// user-supplied exclude list.
pub(crate) const ALWAYS_SKIP_DIRS: &[&str] = &["node_modules", "vendor", ".git", ".svn", ".hg"];

/// Collect every file under `root`, depth-first, skipping excluded
/// directory names. Directories themselves are never returned; only their
/// files are candidates for renaming or rewriting.
pub(crate) fn walk_files(root: &Path, exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    walk_recursive(root, exclude_dirs, &mut files);
    files
}

fn walk_recursive(dir: &Path, exclude_dirs: &[String], files: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            if ALWAYS_SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            if exclude_dirs.iter().any(|d| d == &name) {
                continue;
            }
            walk_recursive(&path, exclude_dirs, files);
        } else {
            files.push(path);
        }
    }
}
