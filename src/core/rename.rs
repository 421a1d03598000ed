//! Filename rename flow: plan renames across a tree, then apply them.
//!
//! Planning and applying are separate steps so every rename target is
//! computed before the first rename executes, and so a dry run is just a
//! plan that never gets applied.

use serde::Serialize;
use std::path::Path;

use crate::core::walk::walk_files;
use crate::error::{Error, Result};
use crate::substitute::substitute_in_name;
use crate::variations::variations;

#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub root: std::path::PathBuf,
    pub needle: String,
    pub replacement: String,
    pub exclude_dirs: Vec<String>,
}

/// A planned file rename, paths relative to the root.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRename {
    pub from: String,
    pub to: String,
}

/// A file whose rename/write failed or was refused; the run continues.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub renames: Vec<PlannedRename>,
    pub skipped: Vec<SkippedFile>,
    pub applied: bool,
}

/// Plan renames for every file under the root whose name contains a
/// needle variant. Nothing touches the filesystem here.
pub fn plan_renames(opts: &RenameOptions) -> Result<RenameReport> {
    validate_root(&opts.root)?;
    if opts.needle.is_empty() {
        return Err(Error::empty_needle());
    }

    let needles = variations(&opts.needle);
    let replacements = variations(&opts.replacement);

    let mut renames = Vec::new();
    for file_path in walk_files(&opts.root, &opts.exclude_dirs) {
        let Some(name) = file_path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let new_name = substitute_in_name(name, &needles, &replacements)?;
        if new_name == name {
            continue;
        }

        let new_path = file_path.with_file_name(&new_name);
        renames.push(PlannedRename {
            from: relative(&file_path, &opts.root),
            to: relative(&new_path, &opts.root),
        });
    }

    Ok(RenameReport {
        renames,
        skipped: Vec::new(),
        applied: false,
    })
}

/// Apply a planned report to disk.
///
/// A failing rename is recorded and logged, then the run moves on to the
/// next file. A target that already exists is refused rather than
/// overwritten.
pub fn apply_renames(opts: &RenameOptions, report: &mut RenameReport) -> Result<()> {
    let mut skipped = Vec::new();

    for rename in &report.renames {
        let from = opts.root.join(&rename.from);
        let to = opts.root.join(&rename.to);

        let reason = if to.exists() {
            Some("target already exists".to_string())
        } else {
            std::fs::rename(&from, &to).err().map(|e| e.to_string())
        };

        match reason {
            None => {
                crate::log_status!("rename", "Renamed {} -> {}", rename.from, rename.to);
            }
            Some(reason) => {
                crate::log_status!("rename", "Skipped {}: {}", rename.from, reason);
                skipped.push(SkippedFile {
                    path: rename.from.clone(),
                    reason,
                });
            }
        }
    }

    report.skipped = skipped;
    report.applied = true;
    Ok(())
}

fn validate_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(Error::validation_invalid_argument(
            "directory",
            format!("'{}' is not a directory", root.display()),
            Some(root.display().to_string()),
        ));
    }
    Ok(())
}

pub(crate) fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
