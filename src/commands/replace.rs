use clap::Args;
use serde::Serialize;

use recase::prompt::PromptEngine;
use recase::rename::SkippedFile;
use recase::replace::{self, FileEdit, ReplaceOptions};
use recase::validation;

use crate::commands::{confirm_apply, confirm_empty_replacement, resolve_directory, CmdResult};

#[derive(Args)]
pub struct ReplaceArgs {
    /// Directory to replace file contents in
    pub directory: String,
    /// Substring to find in file contents, in any naming convention
    #[arg(short, long)]
    pub needle: String,
    /// Substring to replace the needle with (empty removes the needle)
    #[arg(short, long, default_value = "")]
    pub replacement: String,
    /// Apply changes to disk (default is dry-run)
    #[arg(long)]
    pub write: bool,
    /// Skip confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,
    /// Directory names to exclude from traversal
    #[arg(long = "exclude-dir", value_name = "NAME")]
    pub exclude_dirs: Vec<String>,
    /// Filename glob patterns to exclude (e.g. "*.min.js")
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude_patterns: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum ReplaceOutput {
    #[serde(rename = "replace")]
    Replace {
        directory: String,
        needle: String,
        replacement: String,
        dry_run: bool,
        cancelled: bool,
        total_files: usize,
        total_replacements: usize,
        edits: Vec<FileEdit>,
        skipped: Vec<SkippedFile>,
        applied: bool,
    },
}

pub fn run(args: ReplaceArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ReplaceOutput> {
    validation::require_non_empty(&args.needle, "needle", "The needle must not be empty")?;

    let root = resolve_directory(&args.directory);
    let opts = ReplaceOptions {
        root,
        needle: args.needle.clone(),
        replacement: args.replacement.clone(),
        exclude_dirs: args.exclude_dirs.clone(),
        exclude_patterns: args.exclude_patterns.clone(),
    };

    let mut report = replace::plan_edits(&opts)?;

    let mut cancelled = false;
    if args.write && !report.edits.is_empty() {
        if confirmed(&args, &report.edits) {
            replace::apply_edits(&opts, &mut report)?;
        } else {
            cancelled = true;
        }
    }

    let total_replacements = report.edits.iter().map(|e| e.replacements).sum();

    Ok((
        ReplaceOutput::Replace {
            directory: opts.root.display().to_string(),
            needle: args.needle,
            replacement: args.replacement,
            dry_run: !args.write,
            cancelled,
            total_files: report.edits.len(),
            total_replacements,
            edits: report.edits,
            skipped: report.skipped,
            applied: report.applied,
        },
        0,
    ))
}

fn confirmed(args: &ReplaceArgs, edits: &[FileEdit]) -> bool {
    if args.yes {
        return true;
    }

    let prompt = PromptEngine::new();
    if args.replacement.is_empty() && !confirm_empty_replacement(&prompt, &args.needle) {
        return false;
    }

    let items = edits
        .iter()
        .map(|e| format!("{} ({} replacement(s))", e.file, e.replacements))
        .collect();
    confirm_apply(&prompt, "Planned content edits:", items)
}
