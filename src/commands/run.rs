use clap::Args;
use serde::Serialize;

use recase::prompt::PromptEngine;
use recase::rename::{self, PlannedRename, RenameOptions, SkippedFile};
use recase::replace::{self, FileEdit, ReplaceOptions};
use recase::validation;

use crate::commands::{confirm_apply, confirm_empty_replacement, resolve_directory, CmdResult};

/// Rename files and replace content in one pass, renames first so the
/// content scan sees the final tree.
#[derive(Args)]
pub struct RunArgs {
    /// Directory to operate on
    pub directory: String,
    /// Substring to find, in any naming convention
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
    /// Filename glob patterns to exclude from content replacement
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude_patterns: Vec<String>,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RunOutput {
    #[serde(rename = "run")]
    Run {
        directory: String,
        needle: String,
        replacement: String,
        dry_run: bool,
        cancelled: bool,
        renames: Vec<PlannedRename>,
        rename_skipped: Vec<SkippedFile>,
        edits: Vec<FileEdit>,
        edit_skipped: Vec<SkippedFile>,
        applied: bool,
    },
}

pub fn run(args: RunArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RunOutput> {
    validation::require_non_empty(&args.needle, "needle", "The needle must not be empty")?;

    let root = resolve_directory(&args.directory);
    let rename_opts = RenameOptions {
        root: root.clone(),
        needle: args.needle.clone(),
        replacement: args.replacement.clone(),
        exclude_dirs: args.exclude_dirs.clone(),
    };
    let replace_opts = ReplaceOptions {
        root: root.clone(),
        needle: args.needle.clone(),
        replacement: args.replacement.clone(),
        exclude_dirs: args.exclude_dirs.clone(),
        exclude_patterns: args.exclude_patterns.clone(),
    };

    let mut rename_report = rename::plan_renames(&rename_opts)?;
    let mut replace_report = replace::plan_edits(&replace_opts)?;

    let mut cancelled = false;
    let nothing_planned = rename_report.renames.is_empty() && replace_report.edits.is_empty();

    if args.write && !nothing_planned {
        if confirmed(&args, &rename_report.renames, &replace_report.edits) {
            rename::apply_renames(&rename_opts, &mut rename_report)?;
            // Re-plan content edits against the renamed tree before writing
            replace_report = replace::plan_edits(&replace_opts)?;
            replace::apply_edits(&replace_opts, &mut replace_report)?;
        } else {
            cancelled = true;
        }
    }

    Ok((
        RunOutput::Run {
            directory: root.display().to_string(),
            needle: args.needle,
            replacement: args.replacement,
            dry_run: !args.write,
            cancelled,
            renames: rename_report.renames,
            rename_skipped: rename_report.skipped,
            edits: replace_report.edits,
            edit_skipped: replace_report.skipped,
            applied: rename_report.applied || replace_report.applied,
        },
        0,
    ))
}

fn confirmed(args: &RunArgs, renames: &[PlannedRename], edits: &[FileEdit]) -> bool {
    if args.yes {
        return true;
    }

    let prompt = PromptEngine::new();
    if args.replacement.is_empty() && !confirm_empty_replacement(&prompt, &args.needle) {
        return false;
    }

    let mut items: Vec<String> = renames
        .iter()
        .map(|r| format!("rename {} -> {}", r.from, r.to))
        .collect();
    items.extend(
        edits
            .iter()
            .map(|e| format!("edit {} ({} replacement(s))", e.file, e.replacements)),
    );
    confirm_apply(&prompt, "Planned changes:", items)
}
