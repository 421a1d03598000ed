use clap::Args;
use serde::Serialize;

use recase::prompt::PromptEngine;
use recase::rename::{self, PlannedRename, RenameOptions, SkippedFile};
use recase::validation;

use crate::commands::{confirm_apply, confirm_empty_replacement, resolve_directory, CmdResult};

#[derive(Args)]
pub struct RenameArgs {
    /// Directory to rename files in
    pub directory: String,
    /// Substring to find in file names, in any naming convention
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
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "rename")]
    Rename {
        directory: String,
        needle: String,
        replacement: String,
        dry_run: bool,
        cancelled: bool,
        total_renames: usize,
        renames: Vec<PlannedRename>,
        skipped: Vec<SkippedFile>,
        applied: bool,
    },
}

pub fn run(args: RenameArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<RenameOutput> {
    validation::require_non_empty(&args.needle, "needle", "The needle must not be empty")?;

    let root = resolve_directory(&args.directory);
    let opts = RenameOptions {
        root,
        needle: args.needle.clone(),
        replacement: args.replacement.clone(),
        exclude_dirs: args.exclude_dirs.clone(),
    };

    let mut report = rename::plan_renames(&opts)?;

    let mut cancelled = false;
    if args.write && !report.renames.is_empty() {
        if confirmed(&args, &report.renames) {
            rename::apply_renames(&opts, &mut report)?;
        } else {
            cancelled = true;
        }
    }

    Ok((
        RenameOutput::Rename {
            directory: opts.root.display().to_string(),
            needle: args.needle,
            replacement: args.replacement,
            dry_run: !args.write,
            cancelled,
            total_renames: report.renames.len(),
            renames: report.renames,
            skipped: report.skipped,
            applied: report.applied,
        },
        0,
    ))
}

/// Dry runs never prompt; `--yes` answers every prompt; otherwise the
/// planned renames are shown and confirmed interactively (a non-TTY run
/// without `--yes` resolves to "no").
fn confirmed(args: &RenameArgs, renames: &[PlannedRename]) -> bool {
    if args.yes {
        return true;
    }

    let prompt = PromptEngine::new();
    if args.replacement.is_empty() && !confirm_empty_replacement(&prompt, &args.needle) {
        return false;
    }

    let items = renames
        .iter()
        .map(|r| format!("{} -> {}", r.from, r.to))
        .collect();
    confirm_apply(&prompt, "Planned renames:", items)
}
