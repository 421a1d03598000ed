use recase::prompt::{ConfirmListPrompt, PromptEngine, YesNoPrompt};

pub type CmdResult<T> = recase::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod case;
pub mod rename;
pub mod replace;
pub mod run;

/// Resolve a user-supplied directory argument (tilde expansion included).
pub(crate) fn resolve_directory(directory: &str) -> std::path::PathBuf {
    std::path::PathBuf::from(shellexpand::tilde(directory).to_string())
}

/// Extra confirmation when the replacement is empty: applying would strip
/// the needle out of names/content entirely.
pub(crate) fn confirm_empty_replacement(prompt: &PromptEngine, needle: &str) -> bool {
    prompt.yes_no(&YesNoPrompt {
        question: format!(
            "The replacement is empty; every occurrence of '{}' will be removed. Continue?",
            needle
        ),
        default: false,
    })
}

/// Show the planned changes and ask before applying them.
pub(crate) fn confirm_apply(prompt: &PromptEngine, header: &str, items: Vec<String>) -> bool {
    prompt.confirm_list(&ConfirmListPrompt {
        header: header.to_string(),
        items,
        confirm_question: "Apply these changes? This cannot be undone.".to_string(),
        default: false,
    })
}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        recase::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (recase::Result<serde_json::Value>, i32) {
    crate::tty::status("recase is working...");

    match command {
        crate::Commands::Rename(args) => dispatch!(args, global, rename),
        crate::Commands::Replace(args) => dispatch!(args, global, replace),
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::Case(args) => dispatch!(args, global, case),
    }
}
