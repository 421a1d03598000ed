//! Data-driven interactive prompts.
//!
//! Confirmation is injected as a capability: commands hold a
//! [`PromptEngine`] and the rename/replace flows stay pure. Non-interactive
//! runs (no TTY, or `--yes`) resolve every prompt to its default.

use std::io::{self, BufRead, IsTerminal, Write};

/// A yes/no confirmation prompt.
pub struct YesNoPrompt {
    pub question: String,
    /// true = default yes [Y/n], false = default no [y/N]
    pub default: bool,
}

/// Review a list of items and confirm.
pub struct ConfirmListPrompt {
    pub header: String,
    pub items: Vec<String>,
    pub confirm_question: String,
    pub default: bool,
}

pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    /// Create engine with automatic TTY detection.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal() && io::stdout().is_terminal(),
        }
    }

    /// Force non-interactive mode (useful for --yes flags).
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Run a yes/no prompt. Returns default if non-interactive.
    pub fn yes_no(&self, prompt: &YesNoPrompt) -> bool {
        if !self.interactive {
            return prompt.default;
        }

        let suffix = if prompt.default { "[Y/n]" } else { "[y/N]" };
        eprint!("{} {}: ", prompt.question, suffix);
        io::stderr().flush().ok();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return prompt.default;
        }

        let trimmed = input.trim().to_lowercase();
        if trimmed.is_empty() {
            return prompt.default;
        }

        trimmed.starts_with('y')
    }

    /// Run a confirm list prompt (show items, ask confirmation).
    pub fn confirm_list(&self, prompt: &ConfirmListPrompt) -> bool {
        if !self.interactive {
            return prompt.default;
        }

        eprintln!("{}", prompt.header);
        for item in &prompt.items {
            eprintln!("  {} {}", '\u{2022}', item);
        }
        eprintln!();

        self.yes_no(&YesNoPrompt {
            question: prompt.confirm_question.clone(),
            default: prompt.default,
        })
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_yes_no_returns_default() {
        let engine = PromptEngine::non_interactive();
        assert!(engine.yes_no(&YesNoPrompt {
            question: "proceed?".to_string(),
            default: true,
        }));
        assert!(!engine.yes_no(&YesNoPrompt {
            question: "proceed?".to_string(),
            default: false,
        }));
    }

    #[test]
    fn non_interactive_confirm_list_returns_default() {
        let engine = PromptEngine::non_interactive();
        let prompt = ConfirmListPrompt {
            header: "Planned:".to_string(),
            items: vec!["a -> b".to_string()],
            confirm_question: "Apply?".to_string(),
            default: false,
        };
        assert!(!engine.confirm_list(&prompt));
    }
}
