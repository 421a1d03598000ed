use clap::{Args, Subcommand};
use serde::Serialize;

use recase::case::convert;
use recase::convention::{classify, Convention};
use recase::variations::{variations, CaseVariationSet};

use crate::commands::CmdResult;

#[derive(Args)]
pub struct CaseArgs {
    #[command(subcommand)]
    command: CaseCommand,
}

#[derive(Subcommand)]
enum CaseCommand {
    /// Detect the naming convention of a string
    Classify {
        /// String to classify
        value: String,
    },
    /// Convert a string into a target convention
    Convert {
        /// String to convert
        value: String,
        /// Target convention: snake_case, kebab-case, camelCase, PascalCase, other
        #[arg(long)]
        to: String,
    },
    /// Generate all convention-variants of a string
    Variations {
        /// String to generate variants for
        value: String,
    },
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum CaseOutput {
    #[serde(rename = "case.classify")]
    Classify { input: String, convention: Convention },
    #[serde(rename = "case.convert")]
    Convert {
        input: String,
        to: Convention,
        output: String,
    },
    #[serde(rename = "case.variations")]
    Variations {
        input: String,
        detected: Convention,
        variations: CaseVariationSet,
    },
}

pub fn run(args: CaseArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<CaseOutput> {
    match args.command {
        CaseCommand::Classify { value } => Ok((
            CaseOutput::Classify {
                convention: classify(&value),
                input: value,
            },
            0,
        )),
        CaseCommand::Convert { value, to } => {
            let target = Convention::from_str(&to)?;
            Ok((
                CaseOutput::Convert {
                    output: convert(&value, target),
                    input: value,
                    to: target,
                },
                0,
            ))
        }
        CaseCommand::Variations { value } => Ok((
            CaseOutput::Variations {
                detected: classify(&value),
                variations: variations(&value),
                input: value,
            },
            0,
        )),
    }
}
