use clap::{Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod tty;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "recase")]
#[command(version = VERSION)]
#[command(about = "Rename files and replace content with naming-convention awareness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename files whose names contain the needle in any convention
    Rename(commands::rename::RenameArgs),
    /// Replace needle occurrences inside text file contents
    Replace(commands::replace::ReplaceArgs),
    /// Rename files and replace content in one pass
    Run(commands::run::RunArgs),
    /// Inspect and convert naming conventions directly
    Case(commands::case::CaseArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {};

    let (json_result, exit_code) = commands::run_json(cli.command, &global);

    if recase::output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
