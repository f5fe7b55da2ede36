use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

mod commands;
mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "tagswap")]
#[command(version = VERSION)]
#[command(about = "Replace tags across files using variant-specific configurations")]
struct Cli {
    /// Path to the JSON configuration
    config: PathBuf,

    /// What to do with the configured files
    #[arg(value_enum, ignore_case = true)]
    action: Action,

    /// Variant to apply (required for replace, ignored otherwise)
    variant: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Action {
    /// Apply a variant's replacements, backing each file up first
    Replace,
    /// Restore every configured file from its backup
    Revert,
    /// Show the configured files and variants
    Summarize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli);

    if output::print_json_result(json_result).is_err() {
        return ExitCode::from(1);
    }

    ExitCode::from(exit_code_to_u8(exit_code))
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
