mod commands;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::compare_cmd::compare_command;
use crate::commands::completions_cmd::completions_command;
use crate::commands::presets_cmd::presets_command;
use crate::commands::simulate_cmd::simulate_command;
use clap::Parser;
use colonize::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(&args.log_level);
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd).await,
        cmd @ Commands::Compare { .. } => compare_command(cmd).await,
        Commands::Presets => presets_command(),
        Commands::Completions { shell } => {
            completions_command(shell);
            ExitCode::SUCCESS
        }
    }
}
