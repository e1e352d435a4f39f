use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::commands::base_commands::CliArgs;

pub fn completions_command(shell: Shell) {
    let mut command = CliArgs::command();
    generate(shell, &mut command, "colonize", &mut std::io::stdout());
}
