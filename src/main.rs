#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! dirtools — run small filesystem utilities by name.

mod cli;
mod commands;
mod files;
mod logging;
mod tree;
mod types;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::debug;

use cli::{Cli, RunContext, write_commands, write_error};
use commands::Registry;
use types::{CommandInfoOutput, ErrorOutput};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level);
    debug!("Parsed CLI arguments: {cli:?}");

    let ctx = RunContext::from(&cli);
    let registry = Registry::builtin();

    if cli.list_commands {
        let commands: Vec<CommandInfoOutput> =
            registry.commands().iter().map(CommandInfoOutput::from).collect();
        write_commands(&commands, ctx.json);
        return;
    }

    let Some((command, args)) = cli.invocation() else {
        Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "a COMMAND is required unless --list-commands is given",
            )
            .exit();
    };

    match registry.dispatch(command, args, &ctx) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_dispatch_error(&err, &registry);
            write_error(&error_output, ctx.json);
            std::process::exit(err.exit_code());
        }
    }
}
