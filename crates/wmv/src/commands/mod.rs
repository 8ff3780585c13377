//! Command implementations.
//!
//! Each submodule handles a specific CLI command.

mod list;
mod verify;

use crate::cli::{Cli, Commands, EXIT_FAILURE};

/// Dispatches the parsed CLI to the appropriate handler, returning a
/// process exit code.
pub fn run_command(cli: &Cli) -> i32 {
    if cli.int_encoding != "unbounded" {
        tracing::error!(encoding = %cli.int_encoding, "only the unbounded integer encoding is implemented");
        return EXIT_FAILURE;
    }

    match &cli.command {
        Commands::List => {
            list::run();
            crate::cli::EXIT_SUCCESS
        }
        Commands::Verify { scenarios } => verify::run(scenarios),
    }
}
