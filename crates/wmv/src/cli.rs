//! CLI definitions and argument types.

use clap::{Parser, Subcommand};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure: bad arguments, a solver error, or a scenario
/// whose outcome did not match its expectation.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an unknown solver result (resource limit hit).
pub const EXIT_UNKNOWN: i32 = 2;

#[derive(Parser)]
#[command(name = "wmv")]
#[command(about = "Bounded, SMT-backed verifier for weak-memory event traces")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets the default log level to debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all log output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    /// Integer encoding for word- and rank-valued symbolic variables:
    /// `unbounded` (the default) or `bitvec=N`.
    #[arg(long, global = true, default_value = "unbounded")]
    pub int_encoding: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lists the built-in scenarios.
    List,
    /// Runs one or more built-in scenarios and checks the solver's
    /// outcome against what each scenario expects.
    Verify {
        /// Scenario names to run. Defaults to every built-in scenario.
        scenarios: Vec<String>,
    },
}
