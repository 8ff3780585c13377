//! The `verify` command.

use tracing::{error, info};

use wmv_solve::{render, verify as solve_verify, Outcome};

use wmv::scenarios::{lookup, registry, ScenarioDef};

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS, EXIT_UNKNOWN};

/// Runs `names` (every built-in scenario if empty), reports the solver's
/// outcome for each, and returns the process exit code.
pub fn run(names: &[String]) -> i32 {
    let defs = match resolve(names) {
        Ok(defs) => defs,
        Err(name) => {
            error!(scenario = %name, "unknown scenario; run `wmv list` to see the built-in scenarios");
            return EXIT_FAILURE;
        }
    };

    let mut exit_code = EXIT_SUCCESS;
    for def in defs {
        let inputs = (def.build)();
        let outcome = match solve_verify(&inputs.trace, inputs.mode, &inputs.violation, &inputs.progress, None) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(scenario = def.name, %err, "solver invocation failed");
                exit_code = exit_code.max(EXIT_FAILURE);
                continue;
            }
        };

        match &outcome {
            Outcome::Unsat => info!(scenario = def.name, expected = %inputs.expectation, "unsat"),
            Outcome::Sat(witness) => {
                info!(scenario = def.name, expected = %inputs.expectation, "sat");
                for line in render(witness).lines() {
                    info!("  {line}");
                }
            }
            Outcome::Unknown(reason) => {
                info!(scenario = def.name, expected = %inputs.expectation, reason = %reason, "unknown");
            }
        }

        if matches!(outcome, Outcome::Unknown(_)) {
            exit_code = exit_code.max(EXIT_UNKNOWN);
        } else if !inputs.expectation.matches(&outcome) {
            error!(scenario = def.name, expected = %inputs.expectation, got = ?outcome, "scenario did not match its expectation");
            exit_code = exit_code.max(EXIT_FAILURE);
        }
    }
    exit_code
}

fn resolve(names: &[String]) -> Result<Vec<ScenarioDef>, String> {
    if names.is_empty() {
        return Ok(registry());
    }
    names.iter().map(|name| lookup(name).ok_or_else(|| name.clone())).collect()
}
