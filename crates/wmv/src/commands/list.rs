//! The `list` command.

use wmv::scenarios::registry;

/// Prints every built-in scenario's name and one-line description.
pub fn run() {
    for scenario in registry() {
        println!("{:<24}{}", scenario.name, scenario.description);
    }
}
