//! Command handlers
//!
//! The subcommands of the bundled `solcmd` binary, each built through the
//! command builder.

pub mod completions;
pub mod config;
pub mod keypair;
pub mod options;

pub use completions::{completions_command, run_completions};
pub use config::{config_command, run_config};
pub use keypair::{keypair_command, run_keypair};
pub use options::{options_command, run_options};

use crate::cli::Program;

/// The `solcmd` program with every bundled command registered
pub fn program() -> Program {
    Program::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .register(options_command())
        .register(keypair_command())
        .register(config_command())
        .register(completions_command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_registers_all_commands() {
        let program = program();
        let names: Vec<&str> = program.command_names().collect();
        assert_eq!(names, ["options", "keypair", "config", "completions"]);
    }

    #[test]
    fn test_program_command_is_consistent() {
        program().command().debug_assert();
    }

    #[test]
    fn test_every_command_has_standard_options() {
        let program = program();
        for sub in program.command().get_subcommands() {
            for id in ["env", "rpc_url", "log_level", "keypair"] {
                assert!(
                    sub.get_arguments().any(|arg| arg.get_id() == id),
                    "{} is missing {}",
                    sub.get_name(),
                    id
                );
            }
        }
    }
}
