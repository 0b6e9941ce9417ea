//! Program registry
//!
//! Collects bound commands under one root command, parses argv once and
//! dispatches to the selected handler.

use crate::cli::builder::{BoundCommand, Invocation};
use crate::cli::options::{self, StandardOptions};
use crate::error::{AppError, Result};
use crate::logging;
use clap::Command;
use std::ffi::OsString;

/// Root command plus the handlers of its subcommands
#[derive(Debug)]
pub struct Program {
    command: Command,
    commands: Vec<BoundCommand>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            command: Command::new(name.into())
                .subcommand_required(true)
                .arg_required_else_help(true),
            commands: Vec::new(),
        }
    }

    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.command = self.command.about(about.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.command = self.command.version(version.into()).propagate_version(true);
        self
    }

    /// Add a bound command as a subcommand
    ///
    /// # Panics
    ///
    /// Panics if a command with the same name is already registered.
    pub fn register(mut self, bound: BoundCommand) -> Self {
        assert!(
            self.command_names().all(|name| name != bound.name()),
            "command '{}' registered twice",
            bound.name()
        );
        self.command = self.command.subcommand(bound.command().clone());
        self.commands.push(bound);
        self
    }

    /// Root clap command, e.g. for generating completions
    pub fn command(&self) -> Command {
        self.command.clone()
    }

    /// Names of the registered commands, in registration order
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(BoundCommand::name)
    }

    /// Parse argv and select the command to run
    ///
    /// The first item is the binary name, as with `std::env::args_os`.
    /// `-cp` is accepted for `--config-path`.
    pub fn try_parse_from<I, T>(&self, args: I) -> Result<ParsedCommand<'_>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(options::normalize_args(args))?;

        let (name, sub_matches) = matches
            .subcommand()
            .ok_or_else(|| AppError::UnknownCommand(String::new()))?;

        let bound = self
            .commands
            .iter()
            .find(|bound| bound.name() == name)
            .ok_or_else(|| AppError::UnknownCommand(name.to_string()))?;

        Ok(ParsedCommand {
            invocation: bound.invocation(sub_matches)?,
            bound,
        })
    }

    /// Parse argv, configure logging from `--log-level`, run the handler
    pub fn run_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let parsed = self.try_parse_from(args)?;
        logging::init_logging(parsed.options().log_level.as_deref());
        parsed.dispatch()
    }
}

/// A parsed invocation waiting to be dispatched
#[derive(Debug)]
pub struct ParsedCommand<'a> {
    bound: &'a BoundCommand,
    invocation: Invocation,
}

impl ParsedCommand<'_> {
    pub fn name(&self) -> &str {
        self.bound.name()
    }

    pub fn options(&self) -> &StandardOptions {
        self.invocation.options()
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Run the bound handler and return its result
    pub fn dispatch(self) -> Result<()> {
        self.bound.dispatch(&self.invocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::arguments::ArgumentSpec;
    use crate::cli::builder::{build_and_bind, build_with_config};
    use serde_json::Value;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    fn program(log: Rc<RefCell<Vec<String>>>) -> Program {
        let balance_log = Rc::clone(&log);
        let config_log = Rc::clone(&log);

        Program::new("solcmd")
            .about("test program")
            .register(build_and_bind(
                "balance",
                vec![ArgumentSpec::required("address")],
                move |invocation| {
                    balance_log
                        .borrow_mut()
                        .push(format!("balance {}", invocation.argument("address").unwrap_or("")));
                    Ok(())
                },
                false,
            ))
            .register(build_with_config(
                "deploy",
                move |config: Value, _| {
                    config_log.borrow_mut().push(format!("deploy {}", config["program"]));
                    Ok(())
                },
                true,
            ))
    }

    #[test]
    fn test_command_names() {
        let program = program(Rc::default());
        let names: Vec<&str> = program.command_names().collect();
        assert_eq!(names, ["balance", "deploy"]);
    }

    #[test]
    fn test_dispatch_selected_command() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let program = program(Rc::clone(&log));

        let parsed = program
            .try_parse_from(["solcmd", "balance", "Vote111", "--env", "mainnet-beta"])
            .unwrap();
        assert_eq!(parsed.name(), "balance");
        assert_eq!(parsed.options().env, "mainnet-beta");
        parsed.dispatch().unwrap();

        assert_eq!(*log.borrow(), ["balance Vote111"]);
    }

    #[test]
    fn test_missing_subcommand() {
        let program = program(Rc::default());
        let err = program.try_parse_from(["solcmd"]).unwrap_err();
        assert!(matches!(err, AppError::Cli(_)));
    }

    #[test]
    fn test_subcommand_required_keypair() {
        let program = program(Rc::default());
        let err = program
            .try_parse_from(["solcmd", "deploy", "--config-path", "deploy.json"])
            .unwrap_err();
        match err {
            AppError::Cli(e) => {
                assert_eq!(e.kind(), clap::error::ErrorKind::MissingRequiredArgument)
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_run_config_command() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"program":"escrow"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let log = Rc::new(RefCell::new(Vec::new()));
        let program = program(Rc::clone(&log));
        program
            .run_from(["solcmd", "deploy", "-c", path.as_str(), "-k", "id.json"])
            .unwrap();

        assert_eq!(*log.borrow(), ["deploy \"escrow\""]);
    }

    #[test]
    fn test_run_propagates_missing_config() {
        let program = program(Rc::default());
        let err = program
            .run_from(["solcmd", "deploy", "-c", "/nonexistent/deploy.json", "-k", "id.json"])
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Config file does not exist at path '/nonexistent/deploy.json'"));
    }

    #[test]
    fn test_run_with_two_letter_config_flag() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"program":"vault"}}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let log = Rc::new(RefCell::new(Vec::new()));
        let program = program(Rc::clone(&log));
        program
            .run_from(["solcmd", "deploy", "-cp", path.as_str(), "-k", "id.json"])
            .unwrap();

        assert_eq!(*log.borrow(), ["deploy \"vault\""]);
    }

    #[test]
    #[should_panic(expected = "command 'balance' registered twice")]
    fn test_register_duplicate_name() {
        let _ = program(Rc::default()).register(build_and_bind(
            "balance",
            Vec::new(),
            |_| Ok(()),
            false,
        ));
    }
}
