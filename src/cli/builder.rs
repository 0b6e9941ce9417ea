//! Command builder
//!
//! Produces clap commands carrying the standard options and binds them to
//! handlers. Config-aware variants load the `--config-path` JSON file before
//! the handler runs.

use crate::cli::arguments::ArgumentSpec;
use crate::cli::options::{self, StandardOptions};
use crate::config::{load_validated_config, CommandConfig};
use crate::error::{ConfigError, Result};
use crate::logging;
use clap::{Arg, ArgMatches, Command};
use std::ffi::OsString;

/// Handler invoked with the parsed values of a bound command
pub type Handler = Box<dyn Fn(&Invocation) -> Result<()>>;

/// Command with the standard options attached
///
/// `--keypair` is required when `require_keypair` is set.
pub fn build_base_command(name: impl Into<String>, require_keypair: bool) -> Command {
    Command::new(name.into()).args(options::standard_args(require_keypair))
}

/// [`build_base_command`] plus positional arguments, appended in order
pub fn build_with_positional_args(
    name: impl Into<String>,
    arguments: &[ArgumentSpec],
    require_keypair: bool,
) -> Command {
    arguments
        .iter()
        .fold(build_base_command(name, require_keypair), |command, spec| {
            command.arg(spec.to_arg())
        })
}

/// Build a command and bind `handler` to it
///
/// On invocation the handler receives the parsed options and positional
/// values unchanged. Its result is returned to whoever invoked the command.
pub fn build_and_bind<F>(
    name: impl Into<String>,
    arguments: Vec<ArgumentSpec>,
    handler: F,
    require_keypair: bool,
) -> BoundCommand
where
    F: Fn(&Invocation) -> Result<()> + 'static,
{
    let command = build_with_positional_args(name, &arguments, require_keypair);
    BoundCommand::new(command, arguments, Box::new(handler))
}

/// Config-aware command without positional arguments
pub fn build_with_config<C, F>(
    name: impl Into<String>,
    handler: F,
    require_keypair: bool,
) -> BoundCommand
where
    C: CommandConfig + 'static,
    F: Fn(C, &Invocation) -> Result<()> + 'static,
{
    build_with_args_and_config(name, Vec::new(), handler, require_keypair)
}

/// Config-aware command with positional arguments
///
/// Declares a required `--config-path`. The file is read and parsed into `C`
/// on every invocation, then passed to the handler ahead of the invocation.
pub fn build_with_args_and_config<C, F>(
    name: impl Into<String>,
    arguments: Vec<ArgumentSpec>,
    handler: F,
    require_keypair: bool,
) -> BoundCommand
where
    C: CommandConfig + 'static,
    F: Fn(C, &Invocation) -> Result<()> + 'static,
{
    let command = build_with_positional_args(name, &arguments, require_keypair)
        .arg(options::config_path_arg());

    let action = move |invocation: &Invocation| {
        let path = invocation
            .options()
            .config_path
            .as_deref()
            .ok_or(ConfigError::MissingConfigPath)?;

        let config: C = load_validated_config(path)?;
        handler(config, invocation)
    };

    BoundCommand::new(command, arguments, Box::new(action))
}

/// Values a handler receives
#[derive(Debug, Clone)]
pub struct Invocation {
    command: String,
    options: StandardOptions,
    arguments: Vec<(String, Vec<String>)>,
    matches: ArgMatches,
}

impl Invocation {
    /// Name of the invoked command
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Standard option values
    pub fn options(&self) -> &StandardOptions {
        &self.options
    }

    /// First value of a positional argument
    pub fn argument(&self, name: &str) -> Option<&str> {
        self.argument_values(name).first().map(String::as_str)
    }

    /// All values of a positional argument (several for variadic ones)
    pub fn argument_values(&self, name: &str) -> &[String] {
        self.arguments
            .iter()
            .find(|(arg, _)| arg == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Positional arguments in declaration order
    pub fn arguments(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.arguments
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Raw matches, for options added with [`BoundCommand::arg`]
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }
}

/// A command bound to its handler
pub struct BoundCommand {
    command: Command,
    arguments: Vec<ArgumentSpec>,
    handler: Handler,
}

impl BoundCommand {
    fn new(command: Command, arguments: Vec<ArgumentSpec>, handler: Handler) -> Self {
        Self {
            command,
            arguments,
            handler,
        }
    }

    pub fn name(&self) -> &str {
        self.command.get_name()
    }

    /// The underlying clap command
    pub fn command(&self) -> &Command {
        &self.command
    }

    /// Set the help description
    pub fn about(mut self, about: impl Into<String>) -> Self {
        self.command = self.command.about(about.into());
        self
    }

    /// Declare an extra option on top of the standard ones
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.command = self.command.arg(arg);
        self
    }

    /// Collect the handler input from matches of this command
    pub fn invocation(&self, matches: &ArgMatches) -> Result<Invocation> {
        let arguments = self
            .arguments
            .iter()
            .map(|spec| {
                let values = options::optional_many::<String>(matches, spec.name())?;
                Ok((spec.name().to_string(), values))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Invocation {
            command: self.name().to_string(),
            options: StandardOptions::from_matches(matches)?,
            arguments,
            matches: matches.clone(),
        })
    }

    /// Run the handler with already-parsed matches
    ///
    /// A `--log-level` value is applied to the logger before the handler runs.
    pub fn call(&self, matches: &ArgMatches) -> Result<()> {
        let invocation = self.invocation(matches)?;
        if let Some(level) = invocation.options().log_level.as_deref() {
            logging::init_logging(Some(level));
        }
        self.dispatch(&invocation)
    }

    pub(crate) fn dispatch(&self, invocation: &Invocation) -> Result<()> {
        log::debug!("Running command '{}'", invocation.command());
        (self.handler)(invocation)
    }

    /// Parse `args` against this command alone and run the handler
    ///
    /// The first item is the binary name, as with `std::env::args_os`.
    pub fn try_run_from<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let matches = self
            .command
            .clone()
            .try_get_matches_from(options::normalize_args(args))?;
        self.call(&matches)
    }
}

impl std::fmt::Debug for BoundCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundCommand")
            .field("name", &self.name())
            .field("arguments", &self.arguments)
            .finish_non_exhaustive()
    }
}
