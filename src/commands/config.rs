//! Config command implementation
//!
//! Prints the JSON config passed with `--config-path`, or one value in it.

use crate::cli::arguments::ArgumentSpec;
use crate::cli::builder::{build_with_args_and_config, BoundCommand, Invocation};
use crate::cli::output::{format_arg, print_output, ConfigView, OutputFormat};
use crate::error::{AppError, Result};
use serde_json::Value;

/// `config [pointer] --config-path <file>`, key pair optional
pub fn config_command() -> BoundCommand {
    build_with_args_and_config(
        "config",
        vec![ArgumentSpec::optional("pointer")
            .description("JSON pointer into the config, e.g. /mint/decimals")],
        run_config,
        false,
    )
    .about("Show the loaded config file")
    .arg(format_arg())
}

/// Execute the config command
pub fn run_config(config: Value, invocation: &Invocation) -> Result<()> {
    let view = select(config, invocation.argument("pointer"))?;
    print_output(&view, OutputFormat::from_matches(invocation.matches())?)?;
    Ok(())
}

/// Narrow the config to the value at `pointer`
pub fn select(config: Value, pointer: Option<&str>) -> Result<ConfigView> {
    let value = match pointer {
        None | Some("") => config,
        Some(pointer) => config
            .pointer(pointer)
            .cloned()
            .ok_or_else(|| AppError::handler(format!("No value at '{}' in config", pointer)))?,
    };

    Ok(ConfigView { value })
}
