//! Completions command implementation

use crate::cli::arguments::ArgumentSpec;
use crate::cli::builder::{build_and_bind, BoundCommand, Invocation};
use crate::error::{AppError, Result};
use clap::ValueEnum;
use clap_complete::Shell;
use std::io::Write;

/// `completions <shell>`
pub fn completions_command() -> BoundCommand {
    let shells = Shell::value_variants()
        .iter()
        .filter_map(|shell| shell.to_possible_value())
        .map(|value| value.get_name().to_string());

    build_and_bind(
        "completions",
        vec![ArgumentSpec::required("shell")
            .description("Shell to generate completions for")
            .choices(shells)],
        run_completions,
        false,
    )
    .about("Generate shell completions")
}

/// Execute the completions command
pub fn run_completions(invocation: &Invocation) -> Result<()> {
    let shell = parse_shell(invocation.argument("shell").unwrap_or_default())?;
    let mut stdout = std::io::stdout();
    generate(shell, &mut stdout);
    stdout.flush()?;
    Ok(())
}

/// Write completions for the bundled program
pub fn generate(shell: Shell, out: &mut dyn Write) {
    let mut cmd = super::program().command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

fn parse_shell(name: &str) -> Result<Shell> {
    <Shell as ValueEnum>::from_str(name, true).map_err(AppError::Handler)
}
