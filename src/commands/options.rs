//! Options command implementation
//!
//! Prints the standard options as the builder resolved them.

use crate::cli::builder::{build_and_bind, BoundCommand, Invocation};
use crate::cli::output::{format_arg, print_output, OptionsReport, OutputFormat};
use crate::error::Result;

/// `options [--format]`, key pair optional
pub fn options_command() -> BoundCommand {
    build_and_bind("options", Vec::new(), run_options, false)
        .about("Show the resolved standard options")
        .arg(format_arg())
}

/// Execute the options command
pub fn run_options(invocation: &Invocation) -> Result<()> {
    let report = options_report(invocation);
    print_output(&report, OutputFormat::from_matches(invocation.matches())?)?;
    Ok(())
}

/// Collect the options shown by `options`
pub fn options_report(invocation: &Invocation) -> OptionsReport {
    let options = invocation.options();

    OptionsReport {
        command: invocation.command().to_string(),
        env: options.env.clone(),
        cluster: options.cluster().ok().map(|c| c.to_string()),
        rpc_url: options.resolved_rpc_url(),
        log_level: options.log_level.clone(),
        keypair: options
            .keypair_or_default()
            .map(|path| path.display().to_string()),
    }
}
