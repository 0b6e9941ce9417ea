//! Keypair command implementation
//!
//! Reads the `--keypair` file and prints its public key.

use crate::cli::builder::{build_and_bind, BoundCommand, Invocation};
use crate::cli::output::{format_arg, print_output, KeypairReport, OutputFormat};
use crate::domain::KeypairFile;
use crate::error::{AppError, Result};

/// `keypair [--format]`, key pair required
pub fn keypair_command() -> BoundCommand {
    build_and_bind("keypair", Vec::new(), run_keypair, true)
        .about("Show the public key of the wallet key pair")
        .arg(format_arg())
}

/// Execute the keypair command
pub fn run_keypair(invocation: &Invocation) -> Result<()> {
    let report = keypair_report(invocation)?;
    print_output(&report, OutputFormat::from_matches(invocation.matches())?)?;
    Ok(())
}

pub fn keypair_report(invocation: &Invocation) -> Result<KeypairReport> {
    let path = invocation
        .options()
        .keypair_path()
        .ok_or_else(|| AppError::handler("No keypair path given"))?;

    log::debug!("Reading keypair from {}", path.display());
    let keypair = KeypairFile::load(&path)?;

    Ok(KeypairReport {
        path: keypair.path().display().to_string(),
        pubkey: keypair.pubkey(),
    })
}
