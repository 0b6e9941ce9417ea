//! solcmd - inspect the standard options, key pair and config of a Solana CLI
//! invocation.

use solcmd::commands::program;
use solcmd::error::AppError;
use solcmd::logging::init_logging;

fn main() {
    let program = program();

    // Parse CLI arguments
    let parsed = match program.try_parse_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(AppError::Cli(e)) => e.exit(),
        Err(e) => fail(&e),
    };

    // Initialize logging from --log-level before any handler runs
    init_logging(parsed.options().log_level.as_deref());

    if let Err(e) = parsed.dispatch() {
        log::error!("{}", e);
        fail(&e);
    }
}

fn fail(err: &AppError) -> ! {
    print_error(err);
    std::process::exit(1);
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(solcmd::error::ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Pass the JSON settings file with --config-path <file>.");
        }
        AppError::Io(_) => {
            eprintln!();
            eprintln!("Hint: Check that the --keypair path exists and is readable.");
        }
        _ => {}
    }
}
