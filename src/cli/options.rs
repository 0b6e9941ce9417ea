//! Standard options shared by every built command
//!
//! Declares `--env`, `--rpc-url`, `--log-level`, `--keypair` and
//! `--config-path`, and reads their parsed values back out of `ArgMatches`.

use crate::domain::{default_keypair_path, expand_tilde, Cluster};
use crate::error::{AppError, DomainError, Result};
use clap::parser::MatchesError;
use clap::{value_parser, Arg, ArgAction, ArgMatches};
use serde::Serialize;
use std::any::Any;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment name used when `--env` is not given
pub const DEFAULT_ENV: &str = "devnet";

/// Environment variable read when `--rpc-url` is not given
pub const RPC_URL_ENV: &str = "RPC_URL";

pub const ENV: &str = "env";
pub const RPC_URL: &str = "rpc_url";
pub const LOG_LEVEL: &str = "log_level";
pub const KEYPAIR: &str = "keypair";
pub const CONFIG_PATH: &str = "config_path";

/// Two-letter short form of `--config-path`
pub const CONFIG_PATH_SHORT: &str = "-cp";

/// `-e, --env <string>`
pub fn env_arg() -> Arg {
    Arg::new(ENV)
        .short('e')
        .long("env")
        .value_name("string")
        .help("Solana cluster env name")
        .default_value(DEFAULT_ENV)
        .action(ArgAction::Set)
}

/// `-r, --rpc-url <string>`
pub fn rpc_url_arg() -> Arg {
    Arg::new(RPC_URL)
        .short('r')
        .long("rpc-url")
        .value_name("string")
        .help("Solana cluster rpc-url")
        .env(RPC_URL_ENV)
        .action(ArgAction::Set)
}

/// `-l, --log-level <string>`
pub fn log_level_arg() -> Arg {
    Arg::new(LOG_LEVEL)
        .short('l')
        .long("log-level")
        .value_name("string")
        .help("log level")
        .action(ArgAction::Set)
}

/// `-k, --keypair <path>`
pub fn keypair_arg(required: bool) -> Arg {
    Arg::new(KEYPAIR)
        .short('k')
        .long("keypair")
        .value_name("path")
        .help("Solana wallet location")
        .value_parser(value_parser!(PathBuf))
        .required(required)
        .action(ArgAction::Set)
}

/// `-c, --config-path <string>`, also accepted as `--cp`
pub fn config_path_arg() -> Arg {
    Arg::new(CONFIG_PATH)
        .short('c')
        .long("config-path")
        .visible_alias("cp")
        .value_name("string")
        .help("JSON file with namespace settings")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .action(ArgAction::Set)
}

/// Rewrite `-cp` to `--config-path` ahead of parsing
///
/// clap short flags are single characters, so `-cp <file>` would otherwise
/// read as `-c` with the value `p`. Tokens after `--` are left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut escaped = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if escaped {
                return arg;
            }
            if arg == "--" {
                escaped = true;
                return arg;
            }
            if arg == CONFIG_PATH_SHORT {
                return OsString::from("--config-path");
            }
            match arg.to_str().and_then(|s| s.strip_prefix("-cp=")) {
                Some(value) => OsString::from(format!("--config-path={}", value)),
                None => arg,
            }
        })
        .collect()
}

/// Read a single value, treating an id the command never declared as absent
///
/// A declared id read with the wrong type is an error.
pub fn optional_one<T>(matches: &ArgMatches, id: &str) -> Result<Option<T>>
where
    T: Any + Clone + Send + Sync + 'static,
{
    match matches.try_get_one::<T>(id) {
        Ok(value) => Ok(value.cloned()),
        Err(MatchesError::UnknownArgument { .. }) => Ok(None),
        Err(source) => Err(AppError::Matches {
            id: id.to_string(),
            source,
        }),
    }
}

/// Read all values of an argument, with the same rules as [`optional_one`]
pub fn optional_many<T>(matches: &ArgMatches, id: &str) -> Result<Vec<T>>
where
    T: Any + Clone + Send + Sync + 'static,
{
    match matches.try_get_many::<T>(id) {
        Ok(values) => Ok(values.map(|values| values.cloned().collect()).unwrap_or_default()),
        Err(MatchesError::UnknownArgument { .. }) => Ok(Vec::new()),
        Err(source) => Err(AppError::Matches {
            id: id.to_string(),
            source,
        }),
    }
}

/// The four options attached to every command
pub fn standard_args(require_keypair: bool) -> [Arg; 4] {
    [
        env_arg(),
        rpc_url_arg(),
        log_level_arg(),
        keypair_arg(require_keypair),
    ]
}

/// Parsed values of the standard options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandardOptions {
    /// Cluster environment name, unvalidated
    pub env: String,
    /// Explicit RPC endpoint
    pub rpc_url: Option<String>,
    /// Log filter, forwarded to the logger unchanged
    pub log_level: Option<String>,
    /// Wallet key-pair path as given
    pub keypair: Option<PathBuf>,
    /// Config file path (config-aware commands only)
    pub config_path: Option<PathBuf>,
}

impl Default for StandardOptions {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
            rpc_url: None,
            log_level: None,
            keypair: None,
            config_path: None,
        }
    }
}

impl StandardOptions {
    /// Read the standard options from parsed matches
    ///
    /// Options the command never declared read as absent; an id declared
    /// with a different value type is an error.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            env: optional_one::<String>(matches, ENV)?.unwrap_or_else(|| DEFAULT_ENV.to_string()),
            rpc_url: optional_one(matches, RPC_URL)?,
            log_level: optional_one::<String>(matches, LOG_LEVEL)?
                .filter(|level| !level.is_empty()),
            keypair: optional_one(matches, KEYPAIR)?,
            config_path: optional_one(matches, CONFIG_PATH)?,
        })
    }

    /// The cluster named by `--env`
    pub fn cluster(&self) -> std::result::Result<Cluster, DomainError> {
        self.env.parse()
    }

    /// Explicit `--rpc-url`, else the default endpoint of a known cluster
    pub fn resolved_rpc_url(&self) -> Option<String> {
        self.rpc_url
            .clone()
            .or_else(|| self.cluster().ok().map(|c| c.rpc_url().to_string()))
    }

    /// `--keypair` with a leading `~` expanded
    pub fn keypair_path(&self) -> Option<PathBuf> {
        self.keypair.as_ref().map(expand_tilde)
    }

    /// `--keypair`, or the Solana CLI default location when absent
    pub fn keypair_or_default(&self) -> Option<PathBuf> {
        self.keypair_path().or_else(default_keypair_path)
    }
}
