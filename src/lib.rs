//! solcmd - command builder helpers for Solana CLI tools
//!
//! Gives every subcommand the same standard options (`--env`, `--rpc-url`,
//! `--log-level`, `--keypair`) and, for config-aware commands, loads the JSON
//! file named by `--config-path` before calling the handler.
//!
//! # Modules
//!
//! - [`cli`]: Command builder, standard options, program registry
//! - [`commands`]: Commands of the bundled binary
//! - [`config`]: Config file loading
//! - [`domain`]: Cluster and key-pair types
//! - [`error`]: Error types
//! - [`logging`]: Logger setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use cli::{
    build_and_bind, build_base_command, build_with_args_and_config, build_with_config,
    build_with_positional_args, ArgumentSpec, BoundCommand, Invocation, Program,
    StandardOptions,
};
pub use config::{load_config, CommandConfig};
pub use error::{AppError, Result};
