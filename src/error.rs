//! Unified error types for solcmd
//!
//! This module defines all error types used throughout the crate.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Argument parsing failed (missing required option, bad value, help requested)
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Error from configuration loading/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from domain type validation
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// A declared argument was read back with the wrong type
    #[error("Cannot read argument '{id}': {source}")]
    Matches {
        id: String,
        #[source]
        source: clap::parser::MatchesError,
    },

    /// Parsed subcommand has no bound handler
    #[error("No handler bound for command '{0}'")]
    UnknownCommand(String),

    /// A command handler reported a failure
    #[error("{0}")]
    Handler(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Build a handler failure from any displayable error
    pub fn handler(err: impl std::fmt::Display) -> Self {
        AppError::Handler(err.to_string())
    }
}

/// Errors from domain type validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Environment name is not a known cluster
    #[error("Unknown cluster '{0}' (expected mainnet-beta, testnet, devnet or localnet)")]
    UnknownCluster(String),

    /// Key-pair file contents are not a Solana key pair
    #[error("Invalid keypair file '{path}': {message}")]
    InvalidKeypair { path: String, message: String },
}

/// Errors from configuration loading and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Config file does not exist at path '{0}'")]
    FileNotFound(String),

    /// Config-aware command invoked without a config path
    #[error("The config path is undefined")]
    MissingConfigPath,

    /// Config file exists but could not be read
    #[error("Failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
