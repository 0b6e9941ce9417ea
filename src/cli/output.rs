//! Output formatting utilities
//!
//! Provides table, JSON and compact output for the bundled commands.

use crate::cli::options::optional_one;
use crate::error::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};

pub const FORMAT: &str = "format";

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

impl OutputFormat {
    /// Read `--format` from matches, falling back to the default
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(optional_one(matches, FORMAT)?.unwrap_or_default())
    }
}

/// `--format <table|json|compact>`
pub fn format_arg() -> Arg {
    Arg::new(FORMAT)
        .long("format")
        .help("Output format")
        .value_parser(value_parser!(OutputFormat))
        .default_value("table")
        .action(ArgAction::Set)
}

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", render(data, format))
}

/// Render output as a string
pub fn render<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => data.to_table(),
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Compact => data.to_compact(),
    }
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Resolved standard options for display
#[derive(Debug, Clone, Serialize)]
pub struct OptionsReport {
    pub command: String,
    pub env: String,
    pub cluster: Option<String>,
    pub rpc_url: Option<String>,
    pub log_level: Option<String>,
    pub keypair: Option<String>,
}

fn or_dash(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}

impl TableDisplay for OptionsReport {
    fn to_table(&self) -> String {
        format!(
            "Command:   {}\nEnv:       {}\nCluster:   {}\nRPC URL:   {}\nLog Level: {}\nKeypair:   {}",
            self.command,
            self.env,
            or_dash(&self.cluster),
            or_dash(&self.rpc_url),
            or_dash(&self.log_level),
            or_dash(&self.keypair)
        )
    }

    fn to_compact(&self) -> String {
        format!("{}@{} {}", self.command, self.env, or_dash(&self.rpc_url))
    }
}

/// Key-pair file summary
#[derive(Debug, Clone, Serialize)]
pub struct KeypairReport {
    pub path: String,
    pub pubkey: String,
}

impl TableDisplay for KeypairReport {
    fn to_table(&self) -> String {
        format!("Keypair: {}\nPubkey:  {}", self.path, self.pubkey)
    }

    fn to_compact(&self) -> String {
        self.pubkey.clone()
    }
}

/// Loaded config, or one value inside it
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ConfigView {
    pub value: serde_json::Value,
}

impl TableDisplay for ConfigView {
    fn to_table(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_else(|_| "null".to_string())
    }

    fn to_compact(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;
    use serde_json::json;

    fn report() -> OptionsReport {
        OptionsReport {
            command: "options".to_string(),
            env: "devnet".to_string(),
            cluster: Some("devnet".to_string()),
            rpc_url: Some("https://api.devnet.solana.com".to_string()),
            log_level: None,
            keypair: None,
        }
    }

    #[test]
    fn test_options_report_table() {
        let output = report().to_table();
        assert!(output.contains("https://api.devnet.solana.com"));
        assert!(output.contains("Log Level: -"));
    }

    #[test]
    fn test_options_report_json() {
        let output = render(&report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["env"], "devnet");
        assert_eq!(value["keypair"], serde_json::Value::Null);
    }

    #[test]
    fn test_config_view_compact() {
        let view = ConfigView {
            value: json!({ "a": 1 }),
        };
        assert_eq!(render(&view, OutputFormat::Compact), r#"{"a":1}"#);
    }

    #[test]
    fn test_format_arg() {
        let cmd = Command::new("test").arg(format_arg());
        let matches = cmd.clone().try_get_matches_from(["test"]).unwrap();
        assert_eq!(OutputFormat::from_matches(&matches).unwrap(), OutputFormat::Table);

        let matches = cmd.try_get_matches_from(["test", "--format", "json"]).unwrap();
        assert_eq!(OutputFormat::from_matches(&matches).unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_format_missing_from_command() {
        let matches = Command::new("test").try_get_matches_from(["test"]).unwrap();
        assert_eq!(OutputFormat::from_matches(&matches).unwrap(), OutputFormat::Table);
    }
}
