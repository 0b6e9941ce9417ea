//! Configuration system
//!
//! Handles loading the JSON config file passed to config-aware commands
//! through `--config-path`.

pub mod file;

pub use file::{load_config, load_validated_config, ConfigFile};

use crate::error::ConfigError;
use serde::de::DeserializeOwned;

/// A configuration type a command can receive
///
/// Implement this for a strongly-typed per-command config. `validate` runs
/// once after the file is parsed and before the handler is called.
pub trait CommandConfig: DeserializeOwned {
    /// Check invariants serde cannot express
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// Untyped configuration, no schema enforced
impl CommandConfig for serde_json::Value {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct MintConfig {
        supply: u64,
    }

    impl CommandConfig for MintConfig {
        fn validate(&self) -> Result<(), ConfigError> {
            if self.supply == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "supply".to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
            Ok(())
        }
    }

    #[test]
    fn test_value_accepts_anything() {
        let value: serde_json::Value = serde_json::from_str("[1, \"two\"]").unwrap();
        assert!(value.validate().is_ok());
    }

    #[test]
    fn test_typed_config_validation() {
        assert!(MintConfig { supply: 10 }.validate().is_ok());
        let err = MintConfig { supply: 0 }.validate().unwrap_err();
        assert!(err.to_string().contains("supply"));
    }
}
