//! Cluster domain type
//!
//! Maps environment names accepted by `--env` to known Solana clusters.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A known Solana cluster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cluster {
    MainnetBeta,
    Testnet,
    #[default]
    Devnet,
    Localnet,
}

impl Cluster {
    /// All known clusters
    pub const ALL: [Cluster; 4] = [
        Cluster::MainnetBeta,
        Cluster::Testnet,
        Cluster::Devnet,
        Cluster::Localnet,
    ];

    /// Canonical environment name
    pub const fn name(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "mainnet-beta",
            Cluster::Testnet => "testnet",
            Cluster::Devnet => "devnet",
            Cluster::Localnet => "localnet",
        }
    }

    /// Public RPC endpoint used when no `--rpc-url` is given
    pub const fn rpc_url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }
}

impl FromStr for Cluster {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Cluster::MainnetBeta),
            "testnet" => Ok(Cluster::Testnet),
            "devnet" => Ok(Cluster::Devnet),
            "localnet" | "localhost" => Ok(Cluster::Localnet),
            _ => Err(DomainError::UnknownCluster(s.to_string())),
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("devnet".parse::<Cluster>(), Ok(Cluster::Devnet));
        assert_eq!("mainnet".parse::<Cluster>(), Ok(Cluster::MainnetBeta));
        assert_eq!("Mainnet-Beta".parse::<Cluster>(), Ok(Cluster::MainnetBeta));
        assert_eq!("localhost".parse::<Cluster>(), Ok(Cluster::Localnet));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "moonnet".parse::<Cluster>().unwrap_err();
        assert_eq!(err, DomainError::UnknownCluster("moonnet".to_string()));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for cluster in Cluster::ALL {
            assert_eq!(cluster.name().parse::<Cluster>(), Ok(cluster));
        }
    }

    #[test]
    fn test_default_is_devnet() {
        assert_eq!(Cluster::default(), Cluster::Devnet);
        assert_eq!(Cluster::default().rpc_url(), "https://api.devnet.solana.com");
    }
}
