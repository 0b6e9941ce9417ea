//! Domain models for solcmd
//!
//! Types describing the Solana environment a command targets.
//! Types are validated on construction (fail-fast pattern).

pub mod cluster;
pub mod keypair;

pub use cluster::Cluster;
pub use keypair::{default_keypair_path, expand_tilde, KeypairFile};
