//! Key-pair path helpers
//!
//! Resolves `--keypair` paths and reads Solana JSON key-pair files
//! (a JSON array of 64 bytes: 32 secret bytes followed by 32 public bytes).

use crate::error::{DomainError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Length of a serialized ed25519 key pair
pub const KEYPAIR_LENGTH: usize = 64;

/// Location the Solana CLI writes its default key pair to
pub fn default_keypair_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("solana").join("id.json"))
}

/// Replace a leading `~` component with the home directory
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// A key-pair file read from disk
///
/// Only the public half is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypairFile {
    path: PathBuf,
    public: [u8; 32],
}

impl KeypairFile {
    /// Read and validate a key-pair file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = expand_tilde(path);
        let content = fs::read_to_string(&path)?;
        Ok(Self::parse(&path, &content)?)
    }

    fn parse(path: &Path, content: &str) -> std::result::Result<Self, DomainError> {
        let invalid = |message: String| DomainError::InvalidKeypair {
            path: path.display().to_string(),
            message,
        };

        let bytes: Vec<u8> = serde_json::from_str(content)
            .map_err(|e| invalid(format!("expected a JSON byte array: {}", e)))?;

        if bytes.len() != KEYPAIR_LENGTH {
            return Err(invalid(format!(
                "expected {} bytes, got {}",
                KEYPAIR_LENGTH,
                bytes.len()
            )));
        }

        let mut public = [0u8; 32];
        public.copy_from_slice(&bytes[32..]);

        Ok(Self {
            path: path.to_path_buf(),
            public,
        })
    }

    /// Path the key pair was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base58-encoded public key
    pub fn pubkey(&self) -> String {
        bs58::encode(self.public).into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn keypair_json(public_byte: u8) -> String {
        let bytes: Vec<u8> = (0..32).chain(std::iter::repeat(public_byte).take(32)).collect();
        serde_json::to_string(&bytes).unwrap()
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/id.json"), PathBuf::from("/tmp/id.json"));
        assert_eq!(expand_tilde("id.json"), PathBuf::from("id.json"));
    }

    #[test]
    fn test_expand_tilde_uses_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/keys/id.json"), home.join("keys/id.json"));
            assert_eq!(expand_tilde("~"), home);
        }
    }

    #[test]
    fn test_default_keypair_path_suffix() {
        if let Some(path) = default_keypair_path() {
            assert!(path.ends_with(".config/solana/id.json"));
        }
    }

    #[test]
    fn test_load_keypair_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", keypair_json(0)).unwrap();

        let keypair = KeypairFile::load(file.path()).unwrap();
        assert_eq!(keypair.path(), file.path());
        // 32 zero bytes
        assert_eq!(keypair.pubkey(), "11111111111111111111111111111111");
    }

    #[test]
    fn test_load_rejects_wrong_length() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let err = KeypairFile::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("expected 64 bytes, got 3"));
    }

    #[test]
    fn test_load_rejects_non_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"secret\": 1}}").unwrap();

        assert!(KeypairFile::load(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = KeypairFile::load("/nonexistent/solcmd/id.json").unwrap_err();
        assert!(matches!(err, crate::AppError::Io(_)));
    }
}
