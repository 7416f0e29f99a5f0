//! On-disk key storage.
//!
//! Keys live in an ordered JSON list of `{privateKey, publicKey}` pairs;
//! the public key doubles as the spending address. Scalars are stored as
//! hex.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use upow_crypto::PrivateKey;

use crate::error::WalletError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub private_key: String,
    pub public_key: String,
}

impl KeyPair {
    pub fn signing_key(&self) -> Result<PrivateKey, WalletError> {
        Ok(PrivateKey::from_hex(&self.private_key)?)
    }
}

/// An ordered list of key pairs backed by a JSON file.
#[derive(Debug)]
pub struct KeyStore {
    path: PathBuf,
    pairs: Vec<KeyPair>,
}

impl KeyStore {
    /// Load the store at `path`. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, WalletError> {
        let pairs = match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path: path.to_path_buf(),
            pairs,
        })
    }

    pub fn save(&self) -> Result<(), WalletError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.pairs)?)?;
        Ok(())
    }

    /// Generate a fresh key pair, append it, and persist the store.
    pub fn generate(&mut self) -> Result<&KeyPair, WalletError> {
        let key = PrivateKey::random();
        self.pairs.push(KeyPair {
            private_key: key.to_hex(),
            public_key: key.address(),
        });
        self.save()?;
        Ok(self.pairs.last().ok_or(WalletError::NoSuchKey(0))?)
    }

    pub fn get(&self, index: usize) -> Result<&KeyPair, WalletError> {
        self.pairs.get(index).ok_or(WalletError::NoSuchKey(index))
    }

    pub fn pairs(&self) -> &[KeyPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
