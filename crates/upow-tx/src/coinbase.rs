//! Coinbase transactions: block rewards with no spendable inputs.

use std::cell::OnceCell;

use upow_crypto::sha256_hex;
use upow_types::InputType;

use crate::output::TransactionOutput;
use crate::TxError;

/// Marker byte closing the coinbase layout.
const COINBASE_TERMINATOR: u8 = 0x24;

/// A block-reward transaction. Its single pseudo-input is the block hash
/// itself; version 1 carries full addresses, version 2 compressed ones.
#[derive(Debug)]
pub struct CoinbaseTransaction {
    pub block_hash: [u8; 32],
    outputs: Vec<TransactionOutput>,
    version: u8,
    hex_cache: OnceCell<String>,
    hash_cache: OnceCell<String>,
}

impl CoinbaseTransaction {
    pub fn new(block_hash: [u8; 32], outputs: Vec<TransactionOutput>) -> Result<Self, TxError> {
        let version = if outputs.iter().all(|o| o.address_bytes.len() == 64) {
            1
        } else if outputs.iter().all(|o| o.address_bytes.len() == 33) {
            2
        } else {
            return Err(TxError::MixedAddressLengths);
        };
        Ok(Self {
            block_hash,
            outputs,
            version,
            hex_cache: OnceCell::new(),
            hash_cache: OnceCell::new(),
        })
    }

    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    /// `version || 01 || block_hash || 00 || input_type || n_outputs ||
    /// outputs || terminator`. Memoized.
    pub fn hex(&self) -> &str {
        self.hex_cache.get_or_init(|| {
            let mut bytes = Vec::with_capacity(38 + self.outputs.len() * 39);
            bytes.push(self.version);
            bytes.push(1);
            bytes.extend_from_slice(&self.block_hash);
            bytes.push(0);
            bytes.push(InputType::Regular as u8);
            bytes.push(self.outputs.len() as u8);
            for output in &self.outputs {
                bytes.extend_from_slice(&output.to_bytes());
            }
            bytes.push(COINBASE_TERMINATOR);
            hex::encode(bytes)
        })
    }

    /// SHA-256 over the ASCII hex. Memoized.
    pub fn hash(&self) -> &str {
        self.hash_cache.get_or_init(|| sha256_hex(self.hex()))
    }
}
