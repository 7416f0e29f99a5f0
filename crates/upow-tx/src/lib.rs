//! uPow transaction construction, wire encoding, and verification.
//!
//! Provides typed outputs and inputs, the canonical transaction wire
//! format (unsigned and full hex), coinbase transactions, ECDSA signing
//! over the unsigned hex, and deterministic input selection. Delegates
//! low-level crypto to upow-crypto.

pub mod coinbase;
pub mod input;
pub mod output;
pub mod selector;
pub mod transaction;

pub use coinbase::CoinbaseTransaction;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use selector::select_inputs;
pub use transaction::Transaction;

use thiserror::Error;
use upow_crypto::CryptoError;
use upow_types::AmountError;

#[derive(Debug, Error)]
pub enum TxError {
    #[error("a transaction can spend at most 255 inputs, not {0}")]
    TooManyInputs(usize),

    #[error("a transaction can have at most 255 outputs, not {0}")]
    TooManyOutputs(usize),

    #[error("unsupported transaction version: {0}")]
    UnsupportedVersion(u8),

    #[error("outputs mix full and compressed address encodings")]
    MixedAddressLengths,

    #[error("message does not fit the version's length field")]
    MessageTooLong,

    #[error("input {tx_hash}:{index} is spent twice in the same transaction")]
    DoubleSpend { tx_hash: String, index: u8 },

    #[error("input {0} is unsigned")]
    UnsignedInput(usize),

    #[error("signature on input {input} does not verify")]
    SignatureInvalid { input: usize },

    #[error("no supplied key matches any unsigned input")]
    NoAuthority,

    #[error("decode error: {0}")]
    Decode(String),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Cursor over a decoded byte buffer. Every read is bounds-checked and
/// reports the offset it failed at.
pub(crate) struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], TxError> {
        if self.pos + n > self.bytes.len() {
            return Err(TxError::Decode(format!(
                "unexpected end of input at offset {}",
                self.pos
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub(crate) fn take_u8(&mut self) -> Result<u8, TxError> {
        Ok(self.take(1)?[0])
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}
