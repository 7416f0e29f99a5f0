//! The canonical transaction: wire encoding, hashing, signing, and
//! signature verification.

use std::cell::OnceCell;
use std::collections::HashSet;

use upow_crypto::{sha256_hex, PrivateKey};
use upow_types::constants::{MAX_INPUTS, MAX_OUTPUTS, MAX_TX_VERSION};
use upow_types::TransactionKind;

use crate::input::INPUT_WIRE_LEN;
use crate::output::TransactionOutput;
use crate::{Reader, TransactionInput, TxError};

/// A spend of one or more inputs into one or more outputs.
///
/// The version is tied to the address encoding of the outputs: version 1
/// carries 64-byte full addresses, version 3 carries 33-byte compressed
/// ones. The full hex and the hash are memoized on first use; callers
/// sign before asking for either.
#[derive(Debug)]
pub struct Transaction {
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
    message: Option<Vec<u8>>,
    version: u8,
    kind: TransactionKind,
    hex_cache: OnceCell<String>,
    hash_cache: OnceCell<String>,
}

impl Transaction {
    /// Build a transaction, inferring the version from the output
    /// address widths when none is given.
    ///
    /// Fails on more than 255 inputs or outputs, on a duplicate
    /// `(tx_hash, index)` pair, on mixed address widths, and on a
    /// message longer than the version's length field can carry.
    pub fn new(
        inputs: Vec<TransactionInput>,
        outputs: Vec<TransactionOutput>,
        message: Option<Vec<u8>>,
        version: Option<u8>,
    ) -> Result<Self, TxError> {
        if inputs.len() > MAX_INPUTS {
            return Err(TxError::TooManyInputs(inputs.len()));
        }
        if outputs.len() > MAX_OUTPUTS {
            return Err(TxError::TooManyOutputs(outputs.len()));
        }

        let mut seen = HashSet::with_capacity(inputs.len());
        for input in &inputs {
            if !seen.insert((input.tx_hash, input.index)) {
                return Err(TxError::DoubleSpend {
                    tx_hash: input.tx_hash_hex(),
                    index: input.index,
                });
            }
        }

        let version = match version {
            Some(v) if v == 0 || v > MAX_TX_VERSION => return Err(TxError::UnsupportedVersion(v)),
            Some(v) => v,
            None => {
                if outputs.iter().all(|o| o.address_bytes.len() == 64) {
                    1
                } else if outputs.iter().all(|o| o.address_bytes.len() == 33) {
                    3
                } else {
                    return Err(TxError::MixedAddressLengths);
                }
            }
        };

        if let Some(message) = &message {
            let max = if version <= 2 { u8::MAX as usize } else { u16::MAX as usize };
            if message.len() > max {
                return Err(TxError::MessageTooLong);
            }
        }

        let kind = TransactionKind::from_message(message.as_deref());

        Ok(Self {
            inputs,
            outputs,
            message,
            version,
            kind,
            hex_cache: OnceCell::new(),
            hash_cache: OnceCell::new(),
        })
    }

    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    pub fn message(&self) -> Option<&[u8]> {
        self.message.as_deref()
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// The hex every signature commits to: version, inputs, outputs, and
    /// the message field, without any signatures.
    pub fn unsigned_hex(&self) -> String {
        let mut out = String::new();
        out.push_str(&hex::encode([self.version]));
        out.push_str(&hex::encode([self.inputs.len() as u8]));
        for input in &self.inputs {
            out.push_str(&hex::encode(input.to_bytes()));
        }
        out.push_str(&hex::encode([self.outputs.len() as u8]));
        for output in &self.outputs {
            out.push_str(&hex::encode(output.to_bytes()));
        }
        match &self.message {
            None => out.push_str("00"),
            Some(message) => {
                out.push_str("01");
                if self.version <= 2 {
                    out.push_str(&hex::encode([message.len() as u8]));
                } else {
                    out.push_str(&hex::encode((message.len() as u16).to_be_bytes()));
                }
                out.push_str(&hex::encode(message));
            }
        }
        out
    }

    /// The full wire hex: unsigned hex followed by each distinct
    /// signature in first-seen input order. Memoized.
    pub fn hex(&self) -> &str {
        self.hex_cache.get_or_init(|| {
            let mut out = self.unsigned_hex();
            let mut seen = HashSet::new();
            for input in &self.inputs {
                if let Some(signature) = &input.signature {
                    let sig_hex = signature.to_hex();
                    if seen.insert(sig_hex.clone()) {
                        out.push_str(&sig_hex);
                    }
                }
            }
            out
        })
    }

    /// SHA-256 over the ASCII full hex. Memoized.
    pub fn hash(&self) -> &str {
        self.hash_cache.get_or_init(|| sha256_hex(self.hex()))
    }

    /// Sign every unsigned input whose bound public key matches one of
    /// the supplied keys. Fails if any input is left unsigned afterward.
    pub fn sign(&mut self, keys: &[&PrivateKey]) -> Result<(), TxError> {
        let unsigned_hex = self.unsigned_hex();
        for key in keys {
            let authority = key.public_point();
            for input in &mut self.inputs {
                if input.signature.is_none() && input.public_key == Some(authority) {
                    input.sign(key, &unsigned_hex);
                }
            }
        }
        if self.inputs.iter().any(|input| input.signature.is_none()) {
            return Err(TxError::NoAuthority);
        }
        Ok(())
    }

    /// Check every input's signature against the unsigned hex. A
    /// `(public key, signature)` pair that recurs across inputs is only
    /// verified once.
    pub fn verify_signatures(&self) -> Result<(), TxError> {
        let unsigned_hex = self.unsigned_hex();
        let mut checked = HashSet::new();
        for (index, input) in self.inputs.iter().enumerate() {
            let signature = input.signature.ok_or(TxError::UnsignedInput(index))?;
            if let Some(public_key) = &input.public_key {
                if !checked.insert((*public_key, signature)) {
                    continue;
                }
            }
            if !input.verify(&unsigned_hex) {
                return Err(TxError::SignatureInvalid { input: index });
            }
        }
        Ok(())
    }

    /// Decode the unsigned wire form, the exact inverse of
    /// `unsigned_hex`. Trailing bytes are an error.
    pub fn decode_unsigned(unsigned_hex: &str) -> Result<Self, TxError> {
        let bytes = hex::decode(unsigned_hex)?;
        let mut reader = Reader::new(&bytes);

        let version = reader.take_u8()?;
        if version == 0 || version > MAX_TX_VERSION {
            return Err(TxError::UnsupportedVersion(version));
        }
        let address_len = if version <= 2 { 64 } else { 33 };

        let n_inputs = reader.take_u8()? as usize;
        let mut inputs = Vec::with_capacity(n_inputs);
        for _ in 0..n_inputs {
            inputs.push(TransactionInput::from_bytes(reader.take(INPUT_WIRE_LEN)?)?);
        }

        let n_outputs = reader.take_u8()? as usize;
        let mut outputs = Vec::with_capacity(n_outputs);
        for _ in 0..n_outputs {
            outputs.push(TransactionOutput::read_from(&mut reader, address_len)?);
        }

        let message = match reader.take_u8()? {
            0 => None,
            1 => {
                let len = if version <= 2 {
                    reader.take_u8()? as usize
                } else {
                    u16::from_be_bytes([reader.take_u8()?, reader.take_u8()?]) as usize
                };
                Some(reader.take(len)?.to_vec())
            }
            flag => {
                return Err(TxError::Decode(format!("invalid message flag: {flag}")));
            }
        };

        if reader.remaining() != 0 {
            return Err(TxError::Decode(format!(
                "{} trailing bytes after message field",
                reader.remaining()
            )));
        }

        Self::new(inputs, outputs, message, Some(version))
    }
}

impl PartialEq for Transaction {
    fn eq(&self, other: &Self) -> bool {
        self.hex() == other.hex()
    }
}

impl Eq for Transaction {}
