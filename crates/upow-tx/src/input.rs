//! Transaction inputs: references to unspent outputs, plus the signing
//! state attached while a transaction is being built.

use upow_crypto::{verify_message, CurvePoint, PrivateKey, Signature};
use upow_types::{Amount, InputType};

use crate::TxError;

/// Serialized input width: 32-byte source hash, index, input type.
pub const INPUT_WIRE_LEN: usize = 34;

/// A reference to the `index`-th output of the transaction `tx_hash`.
///
/// The amount and the owning public key are ledger facts, not wire
/// fields; they are attached when the input is built from node data so
/// that selection and signing can run without further lookups.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    pub tx_hash: [u8; 32],
    pub index: u8,
    pub input_type: InputType,
    pub amount: Option<Amount>,
    pub public_key: Option<CurvePoint>,
    pub signature: Option<Signature>,
}

impl TransactionInput {
    pub fn new(tx_hash: [u8; 32], index: u8, input_type: InputType) -> Self {
        Self {
            tx_hash,
            index,
            input_type,
            amount: None,
            public_key: None,
            signature: None,
        }
    }

    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_public_key(mut self, public_key: CurvePoint) -> Self {
        self.public_key = Some(public_key);
        self
    }

    /// The referenced amount, zero when the ledger fact was never bound.
    pub fn amount_or_zero(&self) -> Amount {
        self.amount.unwrap_or(Amount::ZERO)
    }

    pub fn tx_hash_hex(&self) -> String {
        hex::encode(self.tx_hash)
    }

    /// `tx_hash || index || input_type`.
    pub fn to_bytes(&self) -> [u8; INPUT_WIRE_LEN] {
        let mut out = [0u8; INPUT_WIRE_LEN];
        out[..32].copy_from_slice(&self.tx_hash);
        out[32] = self.index;
        out[33] = self.input_type as u8;
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        if bytes.len() != INPUT_WIRE_LEN {
            return Err(TxError::Decode(format!(
                "input must be {INPUT_WIRE_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        let mut tx_hash = [0u8; 32];
        tx_hash.copy_from_slice(&bytes[..32]);
        let input_type = InputType::from_u8(bytes[33])
            .ok_or_else(|| TxError::Decode(format!("unknown input type: {}", bytes[33])))?;
        Ok(Self::new(tx_hash, bytes[32], input_type))
    }

    /// Sign the unsigned transaction hex with `key`. Already-signed
    /// inputs are left untouched.
    pub fn sign(&mut self, key: &PrivateKey, unsigned_hex: &str) {
        if self.signature.is_none() {
            self.signature = Some(key.sign(unsigned_hex));
        }
    }

    /// Verify the attached signature against the bound public key.
    /// Missing signature or key counts as failure.
    pub fn verify(&self, unsigned_hex: &str) -> bool {
        match (&self.public_key, &self.signature) {
            (Some(public_key), Some(signature)) => {
                verify_message(public_key, unsigned_hex, signature)
            }
            _ => false,
        }
    }
}

/// Inputs are the same spend when they reference the same output slot,
/// regardless of attached ledger facts or signatures.
impl PartialEq for TransactionInput {
    fn eq(&self, other: &Self) -> bool {
        self.tx_hash == other.tx_hash && self.index == other.index
    }
}

impl Eq for TransactionInput {}

impl std::hash::Hash for TransactionInput {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.tx_hash.hash(state);
        self.index.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(byte: u8, index: u8) -> TransactionInput {
        TransactionInput::new([byte; 32], index, InputType::Regular)
    }

    #[test]
    fn test_wire_roundtrip() {
        let original = TransactionInput::new([7u8; 32], 3, InputType::Fees);
        let decoded = TransactionInput::from_bytes(&original.to_bytes()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(decoded.input_type, InputType::Fees);
    }

    #[test]
    fn test_from_bytes_rejects_bad_length() {
        assert!(TransactionInput::from_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_unknown_type() {
        let mut bytes = input(1, 0).to_bytes();
        bytes[33] = 9;
        assert!(TransactionInput::from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_equality_ignores_attachments() {
        let a = input(1, 0).with_amount(Amount::from_whole(5));
        let b = input(1, 0);
        assert_eq!(a, b);
        assert_ne!(input(1, 0), input(1, 1));
        assert_ne!(input(1, 0), input(2, 0));
    }

    #[test]
    fn test_sign_is_idempotent() {
        let key = PrivateKey::from_hex(&"21".repeat(32)).unwrap();
        let mut input = input(1, 0).with_public_key(key.public_point());
        input.sign(&key, "aabbcc");
        let first = input.signature;
        input.sign(&key, "ddeeff");
        assert_eq!(input.signature, first);
        assert!(input.verify("aabbcc"));
        assert!(!input.verify("ddeeff"));
    }
}
