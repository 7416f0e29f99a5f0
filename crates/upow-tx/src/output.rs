//! Transaction outputs and their wire encoding.

use upow_crypto::point::P256_CURVE;
use upow_crypto::{address_to_bytes, bytes_to_address, bytes_to_point, CurvePoint};
use upow_types::{Amount, OutputType};

use crate::{Reader, TxError};

/// A single output: an address, an amount, and an output type.
///
/// The public-key point is recovered from the address at construction so
/// that `verify` never has to re-derive it. It is never serialized.
#[derive(Debug, Clone)]
pub struct TransactionOutput {
    pub address: String,
    pub address_bytes: Vec<u8>,
    pub amount: Amount,
    pub output_type: OutputType,
    public_key: CurvePoint,
}

impl TransactionOutput {
    pub fn new(address: &str, amount: Amount, output_type: OutputType) -> Result<Self, TxError> {
        let address_bytes = address_to_bytes(address)?;
        let public_key = bytes_to_point(&address_bytes)?;
        Ok(Self {
            address: address.to_string(),
            address_bytes,
            amount,
            output_type,
            public_key,
        })
    }

    pub fn public_key(&self) -> &CurvePoint {
        &self.public_key
    }

    pub fn is_stake(&self) -> bool {
        self.output_type == OutputType::Stake
    }

    /// An output is valid when it carries a positive amount and its
    /// address decodes to a point on the curve.
    pub fn verify(&self) -> bool {
        !self.amount.is_zero() && self.public_key.is_on_curve(&P256_CURVE)
    }

    /// `address_bytes || len(amount_bytes) || amount_bytes || output_type`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let amount_bytes = self.amount.to_wire_bytes();
        let mut out = Vec::with_capacity(self.address_bytes.len() + 2 + amount_bytes.len());
        out.extend_from_slice(&self.address_bytes);
        out.push(amount_bytes.len() as u8);
        out.extend_from_slice(&amount_bytes);
        out.push(self.output_type as u8);
        out
    }

    /// Decode one output, with the address width fixed by the
    /// transaction version (64 for full, 33 for compressed).
    pub(crate) fn read_from(reader: &mut Reader<'_>, address_len: usize) -> Result<Self, TxError> {
        let address_bytes = reader.take(address_len)?.to_vec();
        let amount_len = reader.take_u8()? as usize;
        let amount = Amount::from_wire_bytes(reader.take(amount_len)?)?;
        let type_byte = reader.take_u8()?;
        let output_type = OutputType::from_u8(type_byte)
            .ok_or_else(|| TxError::Decode(format!("unknown output type: {type_byte}")))?;
        let address = bytes_to_address(&address_bytes)?;
        let public_key = bytes_to_point(&address_bytes)?;
        Ok(Self {
            address,
            address_bytes,
            amount,
            output_type,
            public_key,
        })
    }

    /// Decode a standalone output. The address width is implied by the
    /// total length, trying the 64-byte full form first.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        for address_len in [64usize, 33] {
            if bytes.len() > address_len + 1
                && bytes.len() == address_len + 2 + bytes[address_len] as usize
            {
                let mut reader = Reader::new(bytes);
                return Self::read_from(&mut reader, address_len);
            }
        }
        Err(TxError::Decode(format!(
            "no output layout matches {} bytes",
            bytes.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upow_crypto::PrivateKey;

    fn test_address() -> String {
        PrivateKey::from_hex(&"11".repeat(32)).unwrap().address()
    }

    #[test]
    fn test_wire_roundtrip_compressed() {
        let output = TransactionOutput::new(
            &test_address(),
            Amount::from_whole(1),
            OutputType::Regular,
        )
        .unwrap();
        let bytes = output.to_bytes();
        assert_eq!(bytes.len(), 33 + 1 + 4 + 1);
        let decoded = TransactionOutput::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.address, output.address);
        assert_eq!(decoded.amount, output.amount);
        assert_eq!(decoded.output_type, OutputType::Regular);
    }

    #[test]
    fn test_amount_is_length_prefixed_little_endian() {
        let output = TransactionOutput::new(
            &test_address(),
            Amount::from_whole(1),
            OutputType::Regular,
        )
        .unwrap();
        let bytes = output.to_bytes();
        // 10^8 units is 0x05f5e100, minimal little-endian.
        assert_eq!(bytes[33], 4);
        assert_eq!(&bytes[34..38], &[0x00, 0xe1, 0xf5, 0x05]);
        assert_eq!(bytes[38], OutputType::Regular as u8);
    }

    #[test]
    fn test_verify_rejects_zero_amount() {
        let output =
            TransactionOutput::new(&test_address(), Amount::from_units(0), OutputType::Regular)
                .unwrap();
        assert!(!output.verify());
    }

    #[test]
    fn test_new_rejects_garbage_address() {
        assert!(TransactionOutput::new(
            "not-an-address",
            Amount::from_whole(1),
            OutputType::Regular
        )
        .is_err());
    }

    #[test]
    fn test_from_bytes_rejects_truncated() {
        let output = TransactionOutput::new(
            &test_address(),
            Amount::from_whole(1),
            OutputType::Regular,
        )
        .unwrap();
        let bytes = output.to_bytes();
        assert!(TransactionOutput::from_bytes(&bytes[..bytes.len() - 1]).is_err());
    }
}
