//! Crypto primitives for the uPow wallet.
//!
//! Field arithmetic and Tonelli-Shanks square roots over the P-256 prime,
//! the point <-> address codec (64-byte full-hex and 33-byte base58
//! compressed forms), and ECDSA signing with fixed-width signatures.

pub mod field;
pub mod keys;
pub mod point;

pub use keys::{verify_message, PrivateKey, Signature};
pub use point::{
    address_to_bytes, bytes_to_address, bytes_to_point, point_to_bytes, point_to_string,
    string_to_point, AddressFormat, CurvePoint,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid point encoding: expected 33 or 64 bytes, got {0}")]
    InvalidPointEncoding(usize),

    #[error("invalid compressed-point specifier byte: {0}")]
    InvalidSpecifier(u8),

    #[error("{0} is not a quadratic residue")]
    NonResidue(String),

    #[error("point is not on the curve")]
    NotOnCurve,

    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("base58 decode error: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// SHA-256 of a string, returned as lowercase hex.
///
/// Transaction hashes are computed over the ASCII hex encoding of the
/// transaction, not its raw bytes; the ledger does the same, so this must
/// not change.
pub fn sha256_hex(message: &str) -> String {
    use sha2::{Digest, Sha256};
    hex::encode(Sha256::digest(message.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
