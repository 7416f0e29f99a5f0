//! ECDSA keys and signatures over P-256.
//!
//! Signatures are produced over the ASCII bytes of the unsigned transaction
//! hex, not its raw bytes, and serialized as fixed-width `r || s` with both
//! scalars zero-padded to 32 bytes big-endian (128 hex characters).

use crypto_bigint::{Encoding, U256};
use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{SigningKey, VerifyingKey};
use p256::{EncodedPoint, FieldBytes};

use crate::point::{point_to_string, AddressFormat, CurvePoint};
use crate::CryptoError;

/// A P-256 signing key.
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Parse a private key from its hex scalar.
    ///
    /// Keys shorter than 64 hex digits are accepted and left-padded with
    /// zeros, matching how wallets print scalars without leading zeros.
    pub fn from_hex(scalar_hex: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(scalar_hex)?;
        if raw.len() > 32 {
            return Err(CryptoError::InvalidPrivateKey);
        }
        let mut padded = [0u8; 32];
        padded[32 - raw.len()..].copy_from_slice(&raw);
        let inner =
            SigningKey::from_slice(&padded).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Generate a fresh random key.
    pub fn random() -> Self {
        Self {
            inner: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// The key's scalar as 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        hex::encode(self.inner.to_bytes())
    }

    /// The public point for this key.
    pub fn public_point(&self) -> CurvePoint {
        let encoded = self.inner.verifying_key().to_encoded_point(false);
        // An uncompressed encoding of a valid key always carries both
        // coordinates.
        let x = encoded.x().map(|b| U256::from_be_slice(b)).unwrap_or(U256::ZERO);
        let y = encoded.y().map(|b| U256::from_be_slice(b)).unwrap_or(U256::ZERO);
        CurvePoint::new(x, y)
    }

    /// The compressed base58 address for this key.
    pub fn address(&self) -> String {
        point_to_string(&self.public_point(), AddressFormat::Compressed)
    }

    /// Sign a message. Hashing (SHA-256) and nonce derivation (RFC 6979)
    /// happen inside the signer, so signing is deterministic.
    pub fn sign(&self, message: &str) -> Signature {
        let sig: p256::ecdsa::Signature = self.inner.sign(message.as_bytes());
        Signature::from_p256(&sig)
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never leak the scalar through Debug output.
        f.debug_struct("PrivateKey")
            .field("address", &self.address())
            .finish()
    }
}

/// A fixed-width ECDSA signature, `r` and `s` both 32 bytes big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature {
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl Signature {
    fn from_p256(sig: &p256::ecdsa::Signature) -> Self {
        let bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);
        Self { r, s }
    }

    /// 128 hex characters, `r` then `s`.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(128);
        out.push_str(&hex::encode(self.r));
        out.push_str(&hex::encode(self.s));
        out
    }

    /// Parse a signature from its 128-character hex form.
    pub fn from_hex(sig_hex: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(sig_hex)?;
        if raw.len() != 64 {
            return Err(CryptoError::InvalidPointEncoding(raw.len()));
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&raw[..32]);
        s.copy_from_slice(&raw[32..]);
        Ok(Self { r, s })
    }
}

/// Verify a signature made by the key behind `point` over `message`.
///
/// Any malformed input (point not on the curve, out-of-range scalars)
/// counts as a failed verification rather than an error.
pub fn verify_message(point: &CurvePoint, message: &str, signature: &Signature) -> bool {
    let x_be = point.x.to_be_bytes();
    let y_be = point.y.to_be_bytes();
    let encoded = EncodedPoint::from_affine_coordinates(
        &FieldBytes::from(x_be),
        &FieldBytes::from(y_be),
        false,
    );
    let verifying_key = match VerifyingKey::from_encoded_point(&encoded) {
        Ok(key) => key,
        Err(_) => return false,
    };
    let mut raw = [0u8; 64];
    raw[..32].copy_from_slice(&signature.r);
    raw[32..].copy_from_slice(&signature.s);
    let sig = match p256::ecdsa::Signature::from_slice(&raw) {
        Ok(sig) => sig,
        Err(_) => return false,
    };
    verifying_key.verify(message.as_bytes(), &sig).is_ok()
}
