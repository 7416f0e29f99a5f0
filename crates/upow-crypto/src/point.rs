//! Curve points and the address codec.
//!
//! An address is one of two renderings of a P-256 point:
//!
//! * full: 64 raw bytes (X then Y, each 32 bytes little-endian), hex-encoded;
//! * compressed: 33 bytes (specifier byte, then 32-byte little-endian X),
//!   base58-encoded. Specifier 42 means Y is even, 43 means odd; decoding
//!   recovers Y from X with a modular square root.

use crate::field::{legendre_symbol, sqrt_mod};
use crate::CryptoError;
use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, Integer, U256};

/// Compressed-address specifier for an even Y coordinate.
pub const SPECIFIER_EVEN: u8 = 42;
/// Compressed-address specifier for an odd Y coordinate.
pub const SPECIFIER_ODD: u8 = 43;

/// Short-Weierstrass curve constants (`y^2 = x^3 + ax + b mod p`).
#[derive(Debug, Clone, Copy)]
pub struct CurveParams {
    pub p: U256,
    pub a: U256,
    pub b: U256,
}

/// NIST P-256, the ledger's fixed curve. `a = p - 3`.
pub const P256_CURVE: CurveParams = CurveParams {
    p: U256::from_be_hex("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
    a: U256::from_be_hex("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc"),
    b: U256::from_be_hex("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
};

/// The two address renderings of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// 64 raw bytes, hex-rendered.
    FullHex,
    /// 33 raw bytes, base58-rendered.
    Compressed,
}

/// An affine point on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurvePoint {
    pub x: U256,
    pub y: U256,
}

impl CurvePoint {
    pub fn new(x: U256, y: U256) -> Self {
        CurvePoint { x, y }
    }

    /// Whether the point satisfies the curve equation.
    pub fn is_on_curve(&self, curve: &CurveParams) -> bool {
        let params = DynResidueParams::new(&curve.p);
        let x = DynResidue::new(&self.x, params);
        let y = DynResidue::new(&self.y, params);
        let a = DynResidue::new(&curve.a, params);
        let b = DynResidue::new(&curve.b, params);
        let rhs = x.square() * x + a * x + b;
        y.square().retrieve() == rhs.retrieve()
    }

    pub fn y_is_odd(&self) -> bool {
        bool::from(self.y.is_odd())
    }
}

/// Evaluate `x^3 + ax + b mod p` and take the square root with the
/// requested parity. A non-residue right-hand side means no point with
/// this X exists.
pub fn y_from_x(x: &U256, odd: bool, curve: &CurveParams) -> Result<U256, CryptoError> {
    let params = DynResidueParams::new(&curve.p);
    let xr = DynResidue::new(x, params);
    let a = DynResidue::new(&curve.a, params);
    let b = DynResidue::new(&curve.b, params);
    let rhs = (xr.square() * xr + a * xr + b).retrieve();

    let (r1, r2) = sqrt_mod(&rhs, &curve.p)?;
    if bool::from(r1.is_odd()) == odd {
        Ok(r1)
    } else {
        Ok(r2)
    }
}

/// Encode a point as raw address bytes.
pub fn point_to_bytes(point: &CurvePoint, format: AddressFormat) -> Vec<u8> {
    match format {
        AddressFormat::FullHex => {
            let mut bytes = Vec::with_capacity(64);
            bytes.extend_from_slice(&point.x.to_le_bytes());
            bytes.extend_from_slice(&point.y.to_le_bytes());
            bytes
        }
        AddressFormat::Compressed => {
            let specifier = if point.y_is_odd() {
                SPECIFIER_ODD
            } else {
                SPECIFIER_EVEN
            };
            let mut bytes = Vec::with_capacity(33);
            bytes.push(specifier);
            bytes.extend_from_slice(&point.x.to_le_bytes());
            bytes
        }
    }
}

/// Encode a point as an address string.
pub fn point_to_string(point: &CurvePoint, format: AddressFormat) -> String {
    let bytes = point_to_bytes(point, format);
    match format {
        AddressFormat::FullHex => hex::encode(bytes),
        AddressFormat::Compressed => bs58::encode(bytes).into_string(),
    }
}

/// Decode raw address bytes back to a point, dispatching on length.
pub fn bytes_to_point(bytes: &[u8]) -> Result<CurvePoint, CryptoError> {
    match bytes.len() {
        64 => {
            let x = U256::from_le_slice(&bytes[..32]);
            let y = U256::from_le_slice(&bytes[32..]);
            Ok(CurvePoint::new(x, y))
        }
        33 => {
            let odd = match bytes[0] {
                SPECIFIER_EVEN => false,
                SPECIFIER_ODD => true,
                other => return Err(CryptoError::InvalidSpecifier(other)),
            };
            let x = U256::from_le_slice(&bytes[1..]);
            let y = y_from_x(&x, odd, &P256_CURVE)?;
            Ok(CurvePoint::new(x, y))
        }
        other => Err(CryptoError::InvalidPointEncoding(other)),
    }
}

/// Decode an address string to a point.
pub fn string_to_point(address: &str) -> Result<CurvePoint, CryptoError> {
    bytes_to_point(&address_to_bytes(address)?)
}

/// Decode an address string to its raw bytes: hex for the full form,
/// base58 for the compressed form.
pub fn address_to_bytes(address: &str) -> Result<Vec<u8>, CryptoError> {
    if address.len() % 2 == 0 {
        if let Ok(bytes) = hex::decode(address) {
            if bytes.len() > 1 {
                return Ok(bytes);
            }
        }
    }
    Ok(bs58::decode(address).into_vec()?)
}

/// Re-render raw address bytes as an address string, validating that they
/// describe a point.
pub fn bytes_to_address(bytes: &[u8]) -> Result<String, CryptoError> {
    let point = bytes_to_point(bytes)?;
    let format = match bytes.len() {
        64 => AddressFormat::FullHex,
        _ => AddressFormat::Compressed,
    };
    Ok(point_to_string(&point, format))
}

/// Legendre check for test support: whether `x` admits any Y at all.
pub fn x_has_point(x: &U256, curve: &CurveParams) -> bool {
    let params = DynResidueParams::new(&curve.p);
    let xr = DynResidue::new(x, params);
    let a = DynResidue::new(&curve.a, params);
    let b = DynResidue::new(&curve.b, params);
    let rhs = (xr.square() * xr + a * xr + b).retrieve();
    legendre_symbol(&rhs, &curve.p) == 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::PrivateKey;

    fn sample_point() -> CurvePoint {
        PrivateKey::from_hex(&"01".repeat(32)).unwrap().public_point()
    }

    #[test]
    fn test_sample_point_on_curve() {
        assert!(sample_point().is_on_curve(&P256_CURVE));
    }

    #[test]
    fn test_full_roundtrip() {
        let point = sample_point();
        let addr = point_to_string(&point, AddressFormat::FullHex);
        assert_eq!(addr.len(), 128);
        let back = string_to_point(&addr).unwrap();
        assert_eq!(back, point);
        assert_eq!(point_to_string(&back, AddressFormat::FullHex), addr);
    }

    #[test]
    fn test_compressed_roundtrip() {
        let point = sample_point();
        let addr = point_to_string(&point, AddressFormat::Compressed);
        let back = string_to_point(&addr).unwrap();
        assert_eq!(back, point);
        assert_eq!(point_to_string(&back, AddressFormat::Compressed), addr);
    }

    #[test]
    fn test_compressed_bytes_layout() {
        let point = sample_point();
        let bytes = point_to_bytes(&point, AddressFormat::Compressed);
        assert_eq!(bytes.len(), 33);
        assert!(bytes[0] == SPECIFIER_EVEN || bytes[0] == SPECIFIER_ODD);
        assert_eq!(&bytes[1..], &point.x.to_le_bytes()[..]);
    }

    #[test]
    fn test_y_from_x_parity_and_equation() {
        let point = sample_point();
        for odd in [false, true] {
            let y = y_from_x(&point.x, odd, &P256_CURVE).unwrap();
            assert_eq!(bool::from(y.is_odd()), odd);
            assert!(CurvePoint::new(point.x, y).is_on_curve(&P256_CURVE));
        }
    }

    #[test]
    fn test_y_from_x_non_residue() {
        // Walk x upward from a valid coordinate until the curve equation
        // has no root; roughly half of all x values qualify.
        let mut x = sample_point().x;
        loop {
            x = x.wrapping_add(&U256::ONE);
            if !x_has_point(&x, &P256_CURVE) {
                break;
            }
        }
        assert!(matches!(
            y_from_x(&x, false, &P256_CURVE),
            Err(CryptoError::NonResidue(_))
        ));
    }

    #[test]
    fn test_bad_lengths_rejected() {
        assert!(matches!(
            bytes_to_point(&[0u8; 32]),
            Err(CryptoError::InvalidPointEncoding(32))
        ));
        assert!(matches!(
            bytes_to_point(&[0u8; 65]),
            Err(CryptoError::InvalidPointEncoding(65))
        ));
    }

    #[test]
    fn test_bad_specifier_rejected() {
        let mut bytes = point_to_bytes(&sample_point(), AddressFormat::Compressed);
        bytes[0] = 0x02;
        assert!(matches!(
            bytes_to_point(&bytes),
            Err(CryptoError::InvalidSpecifier(0x02))
        ));
    }

    #[test]
    fn test_bytes_to_address_matches_format() {
        let point = sample_point();
        let full = point_to_bytes(&point, AddressFormat::FullHex);
        let compressed = point_to_bytes(&point, AddressFormat::Compressed);
        assert_eq!(
            bytes_to_address(&full).unwrap(),
            point_to_string(&point, AddressFormat::FullHex)
        );
        assert_eq!(
            bytes_to_address(&compressed).unwrap(),
            point_to_string(&point, AddressFormat::Compressed)
        );
    }
}
