//! Fixed-point coin amounts.
//!
//! Amounts are decimal values that must be exactly representable as an
//! integer number of atomic units at 10^-8 scale. They are held as `u128`
//! units internally; the decimal form only exists at the parse/display
//! boundary, and the wire form is a minimal-length little-endian integer.

use crate::constants::SMALLEST_UNIT;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("invalid amount literal: {0:?}")]
    Invalid(String),

    #[error("amount {0:?} is not representable at 10^-8 precision")]
    Precision(String),

    #[error("amount overflows the supported range")]
    Overflow,

    #[error("amount wire encoding must be 0-16 bytes, got {0}")]
    WireLength(usize),
}

/// A coin amount in atomic units (10^-8 coins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Construct from raw atomic units.
    pub const fn from_units(units: u128) -> Self {
        Amount(units)
    }

    /// Construct from a whole number of coins.
    pub const fn from_whole(coins: u64) -> Self {
        Amount(coins as u128 * SMALLEST_UNIT)
    }

    pub const fn units(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    pub fn checked_sub(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_sub(rhs.0).map(Amount)
    }

    /// Parse a decimal literal such as `"123.45"`.
    ///
    /// The value must be exactly representable at 10^-8 scale: more than
    /// eight fractional digits are rejected unless the excess digits are
    /// all zeros.
    pub fn parse(s: &str) -> Result<Amount, AmountError> {
        let s = s.trim();
        if s.is_empty() || s.starts_with('-') || s.starts_with('+') {
            return Err(AmountError::Invalid(s.to_string()));
        }

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmountError::Invalid(s.to_string()));
        }
        if !int_part.chars().all(|c| c.is_ascii_digit())
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return Err(AmountError::Invalid(s.to_string()));
        }

        if frac_part.len() > 8 && frac_part[8..].bytes().any(|b| b != b'0') {
            return Err(AmountError::Precision(s.to_string()));
        }

        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse()
                .map_err(|_| AmountError::Overflow)?
        };

        let frac_digits = &frac_part[..frac_part.len().min(8)];
        let mut frac: u128 = if frac_digits.is_empty() {
            0
        } else {
            frac_digits
                .parse()
                .map_err(|_| AmountError::Invalid(s.to_string()))?
        };
        frac *= 10u128.pow(8 - frac_digits.len() as u32);

        whole
            .checked_mul(SMALLEST_UNIT)
            .and_then(|u| u.checked_add(frac))
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Minimal-length wire encoding: the units as a shortest big-endian
    /// integer, byte-reversed to little-endian. Zero encodes as a single
    /// zero byte. The result is always 1-16 bytes, so its length fits the
    /// single-byte prefix used by the output codec.
    pub fn to_wire_bytes(self) -> Vec<u8> {
        let be = self.0.to_be_bytes();
        let skip = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
        let mut bytes: Vec<u8> = be[skip..].to_vec();
        bytes.reverse();
        bytes
    }

    /// Decode the little-endian wire form. Lengths above 16 bytes exceed
    /// the `u128` unit range and are rejected.
    pub fn from_wire_bytes(le: &[u8]) -> Result<Amount, AmountError> {
        if le.len() > 16 {
            return Err(AmountError::WireLength(le.len()));
        }
        let mut units: u128 = 0;
        for &b in le.iter().rev() {
            units = (units << 8) | b as u128;
        }
        Ok(Amount(units))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / SMALLEST_UNIT;
        let frac = self.0 % SMALLEST_UNIT;
        if frac == 0 {
            write!(f, "{}", whole)
        } else {
            let digits = format!("{:08}", frac);
            write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
        }
    }
}

impl std::iter::Sum<Amount> for Option<Amount> {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Some(Amount::ZERO), |acc, a| acc?.checked_add(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        assert_eq!(Amount::parse("123.45").unwrap().units(), 12_345_000_000);
        assert_eq!(Amount::parse("1").unwrap(), Amount::from_whole(1));
        assert_eq!(Amount::parse("0.00000001").unwrap().units(), 1);
        assert_eq!(Amount::parse(".5").unwrap().units(), 50_000_000);
        // Excess zeros are still exact.
        assert_eq!(Amount::parse("0.100000000").unwrap().units(), 10_000_000);
    }

    #[test]
    fn test_parse_too_precise() {
        assert!(matches!(
            Amount::parse("0.000000001"),
            Err(AmountError::Precision(_))
        ));
        assert!(matches!(
            Amount::parse("1.123456789"),
            Err(AmountError::Precision(_))
        ));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("-1").is_err());
        assert!(Amount::parse("1.2.3").is_err());
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse(".").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for s in ["123.45", "0.00000001", "1000", "12.5", "0"] {
            let a = Amount::parse(s).unwrap();
            assert_eq!(Amount::parse(&a.to_string()).unwrap(), a);
        }
        assert_eq!(Amount::parse("123.45").unwrap().to_string(), "123.45");
        assert_eq!(Amount::from_whole(7).to_string(), "7");
    }

    #[test]
    fn test_wire_minimal_le() {
        // 1 coin = 100_000_000 units = 0x05F5E100 big-endian,
        // reversed to little-endian on the wire.
        let a = Amount::from_whole(1);
        assert_eq!(a.to_wire_bytes(), vec![0x00, 0xe1, 0xf5, 0x05]);
        assert_eq!(Amount::from_units(0).to_wire_bytes(), vec![0x00]);
        assert_eq!(Amount::from_units(0xff).to_wire_bytes(), vec![0xff]);
    }

    #[test]
    fn test_wire_roundtrip() {
        for units in [0u128, 1, 255, 256, 100_000_000, u64::MAX as u128] {
            let a = Amount::from_units(units);
            assert_eq!(Amount::from_wire_bytes(&a.to_wire_bytes()).unwrap(), a);
        }
    }

    #[test]
    fn test_wire_too_long() {
        assert!(matches!(
            Amount::from_wire_bytes(&[0u8; 17]),
            Err(AmountError::WireLength(17))
        ));
    }

    #[test]
    fn test_supply_fits() {
        let supply = Amount::from_whole(crate::constants::MAX_SUPPLY);
        assert!(supply.to_wire_bytes().len() <= 8);
    }

    #[test]
    fn test_sum() {
        let total: Option<Amount> = [Amount::from_whole(1), Amount::from_whole(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Some(Amount::from_whole(3)));
    }
}
