//! Protocol constants and wire-level enums.

use serde::{Deserialize, Serialize};

/// Atomic units per coin (amounts are held at 10^-8 scale).
pub const SMALLEST_UNIT: u128 = 100_000_000;

/// Total coin supply, in whole coins.
pub const MAX_SUPPLY: u64 = 18_884_643;

/// Maximum number of registered inodes on the network.
pub const MAX_INODES: usize = 12;

/// Maximum inputs (and outputs) per transaction; counts are single bytes.
pub const MAX_INPUTS: usize = 255;
pub const MAX_OUTPUTS: usize = 255;

/// Highest supported transaction version.
pub const MAX_TX_VERSION: u8 = 3;

/// Cost of registering an inode, in whole coins.
pub const INODE_REGISTRATION_COST: u64 = 1000;

/// Cost of registering a validator, in whole coins.
pub const VALIDATOR_REGISTRATION_COST: u64 = 1;

/// Upper bound on a single vote (voting power is in the range (0, 10]).
pub const MAX_VOTE_RANGE: u64 = 10;

/// Type tag carried by every transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OutputType {
    Regular = 0,
    Stake = 1,
    UnStake = 2,
    InodeRegistration = 3,
    ValidatorRegistration = 5,
    VoteAsValidator = 6,
    VoteAsDelegate = 7,
    ValidatorVotingPower = 8,
    DelegateVotingPower = 9,
}

impl OutputType {
    /// Decode an output type from its wire byte.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Regular),
            1 => Some(Self::Stake),
            2 => Some(Self::UnStake),
            3 => Some(Self::InodeRegistration),
            5 => Some(Self::ValidatorRegistration),
            6 => Some(Self::VoteAsValidator),
            7 => Some(Self::VoteAsDelegate),
            8 => Some(Self::ValidatorVotingPower),
            9 => Some(Self::DelegateVotingPower),
            _ => None,
        }
    }

    pub fn is_stake(self) -> bool {
        self == Self::Stake
    }
}

/// Type tag carried by every transaction input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum InputType {
    Regular = 0,
    Fees = 1,
}

impl InputType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Regular),
            1 => Some(Self::Fees),
            _ => None,
        }
    }
}

/// The intent behind a transaction, as signalled by its message tag.
///
/// Intents whose output type alone does not disambiguate them (for example
/// inode de-registration, which spends into a REGULAR output) carry the kind
/// value as an ASCII-decimal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TransactionKind {
    Regular = 0,
    Stake = 1,
    UnStake = 2,
    InodeRegistration = 3,
    InodeDeRegistration = 4,
    ValidatorRegistration = 5,
    VoteAsValidator = 6,
    VoteAsDelegate = 7,
    RevokeAsValidator = 8,
    RevokeAsDelegate = 9,
}

impl TransactionKind {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Regular),
            1 => Some(Self::Stake),
            2 => Some(Self::UnStake),
            3 => Some(Self::InodeRegistration),
            4 => Some(Self::InodeDeRegistration),
            5 => Some(Self::ValidatorRegistration),
            6 => Some(Self::VoteAsValidator),
            7 => Some(Self::VoteAsDelegate),
            8 => Some(Self::RevokeAsValidator),
            9 => Some(Self::RevokeAsDelegate),
            _ => None,
        }
    }

    /// The message bytes that tag a transaction with this kind: the kind
    /// value rendered as ASCII decimal (`4` -> `b"4"`).
    pub fn tag_bytes(self) -> Vec<u8> {
        (self as u8).to_string().into_bytes()
    }

    /// Derive the kind from a transaction's message bytes.
    ///
    /// Anything that is not a valid ASCII-decimal kind value (including no
    /// message at all) is a regular transfer.
    pub fn from_message(message: Option<&[u8]>) -> Self {
        message
            .and_then(|m| std::str::from_utf8(m).ok())
            .and_then(|s| s.parse::<u8>().ok())
            .and_then(Self::from_u8)
            .unwrap_or(Self::Regular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_type_roundtrip() {
        for v in [0u8, 1, 2, 3, 5, 6, 7, 8, 9] {
            let t = OutputType::from_u8(v).unwrap();
            assert_eq!(t as u8, v);
        }
        // 4 is skipped in the output-type table (de-registration has no
        // dedicated output) and anything above 9 is unknown.
        assert!(OutputType::from_u8(4).is_none());
        assert!(OutputType::from_u8(10).is_none());
    }

    #[test]
    fn test_input_type_roundtrip() {
        assert_eq!(InputType::from_u8(0), Some(InputType::Regular));
        assert_eq!(InputType::from_u8(1), Some(InputType::Fees));
        assert!(InputType::from_u8(2).is_none());
    }

    #[test]
    fn test_kind_tag_roundtrip() {
        for v in 0u8..=9 {
            let kind = TransactionKind::from_u8(v).unwrap();
            let tag = kind.tag_bytes();
            assert_eq!(TransactionKind::from_message(Some(&tag)), kind);
        }
    }

    #[test]
    fn test_kind_from_garbage_message() {
        assert_eq!(
            TransactionKind::from_message(Some(b"hello")),
            TransactionKind::Regular
        );
        assert_eq!(
            TransactionKind::from_message(Some(&[0xff, 0xfe])),
            TransactionKind::Regular
        );
        assert_eq!(
            TransactionKind::from_message(Some(b"42")),
            TransactionKind::Regular
        );
        assert_eq!(TransactionKind::from_message(None), TransactionKind::Regular);
    }
}
