//! Typed node responses.
//!
//! The node renders amounts as JSON number literals at 10^-8 scale.
//! They are parsed from the literal text (string or number), never
//! through `f64`, so every representable amount survives the trip.

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;
use serde_json::Value;
use upow_types::Amount;

fn amount_from_json<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let literal = match &value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(D::Error::custom(format!(
                "amount must be a number or string, got {other}"
            )))
        }
    };
    Amount::parse(&literal).map_err(D::Error::custom)
}

/// A spendable or staked output slot owned by an address.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputRef {
    pub tx_hash: String,
    pub index: u8,
    #[serde(default, deserialize_with = "amount_from_json")]
    pub amount: Amount,
}

/// One cast vote inside a ballot.
#[derive(Debug, Clone, Deserialize)]
pub struct Vote {
    pub tx_hash: String,
    pub index: u8,
    #[serde(deserialize_with = "amount_from_json")]
    pub vote_count: Amount,
    /// The address the vote was cast for.
    pub wallet: String,
}

/// Votes cast by one validator, as returned by `get_validators_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatorBallot {
    pub validator: String,
    #[serde(default)]
    pub vote: Vec<Vote>,
}

/// Votes cast by one delegate, as returned by `get_delegates_info`.
#[derive(Debug, Clone, Deserialize)]
pub struct DelegateBallot {
    pub delegate: String,
    #[serde(default)]
    pub vote: Vec<Vote>,
}

/// `get_address_info` result. Optional sections are only populated when
/// the matching query flag was set; they default to empty otherwise.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressInfo {
    #[serde(default, deserialize_with = "amount_from_json")]
    pub balance: Amount,
    #[serde(default, deserialize_with = "amount_from_json")]
    pub stake: Amount,
    #[serde(default)]
    pub spendable_outputs: Vec<OutputRef>,
    #[serde(default)]
    pub pending_spent_outputs: Vec<OutputRef>,
    #[serde(default)]
    pub stake_outputs: Vec<OutputRef>,
    #[serde(default)]
    pub inode_registration_outputs: Vec<OutputRef>,
    #[serde(default)]
    pub delegate_unspent_votes: Vec<OutputRef>,
    #[serde(default)]
    pub delegate_spent_votes: Vec<OutputRef>,
    #[serde(default)]
    pub validator_unspent_votes: Vec<OutputRef>,
    #[serde(default)]
    pub is_inode: bool,
    #[serde(default)]
    pub is_validator: bool,
}

/// Balance summary derived from a plain `get_address_info` call.
#[derive(Debug, Clone, Copy)]
pub struct BalanceInfo {
    pub total: Amount,
    pub stake: Amount,
}
