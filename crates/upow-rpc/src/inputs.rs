//! Building spendable [`TransactionInput`]s out of node responses.
//!
//! Every helper filters out outputs already spent by a pending mempool
//! transaction, then binds the owning public key so the inputs can be
//! selected and signed without further lookups.

use std::collections::HashSet;

use upow_crypto::{string_to_point, CurvePoint};
use upow_tx::TransactionInput;
use upow_types::InputType;

use crate::error::RpcError;
use crate::types::{AddressInfo, DelegateBallot, OutputRef, ValidatorBallot};

fn pending_spent_set(pending: &[OutputRef]) -> HashSet<(&str, u8)> {
    pending
        .iter()
        .map(|output| (output.tx_hash.as_str(), output.index))
        .collect()
}

fn parse_tx_hash(tx_hash: &str) -> Result<[u8; 32], RpcError> {
    let bytes = hex::decode(tx_hash)
        .map_err(|e| RpcError::BadField(format!("tx_hash {tx_hash:?}: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| RpcError::BadField(format!("tx_hash {tx_hash:?}: not 32 bytes")))
}

fn unspent_inputs(
    outputs: &[OutputRef],
    pending: &[OutputRef],
    owner: &CurvePoint,
) -> Result<Vec<TransactionInput>, RpcError> {
    let spent = pending_spent_set(pending);
    outputs
        .iter()
        .filter(|output| !spent.contains(&(output.tx_hash.as_str(), output.index)))
        .map(|output| {
            Ok(
                TransactionInput::new(parse_tx_hash(&output.tx_hash)?, output.index, InputType::Regular)
                    .with_amount(output.amount)
                    .with_public_key(*owner),
            )
        })
        .collect()
}

/// Regular spendable inputs owned by `address`.
pub fn spendable_inputs(
    info: &AddressInfo,
    address: &str,
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(address)?;
    unspent_inputs(&info.spendable_outputs, &info.pending_spent_outputs, &owner)
}

/// Stake outputs owned by `address`, spendable only by unstaking.
pub fn stake_inputs(info: &AddressInfo, address: &str) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(address)?;
    unspent_inputs(&info.stake_outputs, &info.pending_spent_outputs, &owner)
}

/// Inode-registration outputs owned by `address`.
pub fn inode_registration_inputs(
    info: &AddressInfo,
    address: &str,
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(address)?;
    unspent_inputs(
        &info.inode_registration_outputs,
        &info.pending_spent_outputs,
        &owner,
    )
}

/// Unspent voting power of `address` as a delegate.
pub fn delegate_vote_inputs(
    info: &AddressInfo,
    address: &str,
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(address)?;
    unspent_inputs(
        &info.delegate_unspent_votes,
        &info.pending_spent_outputs,
        &owner,
    )
}

/// Unspent voting power of `address` as a validator.
pub fn validator_vote_inputs(
    info: &AddressInfo,
    address: &str,
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(address)?;
    unspent_inputs(
        &info.validator_unspent_votes,
        &info.pending_spent_outputs,
        &owner,
    )
}

/// Votes cast by `voter` on `target`, from validator ballots. These are
/// the inputs a validator spends to revoke its vote on an inode.
pub fn validator_ballot_inputs(
    ballots: &[ValidatorBallot],
    voter: &str,
    target: &str,
    pending: &[OutputRef],
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(voter)?;
    let spent = pending_spent_set(pending);
    ballots
        .iter()
        .filter(|ballot| ballot.validator == voter)
        .flat_map(|ballot| &ballot.vote)
        .filter(|vote| {
            vote.wallet == target && !spent.contains(&(vote.tx_hash.as_str(), vote.index))
        })
        .map(|vote| {
            Ok(
                TransactionInput::new(parse_tx_hash(&vote.tx_hash)?, vote.index, InputType::Regular)
                    .with_amount(vote.vote_count)
                    .with_public_key(owner),
            )
        })
        .collect()
}

/// Votes cast by `voter` on `target`, from delegate ballots. The inputs
/// a delegate spends to revoke its vote on a validator.
pub fn delegate_ballot_inputs(
    ballots: &[DelegateBallot],
    voter: &str,
    target: &str,
    pending: &[OutputRef],
) -> Result<Vec<TransactionInput>, RpcError> {
    let owner = string_to_point(voter)?;
    let spent = pending_spent_set(pending);
    ballots
        .iter()
        .filter(|ballot| ballot.delegate == voter)
        .flat_map(|ballot| &ballot.vote)
        .filter(|vote| {
            vote.wallet == target && !spent.contains(&(vote.tx_hash.as_str(), vote.index))
        })
        .map(|vote| {
            Ok(
                TransactionInput::new(parse_tx_hash(&vote.tx_hash)?, vote.index, InputType::Regular)
                    .with_amount(vote.vote_count)
                    .with_public_key(owner),
            )
        })
        .collect()
}
