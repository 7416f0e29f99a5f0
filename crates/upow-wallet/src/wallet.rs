//! Builder pipelines, one per spend intent.
//!
//! Every pipeline has the same shape: derive the sender address from the
//! private key, fetch the relevant ledger state, enforce the intent's
//! preconditions before anything else, select inputs, build outputs
//! (plus change where the intent allows it), attach the intent tag when
//! the output type alone does not say what the transaction is, and sign.
//!
//! The network-free parts live in `build_*` functions over fetched state
//! so the precondition logic is testable without a node.

use log::info;

use upow_crypto::PrivateKey;
use upow_rpc::{
    inputs, AddressInfoQuery, BalanceInfo, DelegateBallot, NodeClient, OutputRef, ValidatorBallot,
};
use upow_tx::{select_inputs, Transaction, TransactionInput, TransactionOutput};
use upow_types::constants::{
    INODE_REGISTRATION_COST, MAX_INODES, MAX_VOTE_RANGE, VALIDATOR_REGISTRATION_COST,
};
use upow_types::{Amount, AmountError, OutputType, TransactionKind};

use crate::error::WalletError;

/// High-level wallet over one node connection.
pub struct Wallet {
    node: NodeClient,
}

impl Wallet {
    pub fn new(node: NodeClient) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &NodeClient {
        &self.node
    }

    /// Send `amount` to `recipient`, with change going to `send_back`
    /// (the sender itself by default).
    pub async fn transfer(
        &self,
        key: &PrivateKey,
        recipient: &str,
        amount: Amount,
        message: Option<Vec<u8>>,
        send_back: Option<&str>,
    ) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(&key.address(), AddressInfoQuery::default())
            .await?;
        build_transfer(key, &info, &[(recipient.to_string(), amount)], message, send_back)
    }

    /// Send to several recipients in one transaction.
    pub async fn transfer_many(
        &self,
        key: &PrivateKey,
        recipients: &[String],
        amounts: &[Amount],
        message: Option<Vec<u8>>,
        send_back: Option<&str>,
    ) -> Result<Transaction, WalletError> {
        if recipients.len() != amounts.len() {
            return Err(WalletError::RecipientsMismatch);
        }
        let pairs: Vec<(String, Amount)> = recipients
            .iter()
            .cloned()
            .zip(amounts.iter().copied())
            .collect();
        let info = self
            .node
            .get_address_info(&key.address(), AddressInfoQuery::default())
            .await?;
        build_transfer(key, &info, &pairs, message, send_back)
    }

    /// Lock `amount` as stake. Fails if the address already has one.
    pub async fn stake(
        &self,
        key: &PrivateKey,
        amount: Amount,
        send_back: Option<&str>,
    ) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    delegate_spent_votes: true,
                    delegate_unspent_votes: true,
                    ..Default::default()
                },
            )
            .await?;
        build_stake(key, &info, amount, send_back)
    }

    /// Release the existing stake back to the sender.
    pub async fn unstake(&self, key: &PrivateKey) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    ..Default::default()
                },
            )
            .await?;
        build_unstake(key, &info)
    }

    /// Register the address as an inode, locking the fixed
    /// registration cost.
    pub async fn register_inode(&self, key: &PrivateKey) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    delegate_spent_votes: true,
                    address_state: true,
                    ..Default::default()
                },
            )
            .await?;
        let inode_count = self.node.get_inode_addresses().await?.len();
        build_inode_registration(key, &info, inode_count)
    }

    /// Spend the registration output back to the sender, dropping the
    /// inode role.
    pub async fn deregister_inode(&self, key: &PrivateKey) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    delegate_spent_votes: true,
                    inode_registration_outputs: true,
                    ..Default::default()
                },
            )
            .await?;
        build_inode_deregistration(key, &info)
    }

    /// Register the address as a validator.
    pub async fn register_validator(&self, key: &PrivateKey) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    delegate_spent_votes: true,
                    address_state: true,
                    ..Default::default()
                },
            )
            .await?;
        build_validator_registration(key, &info)
    }

    /// Cast `range` votes for `recipient`, as a validator or a delegate
    /// depending on how the sender is registered.
    pub async fn vote(
        &self,
        key: &PrivateKey,
        range: Amount,
        recipient: &str,
    ) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    delegate_spent_votes: true,
                    delegate_unspent_votes: true,
                    address_state: true,
                    validator_unspent_votes: true,
                    ..Default::default()
                },
            )
            .await?;
        build_vote(key, &info, range, recipient)
    }

    /// Take back every vote the sender cast on `from_address`.
    pub async fn revoke(
        &self,
        key: &PrivateKey,
        from_address: &str,
    ) -> Result<Transaction, WalletError> {
        let info = self
            .node
            .get_address_info(
                &key.address(),
                AddressInfoQuery {
                    stake_outputs: true,
                    delegate_spent_votes: true,
                    address_state: true,
                    ..Default::default()
                },
            )
            .await?;
        if info.is_validator {
            let ballots = self.node.get_validators_info(from_address).await?;
            build_revoke_as_validator(key, &ballots, &info.pending_spent_outputs, from_address)
        } else {
            let ballots = self.node.get_delegates_info(from_address).await?;
            build_revoke_as_delegate(key, &ballots, &info.pending_spent_outputs, from_address)
        }
    }

    pub async fn balance(&self, address: &str) -> Result<BalanceInfo, WalletError> {
        Ok(self.node.get_balance_info(address).await?)
    }

    /// Broadcast a signed transaction. Returns whether the node took it.
    pub async fn push(&self, tx: &Transaction) -> Result<bool, WalletError> {
        let accepted = self.node.push_tx(tx.hex()).await?;
        if accepted {
            info!("transaction pushed, hash {}", tx.hash());
        }
        Ok(accepted)
    }
}

fn total(inputs: &[TransactionInput]) -> Amount {
    inputs
        .iter()
        .map(TransactionInput::amount_or_zero)
        .fold(Amount::ZERO, |acc, amount| {
            acc.checked_add(amount).unwrap_or(acc)
        })
}

/// Check the candidates cover `need`, then run selection over them.
/// Returns the selected inputs and their summed amount.
fn funded_selection(
    candidates: Vec<TransactionInput>,
    need: Amount,
) -> Result<(Vec<TransactionInput>, Amount), WalletError> {
    if candidates.is_empty() {
        return Err(WalletError::NoSpendableOutputs);
    }
    let have = total(&candidates);
    if have < need {
        return Err(WalletError::InsufficientFunds { need, have });
    }
    let selected = select_inputs(candidates, need);
    let selected_total = total(&selected);
    Ok((selected, selected_total))
}

fn change_output(
    send_back: &str,
    selected_total: Amount,
    need: Amount,
) -> Result<Option<TransactionOutput>, WalletError> {
    match selected_total.checked_sub(need) {
        Some(change) if !change.is_zero() => Ok(Some(TransactionOutput::new(
            send_back,
            change,
            OutputType::Regular,
        )?)),
        _ => Ok(None),
    }
}

fn build_transfer(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
    recipients: &[(String, Amount)],
    message: Option<Vec<u8>>,
    send_back: Option<&str>,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let send_back = send_back.unwrap_or(&sender);

    let need = recipients
        .iter()
        .map(|(_, amount)| *amount)
        .sum::<Option<Amount>>()
        .ok_or(AmountError::Overflow)?;
    let candidates = inputs::spendable_inputs(info, &sender)?;
    let (selected, selected_total) = funded_selection(candidates, need)?;

    let mut outputs = Vec::with_capacity(recipients.len() + 1);
    for (address, amount) in recipients {
        outputs.push(TransactionOutput::new(address, *amount, OutputType::Regular)?);
    }
    if let Some(change) = change_output(send_back, selected_total, need)? {
        outputs.push(change);
    }

    let mut tx = Transaction::new(selected, outputs, message, None)?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_stake(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
    amount: Amount,
    send_back: Option<&str>,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let send_back = send_back.unwrap_or(&sender);

    if !inputs::stake_inputs(info, &sender)?.is_empty() {
        return Err(WalletError::AlreadyStaked);
    }
    let candidates = inputs::spendable_inputs(info, &sender)?;
    let (selected, selected_total) = funded_selection(candidates, amount)?;

    let mut outputs = vec![TransactionOutput::new(&sender, amount, OutputType::Stake)?];
    if let Some(change) = change_output(send_back, selected_total, amount)? {
        outputs.push(change);
    }

    let mut tx = Transaction::new(selected, outputs, None, None)?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_unstake(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let mut stake_inputs = inputs::stake_inputs(info, &sender)?;
    if stake_inputs.is_empty() {
        return Err(WalletError::NothingStaked);
    }
    // Only the first stake output is released.
    let stake_input = stake_inputs.remove(0);
    let amount = stake_input.amount_or_zero();

    let outputs = vec![TransactionOutput::new(&sender, amount, OutputType::UnStake)?];
    let mut tx = Transaction::new(vec![stake_input], outputs, None, None)?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_inode_registration(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
    inode_count: usize,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    if inputs::stake_inputs(info, &sender)?.is_empty() {
        return Err(WalletError::NotADelegate);
    }
    if info.is_inode {
        return Err(WalletError::AlreadyInode);
    }
    if info.is_validator {
        return Err(WalletError::AlreadyValidator);
    }
    if inode_count >= MAX_INODES {
        return Err(WalletError::InodeCapReached);
    }

    let cost = Amount::from_whole(INODE_REGISTRATION_COST);
    let candidates = inputs::spendable_inputs(info, &sender)?;
    let (selected, _) = funded_selection(candidates, cost)?;

    // The excess over the registration cost is deliberately not
    // returned as change.
    let outputs = vec![TransactionOutput::new(
        &sender,
        cost,
        OutputType::InodeRegistration,
    )?];
    let mut tx = Transaction::new(selected, outputs, None, None)?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_inode_deregistration(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let registration_inputs = inputs::inode_registration_inputs(info, &sender)?;
    let Some(first) = registration_inputs.first() else {
        return Err(WalletError::NotAnInode);
    };

    let outputs = vec![TransactionOutput::new(
        &sender,
        first.amount_or_zero(),
        OutputType::Regular,
    )?];
    let mut tx = Transaction::new(
        registration_inputs,
        outputs,
        Some(TransactionKind::InodeDeRegistration.tag_bytes()),
        None,
    )?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_validator_registration(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    if info.is_validator {
        return Err(WalletError::AlreadyValidator);
    }
    if info.is_inode {
        return Err(WalletError::AlreadyInode);
    }

    let cost = Amount::from_whole(VALIDATOR_REGISTRATION_COST);
    let candidates = inputs::spendable_inputs(info, &sender)?;
    let (selected, _) = funded_selection(candidates, cost)?;

    let outputs = vec![TransactionOutput::new(
        &sender,
        cost,
        OutputType::ValidatorRegistration,
    )?];
    let mut tx = Transaction::new(
        selected,
        outputs,
        Some(TransactionKind::ValidatorRegistration.tag_bytes()),
        None,
    )?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_vote(
    key: &PrivateKey,
    info: &upow_rpc::AddressInfo,
    range: Amount,
    recipient: &str,
) -> Result<Transaction, WalletError> {
    if range.is_zero() || range > Amount::from_whole(MAX_VOTE_RANGE) {
        return Err(WalletError::VoteRangeOutOfBounds(MAX_VOTE_RANGE));
    }
    if info.is_inode {
        return Err(WalletError::InodeCannotVote);
    }

    let sender = key.address();
    let (candidates, output_type, kind) = if info.is_validator {
        (
            inputs::validator_vote_inputs(info, &sender)?,
            OutputType::VoteAsValidator,
            TransactionKind::VoteAsValidator,
        )
    } else {
        (
            inputs::delegate_vote_inputs(info, &sender)?,
            OutputType::VoteAsDelegate,
            TransactionKind::VoteAsDelegate,
        )
    };
    if candidates.is_empty() {
        return Err(WalletError::NoVotingOutputs);
    }
    let have = total(&candidates);
    if have < range {
        return Err(WalletError::InsufficientVotingPower { need: range, have });
    }

    let selected = select_inputs(candidates, range);
    let outputs = vec![TransactionOutput::new(recipient, range, output_type)?];
    let mut tx = Transaction::new(selected, outputs, Some(kind.tag_bytes()), None)?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_revoke_as_validator(
    key: &PrivateKey,
    ballots: &[ValidatorBallot],
    pending: &[OutputRef],
    from_address: &str,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let ballot_inputs = inputs::validator_ballot_inputs(ballots, &sender, from_address, pending)?;
    if ballot_inputs.is_empty() {
        return Err(WalletError::NoVotingRecord);
    }

    let revoked = total(&ballot_inputs);
    let outputs = vec![TransactionOutput::new(
        &sender,
        revoked,
        OutputType::ValidatorVotingPower,
    )?];
    let mut tx = Transaction::new(
        ballot_inputs,
        outputs,
        Some(TransactionKind::RevokeAsValidator.tag_bytes()),
        None,
    )?;
    tx.sign(&[key])?;
    Ok(tx)
}

fn build_revoke_as_delegate(
    key: &PrivateKey,
    ballots: &[DelegateBallot],
    pending: &[OutputRef],
    from_address: &str,
) -> Result<Transaction, WalletError> {
    let sender = key.address();
    let ballot_inputs = inputs::delegate_ballot_inputs(ballots, &sender, from_address, pending)?;
    if ballot_inputs.is_empty() {
        return Err(WalletError::NoVotingRecord);
    }

    let revoked = total(&ballot_inputs);
    let outputs = vec![TransactionOutput::new(
        &sender,
        revoked,
        OutputType::DelegateVotingPower,
    )?];
    let mut tx = Transaction::new(
        ballot_inputs,
        outputs,
        Some(TransactionKind::RevokeAsDelegate.tag_bytes()),
        None,
    )?;
    tx.sign(&[key])?;
    Ok(tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use upow_rpc::{AddressInfo, Vote};

    fn key() -> PrivateKey {
        PrivateKey::from_hex(&"71".repeat(32)).unwrap()
    }

    fn output_ref(hash_byte: u8, index: u8, coins: u64) -> OutputRef {
        OutputRef {
            tx_hash: hex::encode([hash_byte; 32]),
            index,
            amount: Amount::from_whole(coins),
        }
    }

    fn funded_info(coins: &[u64]) -> AddressInfo {
        AddressInfo {
            spendable_outputs: coins
                .iter()
                .enumerate()
                .map(|(i, &c)| output_ref(i as u8 + 1, 0, c))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_transfer_builds_change_to_sender() {
        let k = key();
        let recipient = PrivateKey::from_hex(&"72".repeat(32)).unwrap().address();
        let tx = build_transfer(
            &k,
            &funded_info(&[10]),
            &[(recipient.clone(), Amount::from_whole(7))],
            None,
            None,
        )
        .unwrap();

        assert_eq!(tx.outputs().len(), 2);
        assert_eq!(tx.outputs()[0].address, recipient);
        assert_eq!(tx.outputs()[0].amount, Amount::from_whole(7));
        assert_eq!(tx.outputs()[1].address, k.address());
        assert_eq!(tx.outputs()[1].amount, Amount::from_whole(3));
        tx.verify_signatures().unwrap();
    }

    #[test]
    fn test_transfer_exact_cover_has_no_change() {
        let k = key();
        let tx = build_transfer(
            &k,
            &funded_info(&[7]),
            &[(k.address(), Amount::from_whole(7))],
            None,
            None,
        )
        .unwrap();
        assert_eq!(tx.outputs().len(), 1);
    }

    #[test]
    fn test_transfer_without_outputs_fails() {
        let k = key();
        let result = build_transfer(
            &k,
            &AddressInfo::default(),
            &[(k.address(), Amount::from_whole(1))],
            None,
            None,
        );
        assert!(matches!(result, Err(WalletError::NoSpendableOutputs)));
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let k = key();
        let result = build_transfer(
            &k,
            &funded_info(&[2, 3]),
            &[(k.address(), Amount::from_whole(9))],
            None,
            None,
        );
        assert!(matches!(
            result,
            Err(WalletError::InsufficientFunds { need, have })
                if need == Amount::from_whole(9) && have == Amount::from_whole(5)
        ));
    }

    #[test]
    fn test_stake_rejected_when_already_staked() {
        let k = key();
        let mut info = funded_info(&[50]);
        info.stake_outputs = vec![output_ref(9, 0, 10)];
        let result = build_stake(&k, &info, Amount::from_whole(5), None);
        assert!(matches!(result, Err(WalletError::AlreadyStaked)));
    }

    #[test]
    fn test_stake_output_type_and_change() {
        let k = key();
        let tx = build_stake(&k, &funded_info(&[50]), Amount::from_whole(5), None).unwrap();
        assert_eq!(tx.outputs()[0].output_type, OutputType::Stake);
        assert_eq!(tx.outputs()[0].amount, Amount::from_whole(5));
        assert_eq!(tx.outputs()[1].amount, Amount::from_whole(45));
        assert_eq!(tx.kind(), TransactionKind::Regular);
    }

    #[test]
    fn test_unstake_spends_first_stake_output_only() {
        let k = key();
        let mut info = AddressInfo::default();
        info.stake_outputs = vec![output_ref(1, 0, 10), output_ref(2, 0, 20)];
        let tx = build_unstake(&k, &info).unwrap();
        assert_eq!(tx.inputs().len(), 1);
        assert_eq!(tx.inputs()[0].tx_hash, [1u8; 32]);
        assert_eq!(tx.outputs()[0].output_type, OutputType::UnStake);
        assert_eq!(tx.outputs()[0].amount, Amount::from_whole(10));
    }

    #[test]
    fn test_unstake_requires_a_stake() {
        let result = build_unstake(&key(), &AddressInfo::default());
        assert!(matches!(result, Err(WalletError::NothingStaked)));
    }

    #[test]
    fn test_inode_registration_preconditions() {
        let k = key();

        let no_stake = funded_info(&[2000]);
        assert!(matches!(
            build_inode_registration(&k, &no_stake, 0),
            Err(WalletError::NotADelegate)
        ));

        let mut staked = funded_info(&[2000]);
        staked.stake_outputs = vec![output_ref(9, 0, 10)];

        let mut as_validator = staked.clone();
        as_validator.is_validator = true;
        assert!(matches!(
            build_inode_registration(&k, &as_validator, 0),
            Err(WalletError::AlreadyValidator)
        ));

        assert!(matches!(
            build_inode_registration(&k, &staked, MAX_INODES),
            Err(WalletError::InodeCapReached)
        ));

        let tx = build_inode_registration(&k, &staked, 3).unwrap();
        assert_eq!(tx.outputs().len(), 1);
        assert_eq!(tx.outputs()[0].output_type, OutputType::InodeRegistration);
        assert_eq!(
            tx.outputs()[0].amount,
            Amount::from_whole(INODE_REGISTRATION_COST)
        );
        assert!(tx.message().is_none());
    }

    #[test]
    fn test_inode_deregistration_tags_and_returns_cost() {
        let k = key();
        let mut info = AddressInfo::default();
        info.inode_registration_outputs = vec![output_ref(4, 1, 1000)];
        let tx = build_inode_deregistration(&k, &info).unwrap();
        assert_eq!(tx.kind(), TransactionKind::InodeDeRegistration);
        assert_eq!(tx.message(), Some(&b"4"[..]));
        assert_eq!(tx.outputs()[0].amount, Amount::from_whole(1000));
        assert_eq!(tx.outputs()[0].output_type, OutputType::Regular);

        assert!(matches!(
            build_inode_deregistration(&k, &AddressInfo::default()),
            Err(WalletError::NotAnInode)
        ));
    }

    #[test]
    fn test_validator_registration() {
        let k = key();
        let tx = build_validator_registration(&k, &funded_info(&[5])).unwrap();
        assert_eq!(tx.kind(), TransactionKind::ValidatorRegistration);
        assert_eq!(
            tx.outputs()[0].amount,
            Amount::from_whole(VALIDATOR_REGISTRATION_COST)
        );
        assert_eq!(tx.outputs().len(), 1);

        let mut inode = funded_info(&[5]);
        inode.is_inode = true;
        assert!(matches!(
            build_validator_registration(&k, &inode),
            Err(WalletError::AlreadyInode)
        ));
    }

    #[test]
    fn test_vote_range_bounds() {
        let k = key();
        let info = AddressInfo::default();
        assert!(matches!(
            build_vote(&k, &info, Amount::ZERO, &k.address()),
            Err(WalletError::VoteRangeOutOfBounds(_))
        ));
        assert!(matches!(
            build_vote(&k, &info, Amount::from_whole(11), &k.address()),
            Err(WalletError::VoteRangeOutOfBounds(_))
        ));
    }

    #[test]
    fn test_vote_dispatches_on_registration() {
        let k = key();
        let target = PrivateKey::from_hex(&"73".repeat(32)).unwrap().address();

        let mut delegate = AddressInfo::default();
        delegate.delegate_unspent_votes = vec![output_ref(1, 0, 10)];
        let tx = build_vote(&k, &delegate, Amount::from_whole(4), &target).unwrap();
        assert_eq!(tx.kind(), TransactionKind::VoteAsDelegate);
        assert_eq!(tx.outputs()[0].output_type, OutputType::VoteAsDelegate);

        let mut validator = AddressInfo::default();
        validator.is_validator = true;
        validator.validator_unspent_votes = vec![output_ref(1, 0, 10)];
        let tx = build_vote(&k, &validator, Amount::from_whole(4), &target).unwrap();
        assert_eq!(tx.kind(), TransactionKind::VoteAsValidator);

        let mut inode = AddressInfo::default();
        inode.is_inode = true;
        assert!(matches!(
            build_vote(&k, &inode, Amount::from_whole(1), &target),
            Err(WalletError::InodeCannotVote)
        ));
    }

    #[test]
    fn test_vote_needs_enough_power() {
        let k = key();
        let mut info = AddressInfo::default();
        info.delegate_unspent_votes = vec![output_ref(1, 0, 2)];
        let result = build_vote(&k, &info, Amount::from_whole(5), &k.address());
        assert!(matches!(
            result,
            Err(WalletError::InsufficientVotingPower { .. })
        ));
    }

    #[test]
    fn test_revoke_sums_votes_back_to_self() {
        let k = key();
        let target = PrivateKey::from_hex(&"74".repeat(32)).unwrap().address();
        let vote = |hash_byte: u8, coins| Vote {
            tx_hash: hex::encode([hash_byte; 32]),
            index: 0,
            vote_count: Amount::from_whole(coins),
            wallet: target.clone(),
        };
        let ballots = vec![ValidatorBallot {
            validator: k.address(),
            vote: vec![vote(1, 3), vote(2, 4)],
        }];

        let tx = build_revoke_as_validator(&k, &ballots, &[], &target).unwrap();
        assert_eq!(tx.kind(), TransactionKind::RevokeAsValidator);
        assert_eq!(tx.inputs().len(), 2);
        assert_eq!(tx.outputs()[0].amount, Amount::from_whole(7));
        assert_eq!(tx.outputs()[0].address, k.address());
        assert_eq!(
            tx.outputs()[0].output_type,
            OutputType::ValidatorVotingPower
        );

        assert!(matches!(
            build_revoke_as_validator(&k, &[], &[], &target),
            Err(WalletError::NoVotingRecord)
        ));
    }
}
