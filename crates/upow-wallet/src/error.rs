//! Wallet error types.

use thiserror::Error;
use upow_types::Amount;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no spendable outputs")]
    NoSpendableOutputs,

    #[error("insufficient funds: need {need}, have {have}")]
    InsufficientFunds { need: Amount, have: Amount },

    #[error("recipient and amount lists must have the same length")]
    RecipientsMismatch,

    #[error("address has already staked")]
    AlreadyStaked,

    #[error("there is nothing staked")]
    NothingStaked,

    #[error("not a delegate; become one by staking")]
    NotADelegate,

    #[error("address is already registered as an inode")]
    AlreadyInode,

    #[error("address is already registered as a validator")]
    AlreadyValidator,

    #[error("the inode registration cap is reached")]
    InodeCapReached,

    #[error("address is not registered as an inode")]
    NotAnInode,

    #[error("vote range must be greater than 0 and at most {0}")]
    VoteRangeOutOfBounds(u64),

    #[error("an inode cannot vote")]
    InodeCannotVote,

    #[error("no voting outputs")]
    NoVotingOutputs,

    #[error("insufficient voting power: need {need}, have {have}")]
    InsufficientVotingPower { need: Amount, have: Amount },

    #[error("no vote on that address to revoke")]
    NoVotingRecord,

    #[error("RPC error: {0}")]
    Rpc(#[from] upow_rpc::RpcError),

    #[error(transparent)]
    Crypto(#[from] upow_crypto::CryptoError),

    #[error(transparent)]
    Tx(#[from] upow_tx::TxError),

    #[error(transparent)]
    Amount(#[from] upow_types::AmountError),

    #[error("key store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("key store parse error: {0}")]
    KeyStore(#[from] serde_json::Error),

    #[error("no key at index {0}")]
    NoSuchKey(usize),
}
