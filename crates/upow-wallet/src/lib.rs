//! uPow wallet core.
//!
//! One builder pipeline per spend intent (transfer, stake, unstake,
//! inode and validator registration, voting, revocation), plus the
//! on-disk key store and balance queries. Transactions come back fully
//! signed and ready to broadcast.

pub mod error;
pub mod keystore;
pub mod wallet;

pub use error::WalletError;
pub use keystore::{KeyPair, KeyStore};
pub use wallet::Wallet;
