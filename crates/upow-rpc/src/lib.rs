//! uPow node client library.
//!
//! Provides an async HTTP client for the uPow node API and helpers that
//! turn node responses into spendable transaction inputs.
//!
//! # Example
//!
//! ```ignore
//! use upow_rpc::NodeClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     let node = NodeClient::new("https://api.upow.ai").unwrap();
//!     let balance = node.get_balance_info("Dq...").await.unwrap();
//!     println!("balance: {}", balance.total);
//! }
//! ```

pub mod client;
pub mod error;
pub mod inputs;
pub mod types;

pub use client::{AddressInfoQuery, NodeClient, NodeConfig, DEFAULT_NODE_URL};
pub use error::RpcError;
pub use types::{AddressInfo, BalanceInfo, DelegateBallot, OutputRef, ValidatorBallot, Vote};
