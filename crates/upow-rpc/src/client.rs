//! Async HTTP client for the uPow node.
//!
//! All endpoints are plain GETs with query parameters. Failures are
//! never retried; a failed query propagates to the caller so no partial
//! transaction is ever built on stale state.

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use crate::error::RpcError;
use crate::types::{AddressInfo, DelegateBallot, ValidatorBallot};

/// Publicly operated node.
pub const DEFAULT_NODE_URL: &str = "https://api.upow.ai";

/// Configuration for a node client.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Base URL, e.g. `https://api.upow.ai`.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_NODE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Response envelope wrapping most node endpoints.
#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    ok: bool,
    result: Option<T>,
    error: Option<String>,
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, RpcError> {
        if let Some(error) = self.error {
            return Err(RpcError::Node(error));
        }
        self.result.ok_or(RpcError::NoResult)
    }
}

/// Which optional sections `get_address_info` should include.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressInfoQuery {
    pub stake_outputs: bool,
    pub delegate_spent_votes: bool,
    pub delegate_unspent_votes: bool,
    pub address_state: bool,
    pub inode_registration_outputs: bool,
    pub validator_unspent_votes: bool,
}

/// Async client for the uPow node HTTP API.
pub struct NodeClient {
    client: reqwest::Client,
    config: NodeConfig,
}

impl NodeClient {
    pub fn new(url: &str) -> Result<Self, RpcError> {
        Self::with_config(NodeConfig {
            url: url.trim_end_matches('/').to_string(),
            ..Default::default()
        })
    }

    pub fn with_config(config: NodeConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RpcError> {
        let url = format!("{}/{}", self.config.url, path);
        debug!("GET {url} {query:?}");
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// Fetch the ledger state of one address, with the sections named by
    /// `query` included. Pending transactions are always considered.
    pub async fn get_address_info(
        &self,
        address: &str,
        query: AddressInfoQuery,
    ) -> Result<AddressInfo, RpcError> {
        let params = [
            ("address", address.to_string()),
            ("transactions_count_limit", "0".to_string()),
            ("show_pending", "true".to_string()),
            ("stake_outputs", query.stake_outputs.to_string()),
            (
                "delegate_spent_votes",
                query.delegate_spent_votes.to_string(),
            ),
            (
                "delegate_unspent_votes",
                query.delegate_unspent_votes.to_string(),
            ),
            ("address_state", query.address_state.to_string()),
            (
                "inode_registration_outputs",
                query.inode_registration_outputs.to_string(),
            ),
            (
                "validator_unspent_votes",
                query.validator_unspent_votes.to_string(),
            ),
        ];
        let envelope: Envelope<AddressInfo> = self.get("get_address_info", &params).await?;
        envelope.into_result()
    }

    /// The addresses of all registered inodes.
    pub async fn get_inode_addresses(&self) -> Result<Vec<String>, RpcError> {
        let envelope: Envelope<Vec<String>> = self.get("dobby_info", &[]).await?;
        envelope.into_result()
    }

    /// Ballots of every validator voting for `inode`. Returned bare,
    /// without the usual envelope.
    pub async fn get_validators_info(
        &self,
        inode: &str,
    ) -> Result<Vec<ValidatorBallot>, RpcError> {
        self.get("get_validators_info", &[("inode", inode.to_string())])
            .await
    }

    /// Ballots of every delegate voting for `validator`. Returned bare.
    pub async fn get_delegates_info(
        &self,
        validator: &str,
    ) -> Result<Vec<DelegateBallot>, RpcError> {
        self.get("get_delegates_info", &[("validator", validator.to_string())])
            .await
    }

    /// Total and staked balance of one address.
    pub async fn get_balance_info(
        &self,
        address: &str,
    ) -> Result<crate::types::BalanceInfo, RpcError> {
        let info = self
            .get_address_info(address, AddressInfoQuery::default())
            .await?;
        Ok(crate::types::BalanceInfo {
            total: info.balance,
            stake: info.stake,
        })
    }

    /// Broadcast a fully signed transaction. Returns whether the node
    /// accepted it into its mempool.
    pub async fn push_tx(&self, tx_hex: &str) -> Result<bool, RpcError> {
        let envelope: Envelope<serde_json::Value> = self
            .get("push_tx", &[("tx_hex", tx_hex.to_string())])
            .await?;
        if let Some(error) = envelope.error {
            return Err(RpcError::Node(error));
        }
        Ok(envelope.ok)
    }
}
