//! RPC error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node rejected request: {0}")]
    Node(String),

    #[error("no result in response")]
    NoResult,

    #[error("malformed response field: {0}")]
    BadField(String),

    #[error(transparent)]
    Crypto(#[from] upow_crypto::CryptoError),
}
