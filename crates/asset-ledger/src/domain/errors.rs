//! # Domain Errors
//!
//! Every contract operation returns `Result<_, LedgerError>`. Errors are raised
//! before any state is written, so a failed operation never leaves a partial
//! mutation behind.

use serde::Serialize;
use thiserror::Error;

/// Failure of the underlying world-state adapter. Propagated unchanged, never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("World state I/O error: {message}")]
    Io { message: String },

    #[error("World state unavailable: {0}")]
    Unavailable(String),
}

/// Stored bytes did not parse as the expected record shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed record: {message}")]
pub struct DecodeError {
    pub message: String,
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("The asset {id} already exists")]
    AlreadyExists { id: String },

    #[error("The asset {id} does not exist")]
    NotFound { id: String },

    #[error("Failed to decode record {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },

    #[error("Failed to encode record: {message}")]
    Encode { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Transaction {tx_id} not found")]
    TransactionNotFound { tx_id: String },
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LedgerError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            LedgerError::NotFound { .. } => ErrorKind::NotFound,
            LedgerError::Decode { .. } => ErrorKind::DecodeError,
            LedgerError::Encode { .. } => ErrorKind::EncodeError,
            LedgerError::Store(_) => ErrorKind::StoreError,
            LedgerError::TransactionNotFound { .. } => ErrorKind::TransactionNotFound,
        }
    }

    pub(crate) fn decode(key: &str, source: DecodeError) -> Self {
        LedgerError::Decode {
            key: key.to_string(),
            source,
        }
    }
}

/// Error taxonomy tag surfaced to callers and metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    DecodeError,
    EncodeError,
    StoreError,
    TransactionNotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::AlreadyExists => "AlreadyExists",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::DecodeError => "DecodeError",
            ErrorKind::EncodeError => "EncodeError",
            ErrorKind::StoreError => "StoreError",
            ErrorKind::TransactionNotFound => "TransactionNotFound",
        }
    }
}
