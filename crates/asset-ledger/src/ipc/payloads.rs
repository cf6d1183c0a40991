//! # IPC Payloads
//!
//! Request and response shapes exchanged with the host. Both are plain serde
//! structs so the runtime can read them as JSON lines.

use serde::{Deserialize, Serialize};

/// A single contract call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInvocation {
    /// Function name, e.g. `CreateAsset`.
    pub function: String,
    /// Positional arguments, always strings.
    #[serde(default)]
    pub args: Vec<String>,
}

impl ContractInvocation {
    pub fn new<I, A>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvocationStatus {
    Success,
    Failure,
}

/// Outcome of one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub tx_id: String,
    pub status: InvocationStatus,
    /// Present on success. Empty for operations with no result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Human readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Failure classification, e.g. `NotFound` or `UnknownFunction`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl InvocationResponse {
    pub fn success(tx_id: impl Into<String>, payload: String) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: InvocationStatus::Success,
            payload: Some(payload),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(tx_id: impl Into<String>, error: String, error_kind: &str) -> Self {
        Self {
            tx_id: tx_id.into(),
            status: InvocationStatus::Failure,
            payload: None,
            error: Some(error),
            error_kind: Some(error_kind.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == InvocationStatus::Success
    }
}
