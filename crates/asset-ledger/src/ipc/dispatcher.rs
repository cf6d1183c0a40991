//! # Invocation Dispatcher
//!
//! Maps a `ContractInvocation` onto `AssetLedgerApi`. Function names and
//! argument arity are validated before the contract sees the call, so a
//! malformed invocation never touches the world state.
//!
//! ## Payloads
//!
//! | Function | Payload on success |
//! |----------|--------------------|
//! | `CreateAsset`, `UpdateAsset` | canonical JSON of the audit record |
//! | `ReadAsset` | stored bytes as-is |
//! | `ReadAssetByOwner`, `GetAllAssets` | canonical JSON array |
//! | `AssetExists` | `true` / `false` |
//! | `TransferAsset` | previous owner |
//! | `DeleteAsset`, `InitLedger` | empty |

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::payloads::{ContractInvocation, InvocationResponse};
use crate::domain::codec::encode;
use crate::domain::entities::{default_seed_assets, TransactionContext};
use crate::domain::errors::LedgerError;
use crate::ports::inbound::AssetLedgerApi;

/// Every function the contract exposes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractFunction {
    InitLedger,
    CreateAsset,
    ReadAsset,
    ReadAssetByOwner,
    UpdateAsset,
    DeleteAsset,
    AssetExists,
    TransferAsset,
    GetAllAssets,
    GetAuditLog,
    GetAssetHistory,
    GetTransactionDetails,
}

impl ContractFunction {
    /// Number of positional string arguments.
    pub fn arity(&self) -> usize {
        match self {
            ContractFunction::InitLedger
            | ContractFunction::GetAllAssets
            | ContractFunction::GetAuditLog => 0,
            ContractFunction::ReadAsset
            | ContractFunction::ReadAssetByOwner
            | ContractFunction::DeleteAsset
            | ContractFunction::AssetExists
            | ContractFunction::GetAssetHistory
            | ContractFunction::GetTransactionDetails => 1,
            ContractFunction::TransferAsset => 2,
            ContractFunction::CreateAsset | ContractFunction::UpdateAsset => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ContractFunction::InitLedger => "InitLedger",
            ContractFunction::CreateAsset => "CreateAsset",
            ContractFunction::ReadAsset => "ReadAsset",
            ContractFunction::ReadAssetByOwner => "ReadAssetByOwner",
            ContractFunction::UpdateAsset => "UpdateAsset",
            ContractFunction::DeleteAsset => "DeleteAsset",
            ContractFunction::AssetExists => "AssetExists",
            ContractFunction::TransferAsset => "TransferAsset",
            ContractFunction::GetAllAssets => "GetAllAssets",
            ContractFunction::GetAuditLog => "GetAuditLog",
            ContractFunction::GetAssetHistory => "GetAssetHistory",
            ContractFunction::GetTransactionDetails => "GetTransactionDetails",
        }
    }

    /// Whether the function writes to the world state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ContractFunction::InitLedger
                | ContractFunction::CreateAsset
                | ContractFunction::UpdateAsset
                | ContractFunction::DeleteAsset
                | ContractFunction::TransferAsset
        )
    }
}

impl fmt::Display for ContractFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractFunction {
    type Err = InvokeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let function = match s {
            "InitLedger" => ContractFunction::InitLedger,
            "CreateAsset" => ContractFunction::CreateAsset,
            "ReadAsset" => ContractFunction::ReadAsset,
            "ReadAssetByOwner" => ContractFunction::ReadAssetByOwner,
            "UpdateAsset" => ContractFunction::UpdateAsset,
            "DeleteAsset" => ContractFunction::DeleteAsset,
            "AssetExists" => ContractFunction::AssetExists,
            "TransferAsset" => ContractFunction::TransferAsset,
            "GetAllAssets" | "ListAllAssets" => ContractFunction::GetAllAssets,
            "GetAuditLog" | "GetLogs" => ContractFunction::GetAuditLog,
            "GetAssetHistory" => ContractFunction::GetAssetHistory,
            "GetTransactionDetails" => ContractFunction::GetTransactionDetails,
            other => {
                return Err(InvokeError::UnknownFunction {
                    name: other.to_string(),
                })
            }
        };
        Ok(function)
    }
}

/// Invocation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    #[error("Unknown function: {name}")]
    UnknownFunction { name: String },

    #[error("{function} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: ContractFunction,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Contract(#[from] LedgerError),
}

impl InvokeError {
    /// Classification string carried in `InvocationResponse::error_kind`.
    pub fn kind_str(&self) -> &'static str {
        match self {
            InvokeError::UnknownFunction { .. } => "UnknownFunction",
            InvokeError::ArgumentCount { .. } => "ArgumentCount",
            InvokeError::Contract(err) => err.kind().as_str(),
        }
    }
}

/// Stateless router from invocations to contract operations.
pub struct LedgerDispatcher;

impl LedgerDispatcher {
    /// Run one invocation and wrap the result for the host.
    pub fn invoke<A: AssetLedgerApi + ?Sized>(
        api: &mut A,
        ctx: &TransactionContext,
        invocation: &ContractInvocation,
    ) -> InvocationResponse {
        match Self::try_invoke(api, ctx, invocation) {
            Ok(payload) => InvocationResponse::success(ctx.tx_id.clone(), payload),
            Err(err) => {
                warn!(
                    tx_id = %ctx.tx_id,
                    function = %invocation.function,
                    kind = err.kind_str(),
                    error = %err,
                    "Invocation failed"
                );
                InvocationResponse::failure(ctx.tx_id.clone(), err.to_string(), err.kind_str())
            }
        }
    }

    /// Validate and run one invocation, returning the raw payload.
    pub fn try_invoke<A: AssetLedgerApi + ?Sized>(
        api: &mut A,
        ctx: &TransactionContext,
        invocation: &ContractInvocation,
    ) -> Result<String, InvokeError> {
        let function: ContractFunction = invocation.function.parse()?;
        let args = &invocation.args;

        if args.len() != function.arity() {
            return Err(InvokeError::ArgumentCount {
                function,
                expected: function.arity(),
                actual: args.len(),
            });
        }

        debug!(tx_id = %ctx.tx_id, function = %function, "Dispatching");

        let payload = match function {
            ContractFunction::InitLedger => {
                api.init_ledger(ctx, &default_seed_assets())?;
                String::new()
            }
            ContractFunction::CreateAsset => {
                let record = api.create_asset(ctx, &args[0], &args[1], &args[2], &args[3], &args[4])?;
                to_payload(&record)?
            }
            ContractFunction::UpdateAsset => {
                let record = api.update_asset(ctx, &args[0], &args[1], &args[2], &args[3], &args[4])?;
                to_payload(&record)?
            }
            ContractFunction::ReadAsset => {
                let bytes = api.read_asset_raw(ctx, &args[0])?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            ContractFunction::ReadAssetByOwner => to_payload(&api.read_asset_by_owner(ctx, &args[0])?)?,
            ContractFunction::DeleteAsset => {
                api.delete_asset(ctx, &args[0])?;
                String::new()
            }
            ContractFunction::AssetExists => api.asset_exists(ctx, &args[0])?.to_string(),
            ContractFunction::TransferAsset => api.transfer_asset(ctx, &args[0], &args[1])?,
            ContractFunction::GetAllAssets => to_payload(&api.list_all_assets(ctx)?)?,
            ContractFunction::GetAuditLog => to_payload(&api.get_audit_log())?,
            ContractFunction::GetAssetHistory => to_payload(&api.get_asset_history(&args[0]))?,
            ContractFunction::GetTransactionDetails => to_payload(&api.get_transaction_details(&args[0])?)?,
        };

        Ok(payload)
    }
}

fn to_payload<T: Serialize>(value: &T) -> Result<String, LedgerError> {
    String::from_utf8(encode(value)?).map_err(|e| LedgerError::Encode {
        message: e.to_string(),
    })
}
