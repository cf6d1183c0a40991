//! # Ledger Runtime
//!
//! One execution context: world state, audit log, transaction journal, clock.
//!
//! ## Execution Order
//!
//! For every invocation:
//!
//! 1. Mint a transaction id (uuid v4 unless supplied)
//! 2. Stamp a `TransactionContext` from the time source
//! 3. Journal the invocation under its transaction id
//! 4. Dispatch to the contract
//! 5. Record metrics
//!
//! The audit log lives as long as the runtime. A restart starts it empty even
//! when the world state is durable.

use std::sync::Arc;

use asset_ledger::ipc::ContractFunction;
use asset_ledger::{
    canonical_bytes, AssetLedgerContract, AuditLog, ContractInvocation, InMemoryTransactionJournal,
    InMemoryWorldState, InvocationResponse, LedgerDispatcher, StoreError, SystemTimeSource, TimeSource,
    TransactionContext, WorldStateStore,
};
#[cfg(feature = "rocksdb")]
use asset_ledger::{RocksDbConfig, RocksDbWorldState};
use ledger_telemetry::{record_operation, time_operation, ASSETS_LISTED, AUDIT_LOG_ENTRIES};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{ConfigError, RuntimeConfig, StoreBackend};

/// Runtime construction errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open world state: {0}")]
    Store(#[from] StoreError),
}

/// Error kind reported for input lines that are not a valid invocation.
pub const MALFORMED_INVOCATION: &str = "MalformedInvocation";

pub type DynWorldState = Box<dyn WorldStateStore>;

pub struct LedgerRuntime {
    contract: AssetLedgerContract<DynWorldState>,
    journal: Arc<InMemoryTransactionJournal>,
    clock: Box<dyn TimeSource>,
    channel: String,
    executed: u64,
}

impl LedgerRuntime {
    pub fn new(store: DynWorldState, clock: Box<dyn TimeSource>, channel: impl Into<String>) -> Self {
        let journal = Arc::new(InMemoryTransactionJournal::new());
        let contract = AssetLedgerContract::new(store).with_transaction_lookup(journal.clone());

        Self {
            contract,
            journal,
            clock,
            channel: channel.into(),
            executed: 0,
        }
    }

    /// Empty in-memory world state on the wall clock.
    pub fn in_memory(channel: impl Into<String>) -> Self {
        Self::new(Box::new(InMemoryWorldState::new()), Box::new(SystemTimeSource), channel)
    }

    /// Open the configured backend.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self, RuntimeError> {
        config.validate()?;
        let store = open_store(config)?;

        info!(
            channel = %config.channel,
            store = %config.store,
            "Execution context ready"
        );
        Ok(Self::new(store, Box::new(SystemTimeSource), config.channel.clone()))
    }

    /// Execute under a freshly minted transaction id.
    pub fn execute(&mut self, invocation: &ContractInvocation) -> InvocationResponse {
        let tx_id = Uuid::new_v4().to_string();
        self.execute_as(&tx_id, invocation)
    }

    /// Execute under a caller-chosen transaction id.
    pub fn execute_as(&mut self, tx_id: &str, invocation: &ContractInvocation) -> InvocationResponse {
        let ctx = TransactionContext::from_source(tx_id, &*self.clock);
        self.journal_invocation(&ctx, invocation);

        let operation = metric_label(&invocation.function);
        let response = {
            let _timer = time_operation!(operation);
            LedgerDispatcher::invoke(&mut self.contract, &ctx, invocation)
        };

        self.executed += 1;
        self.record_metrics(operation, &response);

        debug!(
            tx_id = %ctx.tx_id,
            function = %invocation.function,
            success = response.is_success(),
            "Transaction executed"
        );
        response
    }

    /// Parse one JSON line and execute it. Malformed lines still get a
    /// transaction id and a failure response.
    pub fn execute_line(&mut self, line: &str) -> InvocationResponse {
        match serde_json::from_str::<ContractInvocation>(line) {
            Ok(invocation) => self.execute(&invocation),
            Err(e) => {
                let tx_id = Uuid::new_v4().to_string();
                record_operation("unknown", MALFORMED_INVOCATION);
                InvocationResponse::failure(tx_id, format!("Malformed invocation: {}", e), MALFORMED_INVOCATION)
            }
        }
    }

    /// Seed the world state.
    pub fn init_ledger(&mut self) -> InvocationResponse {
        self.execute(&ContractInvocation::new("InitLedger", Vec::<String>::new()))
    }

    pub fn contract(&self) -> &AssetLedgerContract<DynWorldState> {
        &self.contract
    }

    pub fn audit_log(&self) -> &Arc<AuditLog> {
        self.contract.audit_log()
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Number of invocations executed so far.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    fn journal_invocation(&self, ctx: &TransactionContext, invocation: &ContractInvocation) {
        let details = json!({
            "txId": ctx.tx_id,
            "channel": self.channel,
            "function": invocation.function,
            "args": invocation.args,
            "timestamp": ctx.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        });
        self.journal.record(ctx.tx_id.clone(), canonical_bytes(&details));
    }

    fn record_metrics(&self, operation: &str, response: &InvocationResponse) {
        let outcome = response.error_kind.as_deref().unwrap_or("success");
        record_operation(operation, outcome);
        AUDIT_LOG_ENTRIES.set(self.audit_log().len() as f64);

        if operation == ContractFunction::GetAllAssets.name() {
            if let Some(count) = response
                .payload
                .as_deref()
                .and_then(|p| serde_json::from_str::<Vec<serde_json::Value>>(p).ok())
                .map(|entries| entries.len())
            {
                ASSETS_LISTED.set(count as f64);
            }
        }
    }
}

/// Canonical function name, or `unknown`, to keep label cardinality bounded.
fn metric_label(function: &str) -> &'static str {
    function
        .parse::<ContractFunction>()
        .map(|f| f.name())
        .unwrap_or("unknown")
}

fn open_store(config: &RuntimeConfig) -> Result<DynWorldState, RuntimeError> {
    match config.store {
        StoreBackend::Memory => Ok(Box::new(InMemoryWorldState::new())),
        #[cfg(feature = "rocksdb")]
        StoreBackend::RocksDb => {
            let rocks_config = RocksDbConfig {
                path: config.data_dir.to_string_lossy().into_owned(),
                ..RocksDbConfig::default()
            };
            Ok(Box::new(RocksDbWorldState::open(rocks_config)?))
        }
        #[cfg(not(feature = "rocksdb"))]
        StoreBackend::RocksDb => Err(ConfigError::RocksDbUnavailable.into()),
    }
}
