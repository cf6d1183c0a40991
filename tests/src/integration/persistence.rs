//! # RocksDB Persistence
//!
//! World state survives a restart, the audit log does not.

#[cfg(all(test, feature = "rocksdb"))]
mod tests {
    use asset_ledger::{
        AssetLedgerApi, AssetLedgerContract, RocksDbConfig, RocksDbWorldState, TransactionContext,
    };
    use chrono::Utc;
    use ledger_runtime::{LedgerRuntime, RuntimeConfig, StoreBackend};
    use tempfile::TempDir;

    fn open(path: &str) -> AssetLedgerContract<RocksDbWorldState> {
        let store = RocksDbWorldState::open(RocksDbConfig::for_testing(path)).unwrap();
        AssetLedgerContract::new(store)
    }

    #[test]
    fn world_state_survives_restart_audit_log_does_not() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_string_lossy().to_string();
        let ctx = TransactionContext::new("tx-1", Utc::now());

        {
            let mut contract = open(&path);
            contract
                .create_asset(&ctx, "A1", "BMW", "Sport", "a@x.com", "h1")
                .unwrap();
            contract.transfer_asset(&ctx, "A1", "b@x.com").unwrap();
            assert_eq!(contract.get_audit_log().len(), 1);
        }

        let contract = open(&path);
        let asset = contract.read_asset(&ctx, "A1").unwrap();
        assert_eq!(asset.owner, "b@x.com");
        assert!(contract.get_audit_log().is_empty());
    }

    #[test]
    fn runtime_opens_configured_rocksdb() {
        let temp_dir = TempDir::new().unwrap();
        let config = RuntimeConfig {
            store: StoreBackend::RocksDb,
            data_dir: temp_dir.path().join("world-state"),
            ..RuntimeConfig::default()
        };

        {
            let mut runtime = LedgerRuntime::from_config(&config).unwrap();
            assert!(runtime.init_ledger().is_success());
        }

        let mut runtime = LedgerRuntime::from_config(&config).unwrap();
        let exists = runtime.execute_line(r#"{"function":"AssetExists","args":["51H-102.33"]}"#);
        assert_eq!(exists.payload.as_deref(), Some("true"));
    }
}
