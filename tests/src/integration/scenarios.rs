//! # End-to-End Scenarios
//!
//! Drive the ledger through the runtime's JSON-lines entry point, the same
//! path the binary uses.

#[cfg(test)]
mod tests {
    use asset_ledger::{FixedTimeSource, InMemoryWorldState, InvocationResponse, InvocationStatus};
    use chrono::{TimeZone, Utc};
    use ledger_runtime::LedgerRuntime;
    use serde_json::Value;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    fn runtime() -> LedgerRuntime {
        let clock = FixedTimeSource::new(Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap());
        LedgerRuntime::new(Box::new(InMemoryWorldState::new()), Box::new(clock), "mychannel")
    }

    fn run(runtime: &mut LedgerRuntime, line: &str) -> InvocationResponse {
        runtime.execute_line(line)
    }

    fn payload_json(response: &InvocationResponse) -> Value {
        serde_json::from_str(response.payload.as_deref().unwrap_or("null")).unwrap()
    }

    // =========================================================================
    // SCENARIOS
    // =========================================================================

    #[test]
    fn create_list_transfer_read() {
        let mut rt = runtime();

        let created = run(
            &mut rt,
            r#"{"function":"CreateAsset","args":["A1","BMW","Sport","a@x.com","h1"]}"#,
        );
        assert!(created.is_success());
        let record = payload_json(&created);
        assert_eq!(record["Method"], "Create");
        assert_eq!(record["Date"], "2024-02-29T23:59:59.000Z");
        assert_eq!(record["txId"], Value::String(created.tx_id.clone()));

        let listing = payload_json(&run(&mut rt, r#"{"function":"GetAllAssets"}"#));
        assert_eq!(listing.as_array().map(Vec::len), Some(1));

        let transfer = run(&mut rt, r#"{"function":"TransferAsset","args":["A1","b@x.com"]}"#);
        assert_eq!(transfer.payload.as_deref(), Some("a@x.com"));

        let read = payload_json(&run(&mut rt, r#"{"function":"ReadAsset","args":["A1"]}"#));
        assert_eq!(read["Owner"], "b@x.com");

        let audit = payload_json(&run(&mut rt, r#"{"function":"GetAuditLog"}"#));
        assert_eq!(audit.as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn failures_are_classified() {
        let mut rt = runtime();

        let missing = run(&mut rt, r#"{"function":"DeleteAsset","args":["missing"]}"#);
        assert_eq!(missing.status, InvocationStatus::Failure);
        assert_eq!(missing.error_kind.as_deref(), Some("NotFound"));

        let line = r#"{"function":"CreateAsset","args":["A1","BMW","Sport","a@x.com","h1"]}"#;
        assert!(run(&mut rt, line).is_success());
        let duplicate = run(&mut rt, line);
        assert_eq!(duplicate.error_kind.as_deref(), Some("AlreadyExists"));
        assert_eq!(duplicate.error.as_deref(), Some("The asset A1 already exists"));

        let update_missing = run(
            &mut rt,
            r#"{"function":"UpdateAsset","args":["Z9","BMW","Sport","a@x.com","h1"]}"#,
        );
        assert_eq!(update_missing.error_kind.as_deref(), Some("NotFound"));

        let unknown_tx = run(&mut rt, r#"{"function":"GetTransactionDetails","args":["nope"]}"#);
        assert_eq!(unknown_tx.error_kind.as_deref(), Some("TransactionNotFound"));
    }

    #[test]
    fn update_then_history() {
        let mut rt = runtime();
        run(&mut rt, r#"{"function":"CreateAsset","args":["A1","BMW","Sport","a@x.com","h1"]}"#);
        run(&mut rt, r#"{"function":"CreateAsset","args":["A2","BMW","Sport","a@x.com","h1"]}"#);

        let updated = run(
            &mut rt,
            r#"{"function":"UpdateAsset","args":["A1","Audi","Sedan","c@x.com","h2"]}"#,
        );
        assert_eq!(payload_json(&updated)["Method"], "Update");

        let history = payload_json(&run(&mut rt, r#"{"function":"GetAssetHistory","args":["A1"]}"#));
        let methods: Vec<_> = history
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["Method"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(methods, vec!["Create", "Update"]);
    }

    #[test]
    fn owner_query_after_seed() {
        let mut rt = runtime();
        assert!(rt.init_ledger().is_success());

        let owned = payload_json(&run(
            &mut rt,
            r#"{"function":"ReadAssetByOwner","args":["hung@gmail.com"]}"#,
        ));
        assert_eq!(owned.as_array().map(Vec::len), Some(1));
        assert_eq!(owned[0]["carCompany"], "Maybach");

        let nobody = payload_json(&run(
            &mut rt,
            r#"{"function":"ReadAssetByOwner","args":["abc@gmail.com"]}"#,
        ));
        assert_eq!(nobody, Value::Array(Vec::new()));
    }

    #[test]
    fn malformed_input_does_not_stop_the_context() {
        let mut rt = runtime();

        assert_eq!(
            run(&mut rt, "CreateAsset A1").error_kind.as_deref(),
            Some("MalformedInvocation")
        );
        assert_eq!(
            run(&mut rt, r#"{"function":"AssetExists"}"#).error_kind.as_deref(),
            Some("ArgumentCount")
        );
        assert!(run(&mut rt, r#"{"function":"ListAllAssets"}"#).is_success());
    }
}
