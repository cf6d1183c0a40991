//! # Randomized Properties
//!
//! Seeded random operation sequences checked against a plain `BTreeMap`
//! model of the world state.

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use asset_ledger::{
        canonical_bytes, Asset, AssetLedgerApi, AssetLedgerContract, InMemoryWorldState, LedgerError,
        TransactionContext,
    };
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use serde_json::{Map, Value};

    const IDS: [&str; 6] = ["A1", "A2", "A3", "B1", "B2", "C"];
    const OWNERS: [&str; 3] = ["a@x.com", "b@x.com", "c@x.com"];

    fn ctx(n: usize) -> TransactionContext {
        TransactionContext::new(format!("tx-{n}"), Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn random_asset(rng: &mut StdRng, id: &str) -> Asset {
        Asset::new(
            id,
            ["BMW", "Audi", "Kia"][rng.gen_range(0..3)],
            ["Sport", "Sedan"][rng.gen_range(0..2)],
            *OWNERS.choose(rng).unwrap_or(&OWNERS[0]),
            format!("h{}", rng.gen_range(0..100)),
        )
    }

    #[test]
    fn contract_matches_model_under_random_operations() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut contract = AssetLedgerContract::new(InMemoryWorldState::new());
            let mut model: BTreeMap<String, Asset> = BTreeMap::new();
            let mut audited = 0usize;

            for step in 0..200 {
                let id = IDS[rng.gen_range(0..IDS.len())];
                let c = ctx(step);

                match rng.gen_range(0..4) {
                    0 => {
                        let a = random_asset(&mut rng, id);
                        let result = contract.create_asset(&c, id, &a.car_company, &a.asset_type, &a.owner, &a.image);
                        if model.contains_key(id) {
                            assert!(matches!(result, Err(LedgerError::AlreadyExists { .. })));
                        } else {
                            assert!(result.is_ok());
                            model.insert(id.to_string(), a);
                            audited += 1;
                        }
                    }
                    1 => {
                        let a = random_asset(&mut rng, id);
                        let result = contract.update_asset(&c, id, &a.car_company, &a.asset_type, &a.owner, &a.image);
                        if model.contains_key(id) {
                            assert!(result.is_ok());
                            model.insert(id.to_string(), a);
                            audited += 1;
                        } else {
                            assert!(matches!(result, Err(LedgerError::NotFound { .. })));
                        }
                    }
                    2 => {
                        let result = contract.delete_asset(&c, id);
                        assert_eq!(result.is_ok(), model.remove(id).is_some());
                    }
                    _ => {
                        let new_owner = OWNERS[rng.gen_range(0..OWNERS.len())];
                        let result = contract.transfer_asset(&c, id, new_owner);
                        match model.get_mut(id) {
                            Some(asset) => {
                                let previous = std::mem::replace(&mut asset.owner, new_owner.to_string());
                                assert_eq!(result, Ok(previous));
                            }
                            None => assert!(matches!(result, Err(LedgerError::NotFound { .. }))),
                        }
                    }
                }

                assert_eq!(contract.get_audit_log().len(), audited, "seed {seed} step {step}");
            }

            let listed: Vec<Asset> = contract
                .list_all_assets(&ctx(999))
                .unwrap()
                .into_iter()
                .filter_map(|entry| entry.as_asset().cloned())
                .collect();
            let expected: Vec<Asset> = model.values().cloned().collect();
            assert_eq!(listed, expected, "seed {seed}");

            for owner in OWNERS {
                let by_owner = contract.read_asset_by_owner(&ctx(1000), owner).unwrap();
                let subset: Vec<Asset> = expected.iter().filter(|a| a.owner == owner).cloned().collect();
                assert_eq!(by_owner, subset);
            }
        }
    }

    #[test]
    fn canonical_bytes_ignore_insertion_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let fields = [
            ("type", Value::from("Sport")),
            ("Owner", Value::from("a@x.com")),
            ("ID", Value::from("A1")),
            ("carCompany", Value::from("BMW")),
            ("Image", Value::from("h1")),
            ("nested", serde_json::json!({"z": 1, "a": [{"y": true, "b": null}]})),
        ];
        let reference = canonical_bytes(&Value::Object(fields.iter().cloned().map(|(k, v)| (k.to_string(), v)).collect()));

        for _ in 0..50 {
            let mut shuffled = fields.to_vec();
            shuffled.shuffle(&mut rng);
            let mut map = Map::new();
            for (key, value) in shuffled {
                map.insert(key.to_string(), value);
            }
            assert_eq!(canonical_bytes(&Value::Object(map)), reference);
        }

        assert_eq!(
            String::from_utf8(reference).unwrap(),
            r#"{"ID":"A1","Image":"h1","Owner":"a@x.com","carCompany":"BMW","nested":{"a":[{"b":null,"y":true}],"z":1},"type":"Sport"}"#
        );
    }

    #[test]
    fn reads_are_idempotent_across_random_state() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut contract = AssetLedgerContract::new(InMemoryWorldState::new());
        for (n, id) in IDS.iter().enumerate() {
            let a = random_asset(&mut rng, id);
            contract
                .create_asset(&ctx(n), id, &a.car_company, &a.asset_type, &a.owner, &a.image)
                .unwrap();
        }

        for id in IDS {
            let first = contract.read_asset_raw(&ctx(100), id).unwrap();
            let second = contract.read_asset_raw(&ctx(101), id).unwrap();
            assert_eq!(first, second);
        }
        let listing_a = contract.list_all_assets(&ctx(102)).unwrap();
        let listing_b = contract.list_all_assets(&ctx(103)).unwrap();
        assert_eq!(listing_a, listing_b);
    }
}
