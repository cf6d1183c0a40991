//! # Asset Ledger Benchmarks
//!
//! | Path | Expectation |
//! |------|-------------|
//! | Canonical encode of one asset | well under 10us |
//! | CreateAsset on the in-memory store | well under 50us |
//! | GetAllAssets / ReadAssetByOwner | linear in world-state size |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use asset_ledger::{encode, Asset, AssetLedgerApi, AssetLedgerContract, InMemoryWorldState, TransactionContext};
use chrono::Utc;

fn seeded_contract(size: usize) -> AssetLedgerContract<InMemoryWorldState> {
    let ctx = TransactionContext::new("tx-seed", Utc::now());
    let mut contract = AssetLedgerContract::new(InMemoryWorldState::new());
    for i in 0..size {
        let owner = format!("owner{}@x.com", i % 10);
        contract
            .create_asset(&ctx, &format!("A{i:06}"), "BMW", "Sport", &owner, "h")
            .expect("seed create");
    }
    contract
}

fn bench_canonical_encode(c: &mut Criterion) {
    let asset = Asset::new("51H-102.33", "Maybach", "Sport", "hung@gmail.com", "https://example.com/car.png");

    c.bench_function("canonical_encode_asset", |b| {
        b.iter(|| encode(black_box(&asset)).expect("encode"))
    });
}

fn bench_create(c: &mut Criterion) {
    let ctx = TransactionContext::new("tx-bench", Utc::now());

    c.bench_function("create_asset_in_memory", |b| {
        b.iter_batched(
            || AssetLedgerContract::new(InMemoryWorldState::new()),
            |mut contract| {
                contract
                    .create_asset(&ctx, "A1", "BMW", "Sport", "a@x.com", "h1")
                    .expect("create");
                contract
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full-scan");
    group.measurement_time(Duration::from_secs(5));
    let ctx = TransactionContext::new("tx-scan", Utc::now());

    for size in [100usize, 1_000, 10_000] {
        let contract = seeded_contract(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("list_all_assets", size), &contract, |b, contract| {
            b.iter(|| contract.list_all_assets(&ctx).expect("list"))
        });
        group.bench_with_input(BenchmarkId::new("read_asset_by_owner", size), &contract, |b, contract| {
            b.iter(|| contract.read_asset_by_owner(&ctx, black_box("owner3@x.com")).expect("query"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_canonical_encode, bench_create, bench_full_scan);
criterion_main!(benches);
