//! # Asset Ledger Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks (encoder, full scan)
//! └── src/integration/  # Cross-crate scenarios and properties
//!     ├── scenarios.rs
//!     ├── properties.rs
//!     └── persistence.rs   # RocksDB, behind the `rocksdb` feature
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ledger-tests
//! cargo test -p ledger-tests --features rocksdb
//! cargo bench -p ledger-tests
//! ```

pub mod integration;
