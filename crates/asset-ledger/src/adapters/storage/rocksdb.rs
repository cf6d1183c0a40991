//! # RocksDB World State
//!
//! Durable `WorldStateStore` backed by RocksDB.
//!
//! - Snappy compression
//! - Bloom filters for point reads (`get_state` / existence checks)
//! - Optional fsync on every write
//!
//! RocksDB's default bytewise comparator gives the lexical key order the
//! contract needs for `get_state_by_range`.

use crate::domain::errors::StoreError;
use crate::ports::outbound::{StateEntry, WorldStateStore};
use rocksdb::{Direction, IteratorMode, Options, WriteOptions, DB};

/// RocksDB configuration.
#[derive(Debug, Clone)]
pub struct RocksDbConfig {
    /// Path to the database directory
    pub path: String,
    /// Block cache size in bytes (default: 64MB)
    pub block_cache_size: usize,
    /// Write buffer size in bytes (default: 16MB)
    pub write_buffer_size: usize,
    /// Enable fsync after each write (default: true for durability)
    pub sync_writes: bool,
}

impl Default for RocksDbConfig {
    fn default() -> Self {
        Self {
            path: "./data/world-state".to_string(),
            block_cache_size: 64 * 1024 * 1024,
            write_buffer_size: 16 * 1024 * 1024,
            sync_writes: true,
        }
    }
}

impl RocksDbConfig {
    /// Smaller buffers, no sync
    pub fn for_testing(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            block_cache_size: 8 * 1024 * 1024,
            write_buffer_size: 4 * 1024 * 1024,
            sync_writes: false,
        }
    }
}

pub struct RocksDbWorldState {
    db: DB,
    config: RocksDbConfig,
}

impl RocksDbWorldState {
    /// Open or create the database at `config.path`.
    pub fn open(config: RocksDbConfig) -> Result<Self, StoreError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_write_buffer_size(config.write_buffer_size);
        opts.set_compression_type(rocksdb::DBCompressionType::Snappy);

        let mut block_opts = rocksdb::BlockBasedOptions::default();
        block_opts.set_bloom_filter(10.0, false);
        block_opts.set_block_cache(&rocksdb::Cache::new_lru_cache(config.block_cache_size));
        opts.set_block_based_table_factory(&block_opts);

        let db = DB::open(&opts, &config.path).map_err(|e| StoreError::Io {
            message: format!("Failed to open RocksDB at {}: {}", config.path, e),
        })?;

        tracing::info!(path = %config.path, "World state opened");

        Ok(Self { db, config })
    }

    pub fn config(&self) -> &RocksDbConfig {
        &self.config
    }

    fn write_options(&self) -> WriteOptions {
        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(self.config.sync_writes);
        write_opts
    }
}

impl WorldStateStore for RocksDbWorldState {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.db.get(key.as_bytes()).map_err(|e| StoreError::Io {
            message: format!("RocksDB get failed: {}", e),
        })
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.db
            .put_opt(key.as_bytes(), value, &self.write_options())
            .map_err(|e| StoreError::Io {
                message: format!("RocksDB put failed: {}", e),
            })
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.db
            .delete_opt(key.as_bytes(), &self.write_options())
            .map_err(|e| StoreError::Io {
                message: format!("RocksDB delete failed: {}", e),
            })
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Vec<StateEntry>, StoreError> {
        let mode = if start_key.is_empty() {
            IteratorMode::Start
        } else {
            IteratorMode::From(start_key.as_bytes(), Direction::Forward)
        };

        let mut results = Vec::new();
        for item in self.db.iterator(mode) {
            let (key, value) = item.map_err(|e| StoreError::Io {
                message: format!("RocksDB scan failed: {}", e),
            })?;

            if !end_key.is_empty() && &key[..] >= end_key.as_bytes() {
                break;
            }

            let key = String::from_utf8(key.to_vec()).map_err(|e| StoreError::Io {
                message: format!("Non UTF-8 key in world state: {}", e),
            })?;
            results.push((key, value.to_vec()));
        }

        Ok(results)
    }
}
