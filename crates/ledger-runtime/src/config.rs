//! # Runtime Configuration
//!
//! Defaults, overridden by environment variables, overridden by CLI flags.
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEDGER_STORE` | `memory` | World-state backend (`memory` or `rocksdb`) |
//! | `LEDGER_DATA_DIR` | `./data/world-state` | RocksDB directory |
//! | `LEDGER_CHANNEL` | `mychannel` | Channel served by this context |
//! | `LEDGER_INIT_LEDGER` | `false` | Seed the ledger before the first invocation |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// World-state backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Memory,
    RocksDb,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "rocksdb" => Ok(StoreBackend::RocksDb),
            other => Err(ConfigError::UnknownStore {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Memory => f.write_str("memory"),
            StoreBackend::RocksDb => f.write_str("rocksdb"),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown store backend '{value}' (expected memory or rocksdb)")]
    UnknownStore { value: String },

    #[error("RocksDB store requested but ledger-runtime was built without the `rocksdb` feature")]
    RocksDbUnavailable,

    #[error("Invalid boolean for {var}: '{value}'")]
    InvalidFlag { var: &'static str, value: String },

    #[error("Channel name must not be empty")]
    EmptyChannel,
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub store: StoreBackend,
    pub data_dir: PathBuf,
    pub channel: String,
    /// Run `InitLedger` before reading invocations.
    pub init_ledger: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            data_dir: PathBuf::from("./data/world-state"),
            channel: "mychannel".to_string(),
            init_ledger: false,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `LEDGER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(store) = lookup("LEDGER_STORE") {
            config.store = store.parse()?;
        }
        if let Some(dir) = lookup("LEDGER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(channel) = lookup("LEDGER_CHANNEL") {
            config.channel = channel;
        }
        if let Some(flag) = lookup("LEDGER_INIT_LEDGER") {
            config.init_ledger = parse_bool("LEDGER_INIT_LEDGER", &flag)?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel.trim().is_empty() {
            return Err(ConfigError::EmptyChannel);
        }
        if self.store == StoreBackend::RocksDb && !cfg!(feature = "rocksdb") {
            return Err(ConfigError::RocksDbUnavailable);
        }
        Ok(())
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var,
            value: value.to_string(),
        }),
    }
}
