//! # Domain Entities for the Asset Ledger
//!
//! ## On-Ledger Field Names
//!
//! The serialized names (`ID`, `carCompany`, `type`, `Owner`, `Image`) are the
//! wire format of records already on the ledger. They are not Rust-style and
//! must not be renamed: the canonical encoder sorts them by byte value, so the
//! stored object always reads `{"ID":..,"Image":..,"Owner":..,"carCompany":..,"type":..}`.
//!
//! Any other field on a stored record is kept in `Asset::extra` and written
//! back unchanged, so a transfer never drops data it did not touch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ports::outbound::TimeSource;

/// A tracked asset, stored under its `id` in the world state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Caller-assigned key. Never generated by the contract.
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "carCompany")]
    pub car_company: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Controlling principal (email-like). Caller-supplied, not authenticated.
    #[serde(rename = "Owner")]
    pub owner: String,
    /// Content address of the asset image. Not validated.
    #[serde(rename = "Image")]
    pub image: String,
    /// Fields of the stored record outside the five above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        car_company: impl Into<String>,
        asset_type: impl Into<String>,
        owner: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            car_company: car_company.into(),
            asset_type: asset_type.into(),
            owner: owner.into(),
            image: image.into(),
            extra: Map::new(),
        }
    }
}

/// Mutation kind recorded in the audit log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditMethod {
    Create,
    Update,
}

impl AuditMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditMethod::Create => "Create",
            AuditMethod::Update => "Update",
        }
    }
}

/// Snapshot of an asset at mutation time plus the triggering transaction.
///
/// This is also the result of `CreateAsset` and `UpdateAsset`. It is derived
/// data: it never reaches the world state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    #[serde(flatten)]
    pub asset: Asset,
    #[serde(rename = "txId")]
    pub tx_id: String,
    #[serde(rename = "Date", with = "millis_rfc3339")]
    pub date: DateTime<Utc>,
    #[serde(rename = "Method")]
    pub method: AuditMethod,
}

impl AuditRecord {
    pub fn new(asset: Asset, ctx: &TransactionContext, method: AuditMethod) -> Self {
        Self {
            asset,
            tx_id: ctx.tx_id.clone(),
            date: ctx.timestamp,
            method,
        }
    }
}

/// One entry of a world-state listing.
///
/// A stored value that does not decode as an [`Asset`] is surfaced as its raw
/// string instead of failing the whole listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListedAsset {
    Decoded(Asset),
    Raw(String),
}

impl ListedAsset {
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            ListedAsset::Decoded(asset) => Some(asset),
            ListedAsset::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, ListedAsset::Raw(_))
    }
}

/// Per-invocation execution context supplied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionContext {
    /// Opaque identifier of the triggering transaction.
    pub tx_id: String,
    /// Wall-clock time used for audit timestamps. Never written to the world state.
    pub timestamp: DateTime<Utc>,
}

impl TransactionContext {
    pub fn new(tx_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp,
        }
    }

    /// Build a context stamped by `source`.
    pub fn from_source<T: TimeSource + ?Sized>(tx_id: impl Into<String>, source: &T) -> Self {
        Self::new(tx_id, source.now())
    }
}

/// Seed list written by `InitLedger`.
///
/// Both entries share one ID; they are written in order, so the second wins.
pub fn default_seed_assets() -> Vec<Asset> {
    vec![
        Asset::new("51H-102.33", "BMW", "Sport car", "abc@gmail.com", "abc"),
        Asset::new("51H-102.33", "Maybach", "Sport car", "hung@gmail.com", "abc"),
    ]
}

/// `Date` is rendered like a JavaScript `Date` in JSON: RFC 3339, UTC, milliseconds.
mod millis_rfc3339 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
