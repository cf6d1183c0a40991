//! # Inbound Port (Driving API)
//!
//! The operations callers invoke on the asset ledger. Implemented by
//! `AssetLedgerContract`.

use serde_json::Value;

use crate::domain::entities::{Asset, AuditRecord, ListedAsset, TransactionContext};
use crate::domain::errors::LedgerError;

/// Asset ledger operations.
///
/// The host runs at most one mutating operation at a time per world state,
/// hence `&mut self` on writes and no locking inside the contract.
pub trait AssetLedgerApi {
    // === Mutations ===

    /// Write `assets` in order without existence checks or audit entries.
    /// Returns how many records were written.
    fn init_ledger(&mut self, ctx: &TransactionContext, assets: &[Asset]) -> Result<usize, LedgerError>;

    /// Fails with `AlreadyExists` if `id` is present. Appends one `Create` audit entry.
    fn create_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        car_company: &str,
        asset_type: &str,
        owner: &str,
        image: &str,
    ) -> Result<AuditRecord, LedgerError>;

    /// Overwrites every field but `id`. Fails with `NotFound` if absent.
    /// Appends one `Update` audit entry.
    fn update_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        car_company: &str,
        asset_type: &str,
        owner: &str,
        image: &str,
    ) -> Result<AuditRecord, LedgerError>;

    /// Fails with `NotFound` if absent. Not audited.
    fn delete_asset(&mut self, ctx: &TransactionContext, id: &str) -> Result<(), LedgerError>;

    /// Replaces `Owner` and returns the previous owner. Not audited.
    fn transfer_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<String, LedgerError>;

    // === Reads ===

    fn read_asset(&self, ctx: &TransactionContext, id: &str) -> Result<Asset, LedgerError>;

    /// The stored bytes, unchanged.
    fn read_asset_raw(&self, ctx: &TransactionContext, id: &str) -> Result<Vec<u8>, LedgerError>;

    /// Full-listing filter on `Owner`; O(n) in the number of stored assets.
    fn read_asset_by_owner(&self, ctx: &TransactionContext, owner: &str) -> Result<Vec<Asset>, LedgerError>;

    /// An empty stored value counts as absent.
    fn asset_exists(&self, ctx: &TransactionContext, id: &str) -> Result<bool, LedgerError>;

    /// Every stored record in key order; undecodable values come back raw.
    fn list_all_assets(&self, ctx: &TransactionContext) -> Result<Vec<ListedAsset>, LedgerError>;

    // === Audit & history ===

    fn get_audit_log(&self) -> Vec<AuditRecord>;

    fn get_asset_history(&self, id: &str) -> Vec<AuditRecord>;

    fn get_transaction_details(&self, tx_id: &str) -> Result<Value, LedgerError>;
}
