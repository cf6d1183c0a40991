//! # AssetLedgerApi Implementation

use serde_json::Value;
use tracing::{debug, info, warn};

use super::AssetLedgerContract;
use crate::domain::codec::decode;
use crate::domain::entities::{Asset, AuditMethod, AuditRecord, ListedAsset, TransactionContext};
use crate::domain::errors::LedgerError;
use crate::ports::inbound::AssetLedgerApi;
use crate::ports::outbound::WorldStateStore;

impl<S: WorldStateStore> AssetLedgerApi for AssetLedgerContract<S> {
    fn init_ledger(&mut self, ctx: &TransactionContext, assets: &[Asset]) -> Result<usize, LedgerError> {
        for asset in assets {
            self.write_asset(asset)?;
        }

        info!(tx_id = %ctx.tx_id, written = assets.len(), "Ledger initialized");
        Ok(assets.len())
    }

    fn create_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        car_company: &str,
        asset_type: &str,
        owner: &str,
        image: &str,
    ) -> Result<AuditRecord, LedgerError> {
        if self.asset_exists(ctx, id)? {
            return Err(LedgerError::AlreadyExists { id: id.to_string() });
        }

        let asset = Asset::new(id, car_company, asset_type, owner, image);
        self.write_asset(&asset)?;

        let record = AuditRecord::new(asset, ctx, AuditMethod::Create);
        let audit_len = self.audit_log.append(record.clone());

        info!(tx_id = %ctx.tx_id, asset_id = id, owner, audit_len, "Asset created");
        Ok(record)
    }

    fn update_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        car_company: &str,
        asset_type: &str,
        owner: &str,
        image: &str,
    ) -> Result<AuditRecord, LedgerError> {
        if !self.asset_exists(ctx, id)? {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }

        let asset = Asset::new(id, car_company, asset_type, owner, image);
        self.write_asset(&asset)?;

        let record = AuditRecord::new(asset, ctx, AuditMethod::Update);
        let audit_len = self.audit_log.append(record.clone());

        info!(tx_id = %ctx.tx_id, asset_id = id, owner, audit_len, "Asset updated");
        Ok(record)
    }

    fn delete_asset(&mut self, ctx: &TransactionContext, id: &str) -> Result<(), LedgerError> {
        if !self.asset_exists(ctx, id)? {
            return Err(LedgerError::NotFound { id: id.to_string() });
        }

        self.store.delete_state(id)?;

        info!(tx_id = %ctx.tx_id, asset_id = id, "Asset deleted");
        Ok(())
    }

    fn transfer_asset(
        &mut self,
        ctx: &TransactionContext,
        id: &str,
        new_owner: &str,
    ) -> Result<String, LedgerError> {
        let mut asset = self.read_asset(ctx, id)?;
        let previous_owner = std::mem::replace(&mut asset.owner, new_owner.to_string());
        self.write_asset(&asset)?;

        // No audit entry for transfers.
        info!(
            tx_id = %ctx.tx_id,
            asset_id = id,
            from = %previous_owner,
            to = new_owner,
            "Asset transferred"
        );
        Ok(previous_owner)
    }

    fn read_asset(&self, ctx: &TransactionContext, id: &str) -> Result<Asset, LedgerError> {
        let bytes = self.read_asset_raw(ctx, id)?;
        decode(&bytes).map_err(|source| LedgerError::decode(id, source))
    }

    fn read_asset_raw(&self, ctx: &TransactionContext, id: &str) -> Result<Vec<u8>, LedgerError> {
        debug!(tx_id = %ctx.tx_id, asset_id = id, "Reading asset");
        self.load(id)?
            .ok_or_else(|| LedgerError::NotFound { id: id.to_string() })
    }

    fn read_asset_by_owner(&self, ctx: &TransactionContext, owner: &str) -> Result<Vec<Asset>, LedgerError> {
        let matching: Vec<Asset> = self
            .list_all_assets(ctx)?
            .into_iter()
            .filter_map(|entry| match entry {
                ListedAsset::Decoded(asset) if asset.owner == owner => Some(asset),
                _ => None,
            })
            .collect();

        debug!(tx_id = %ctx.tx_id, owner, matches = matching.len(), "Owner query");
        Ok(matching)
    }

    fn asset_exists(&self, _ctx: &TransactionContext, id: &str) -> Result<bool, LedgerError> {
        Ok(self.load(id)?.is_some())
    }

    fn list_all_assets(&self, ctx: &TransactionContext) -> Result<Vec<ListedAsset>, LedgerError> {
        let entries = self.store.get_state_by_range("", "")?;

        let listing: Vec<ListedAsset> = entries
            .into_iter()
            .map(|(key, bytes)| match decode::<Asset>(&bytes) {
                Ok(asset) => ListedAsset::Decoded(asset),
                Err(err) => {
                    warn!(tx_id = %ctx.tx_id, key = %key, error = %err, "Returning undecodable record raw");
                    ListedAsset::Raw(String::from_utf8_lossy(&bytes).into_owned())
                }
            })
            .collect();

        debug!(tx_id = %ctx.tx_id, count = listing.len(), "Listed world state");
        Ok(listing)
    }

    fn get_audit_log(&self) -> Vec<AuditRecord> {
        self.audit_log.snapshot()
    }

    fn get_asset_history(&self, id: &str) -> Vec<AuditRecord> {
        self.audit_log.entries_for(id)
    }

    fn get_transaction_details(&self, tx_id: &str) -> Result<Value, LedgerError> {
        let not_found = || LedgerError::TransactionNotFound {
            tx_id: tx_id.to_string(),
        };

        let lookup = self.transactions.as_ref().ok_or_else(not_found)?;
        let bytes = lookup.get_transaction(tx_id)?.ok_or_else(not_found)?;

        decode(&bytes).map_err(|source| LedgerError::decode(tx_id, source))
    }
}
