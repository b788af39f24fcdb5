mod claim_bundle;
mod compiled_airdrop;

use airdrop::AirdropEntry;
use airdrop_csvs::{validate_dense_indices, EntryCsvRow};
use airdrop_merkle::ClaimTree;
use solana_pubkey::Pubkey;
use tracing::info;

use crate::{AddressFinder, DistributorParams, SdkError, SdkResult};

pub use claim_bundle::ClaimBundle;
pub use compiled_airdrop::CompiledAirdrop;

/// Deployment choices that are not part of the entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirdropSettings {
    pub administrator: Pubkey,
    /// The token being distributed.
    pub mint: Pubkey,
    /// Unix timestamp (seconds) from which claims are accepted.
    pub window_start: i64,
}

pub fn compile_airdrop(
    address_finder: &AddressFinder,
    settings: AirdropSettings,
    entry_rows: &[EntryCsvRow],
) -> SdkResult<CompiledAirdrop> {
    if entry_rows.is_empty() {
        return Err(SdkError::EmptyEntryTable);
    }
    validate_dense_indices(entry_rows)?; // fail fast if the table has gaps

    let indexed: Vec<(u64, AirdropEntry)> = entry_rows
        .iter()
        .map(|row| (row.index, AirdropEntry::new(row.recipient, row.amount)))
        .collect();
    let tree = ClaimTree::from_indexed(indexed)?;

    let params = DistributorParams {
        merkle_root: tree.root(),
        claim_agent_template: address_finder.claim_agent_template,
        window_start: settings.window_start,
        administrator: settings.administrator,
        mint: settings.mint,
    };
    params.validate()?;

    let compiled = CompiledAirdrop::new(*address_finder, params, tree)?;
    info!(
        "Compiled airdrop: {} entries, total {}, root {}",
        compiled.len(),
        compiled.total_amount,
        hex::encode(compiled.merkle_root())
    );
    Ok(compiled)
}
