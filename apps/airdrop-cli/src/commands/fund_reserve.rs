use airdrop_sdk::{build_fund_reserve_ix, CompiledAirdrop};
use solana_sdk::signature::Signer;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::rpc;

/// Transfer tokens from the funder's associated token account into the reserve.
/// Defaults to the airdrop's total amount.
pub fn execute(
    compiled_path: PathBuf,
    funder_keypair_path: PathBuf,
    rpc_url: String,
    amount: Option<u64>,
) -> CliResult<()> {
    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let funder = rpc::load_keypair(&funder_keypair_path)?;
    let amount = amount.unwrap_or(compiled.total_amount);
    let finder = &compiled.address_finder;
    let source = finder.find_recipient_token_account(&funder.pubkey(), &compiled.params.mint);

    let rpc_client = rpc::connect(rpc_url);
    let before = rpc::fetch_token_balance(&rpc_client, &compiled.reserve)?;

    println!("💰 Funding reserve {} with {} tokens", compiled.reserve, amount);
    println!("   Source: {}", source);

    let ix = build_fund_reserve_ix(finder, &funder.pubkey(), &source, &compiled.distributor, amount)
        .map_err(|e| CliError::InstructionBuild(e.to_string()))?;
    rpc::send_instructions(&rpc_client, &funder, &[ix])?;

    let after = rpc::fetch_token_balance(&rpc_client, &compiled.reserve)?;
    println!("✅ Reserve balance: {} -> {}", before, after);
    if after < compiled.total_amount {
        println!(
            "   ⚠️  Reserve still short of the airdrop total ({})",
            compiled.total_amount
        );
    }
    Ok(())
}
