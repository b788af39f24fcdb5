use airdrop_sdk::{build_withdraw_reserve_v0_ix, CompiledAirdrop};
use solana_sdk::signature::Signer;
use std::path::PathBuf;

use crate::config::parse_pubkey;
use crate::error::{CliError, CliResult};
use crate::rpc;

/// Pull tokens back out of the reserve. Only the administrator can do this, and only
/// before the claim window opens.
pub fn execute(
    compiled_path: PathBuf,
    admin_keypair_path: PathBuf,
    rpc_url: String,
    amount: u64,
    destination: Option<String>,
) -> CliResult<()> {
    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let admin = rpc::load_keypair(&admin_keypair_path)?;
    let finder = &compiled.address_finder;
    let destination = match destination {
        Some(address) => parse_pubkey(&address)?,
        None => finder.find_recipient_token_account(&admin.pubkey(), &compiled.params.mint),
    };

    let rpc_client = rpc::connect(rpc_url);
    println!("🏦 Withdrawing {} tokens from reserve {}", amount, compiled.reserve);
    println!("   Destination: {}", destination);

    let (ix, _, _) = build_withdraw_reserve_v0_ix(
        finder,
        &admin.pubkey(),
        &compiled.distributor,
        &destination,
        amount,
    )
    .map_err(|e| CliError::InstructionBuild(e.to_string()))?;
    rpc::send_instructions(&rpc_client, &admin, &[ix])?;

    let remaining = rpc::fetch_token_balance(&rpc_client, &compiled.reserve)?;
    println!("✅ Withdrawn; reserve now holds {}", remaining);
    Ok(())
}
