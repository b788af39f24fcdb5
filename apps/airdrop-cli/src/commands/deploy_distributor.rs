use airdrop_sdk::{build_initialize_distributor_v0_ix, CompiledAirdrop, DistributorV0};
use solana_sdk::signature::Signer;
use std::path::PathBuf;

use crate::config::format_timestamp;
use crate::error::{CliError, CliResult};
use crate::rpc;

/// Create the distributor and its empty reserve from a compiled airdrop
pub fn execute(
    compiled_path: PathBuf,
    admin_keypair_path: PathBuf,
    rpc_url: String,
) -> CliResult<()> {
    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let admin = rpc::load_keypair(&admin_keypair_path)?;
    if admin.pubkey() != compiled.params.administrator {
        return Err(CliError::Keypair(format!(
            "{} is not the airdrop administrator {}",
            admin.pubkey(),
            compiled.params.administrator
        )));
    }

    let rpc_client = rpc::connect(rpc_url);
    if rpc::fetch_anchor_account::<DistributorV0>(&rpc_client, &compiled.distributor)?.is_some() {
        println!("✅ Distributor {} already exists", compiled.distributor);
        return Ok(());
    }

    println!("🚀 Deploying distributor {}", compiled.distributor);
    println!("   Merkle root: {}", hex::encode(compiled.merkle_root()));
    println!("   Mint: {}", compiled.params.mint);
    println!(
        "   Window start: {}",
        format_timestamp(compiled.params.window_start)
    );

    let (ix, _, _) = build_initialize_distributor_v0_ix(&compiled.address_finder, &compiled.params)
        .map_err(|e| CliError::InstructionBuild(e.to_string()))?;
    rpc::send_instructions(&rpc_client, &admin, &[ix])?;

    println!("✅ Distributor deployed; reserve at {}", compiled.reserve);
    Ok(())
}
