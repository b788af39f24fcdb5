use airdrop_sdk::{build_claim_ixs, ClaimAgentV0, CompiledAirdrop};
use solana_sdk::signature::Signer;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};
use crate::rpc;

/// Deploy the claim agent for `index` and submit its claim. The payer does not have to
/// be the recipient; tokens always land in the recipient's associated token account.
pub fn execute(
    compiled_path: PathBuf,
    index: u64,
    payer_keypair_path: PathBuf,
    rpc_url: String,
    dry_run: bool,
) -> CliResult<()> {
    println!("🎯 Claiming index {}", index);

    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let bundle = compiled.claim_bundle(index)?;
    let payer = rpc::load_keypair(&payer_keypair_path)?;
    let rpc_client = rpc::connect(rpc_url);

    println!("   Recipient: {}", bundle.entry.recipient);
    println!("   Amount: {}", bundle.entry.amount);
    println!("   Claim agent: {}", bundle.claim_agent_address);

    if let Some(agent) =
        rpc::fetch_anchor_account::<ClaimAgentV0>(&rpc_client, &bundle.claim_agent_address)?
    {
        if agent.is_claimed() {
            println!("✅ Index {} has already been claimed", index);
            return Ok(());
        }
    }

    let ixs = build_claim_ixs(&compiled.address_finder, &payer.pubkey(), &bundle)
        .map_err(|e| CliError::InstructionBuild(e.to_string()))?;

    if dry_run {
        println!("   Dry run: would send {} instructions", ixs.len());
        return Ok(());
    }

    rpc::send_instructions(&rpc_client, &payer, &ixs)?;

    let recipient_token_account = compiled
        .address_finder
        .find_recipient_token_account(&bundle.entry.recipient, &bundle.mint);
    let balance = rpc::fetch_token_balance(&rpc_client, &recipient_token_account)?;
    println!("✅ Claimed {} tokens", bundle.entry.amount);
    println!("   Recipient balance: {}", balance);
    Ok(())
}
