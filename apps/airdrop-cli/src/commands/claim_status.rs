use airdrop_sdk::{ClaimAgentState, ClaimAgentV0, CompiledAirdrop, DistributorV0};
use std::path::PathBuf;

use crate::config::format_timestamp;
use crate::error::CliResult;
use crate::rpc;

/// Report the on-chain distributor and, for an index, its claim agent
pub fn execute(compiled_path: PathBuf, index: Option<u64>, rpc_url: String) -> CliResult<()> {
    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let rpc_client = rpc::connect(rpc_url);

    let Some(distributor) =
        rpc::fetch_anchor_account::<DistributorV0>(&rpc_client, &compiled.distributor)?
    else {
        println!("❌ Distributor {} is not deployed", compiled.distributor);
        return Ok(());
    };
    let reserve_balance = rpc::fetch_token_balance(&rpc_client, &distributor.reserve)?;

    println!("📊 Distributor {}", compiled.distributor);
    println!("   Window start: {}", format_timestamp(distributor.window_start));
    println!(
        "   Claimed: {} of {} entries, {} of {} tokens",
        distributor.claim_count,
        compiled.len(),
        distributor.total_claimed,
        compiled.total_amount
    );
    println!("   Reserve balance: {}", reserve_balance);

    let Some(index) = index else {
        return Ok(());
    };
    let bundle = compiled.claim_bundle(index)?;
    println!("\n🔍 Index {} ({} tokens to {})", index, bundle.entry.amount, bundle.entry.recipient);

    match rpc::fetch_anchor_account::<ClaimAgentV0>(&rpc_client, &bundle.claim_agent_address)? {
        None => println!("   Claim agent {} not deployed", bundle.claim_agent_address),
        Some(agent) => match agent.state {
            ClaimAgentState::Claimed { claimed_at } => {
                println!("   ✅ Claimed at {}", format_timestamp(claimed_at))
            }
            state => println!("   ⏳ Agent deployed, state {:?}", state),
        },
    }
    Ok(())
}
