use airdrop_sdk::CompiledAirdrop;
use std::path::PathBuf;

use crate::config::parse_pubkey;
use crate::error::CliResult;

pub fn execute(compiled_path: PathBuf, recipient: String) -> CliResult<()> {
    let recipient = parse_pubkey(&recipient)?;
    println!("🔍 Checking eligibility for recipient: {}", recipient);

    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let entries = compiled.entries_for(&recipient);

    if entries.is_empty() {
        println!("❌ No entries found for recipient {}", recipient);
        println!("   This recipient is not part of this airdrop.");
        return Ok(());
    }

    println!("✅ Found {} entr(y/ies):\n", entries.len());

    let mut total = 0u128;
    for (index, entry) in &entries {
        let bundle = compiled.claim_bundle(*index)?;
        println!("   Index {}: {} tokens", index, entry.amount);
        println!("      Claim agent: {}", bundle.claim_agent_address);
        total += entry.amount as u128;
    }

    println!("\n   Total claimable: {} tokens", total);
    Ok(())
}
