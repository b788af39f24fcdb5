use airdrop_sdk::CompiledAirdrop;
use std::path::PathBuf;

use crate::error::CliResult;

pub fn execute(compiled_path: PathBuf, index: u64, output: Option<PathBuf>) -> CliResult<()> {
    let compiled = CompiledAirdrop::load_json(&compiled_path)?;
    let bundle = compiled.claim_bundle(index)?;

    match output {
        Some(path) => {
            bundle.save_json(&path)?;
            println!("✅ Claim bundle for index {} written to {}", index, path.display());
            println!("   Recipient: {}", bundle.entry.recipient);
            println!("   Amount: {}", bundle.entry.amount);
            println!("   Proof depth: {}", bundle.proof.len());
            println!("   Claim agent: {}", bundle.claim_agent_address);
        }
        None => println!("{}", bundle.to_json()?),
    }

    Ok(())
}
