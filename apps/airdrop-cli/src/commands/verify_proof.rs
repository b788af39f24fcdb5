use airdrop_sdk::{AddressFinder, ClaimBundle};
use std::path::PathBuf;

use crate::config::{parse_hash, parse_pubkey};
use crate::error::{CliError, CliResult};

pub fn execute(
    bundle_path: PathBuf,
    merkle_root: String,
    claim_agent_template: Option<String>,
) -> CliResult<()> {
    let root = parse_hash(&merkle_root)?;
    let address_finder = match claim_agent_template {
        Some(template) => AddressFinder::with_claim_agent_template(parse_pubkey(&template)?),
        None => AddressFinder::default(),
    };
    let bundle = ClaimBundle::load_json(&bundle_path)?;

    println!("🔍 Verifying claim bundle for index {}", bundle.index);
    println!("   Recipient: {}", bundle.entry.recipient);
    println!("   Amount: {}", bundle.entry.amount);

    if bundle.verify(&address_finder, &root) {
        println!("✅ Proof is valid under root {}", hex::encode(root));
        Ok(())
    } else {
        println!("❌ Proof does not verify under root {}", hex::encode(root));
        Err(CliError::CommandExecution(format!(
            "claim bundle for index {} is invalid",
            bundle.index
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdrop_csvs::EntryCsvRow;
    use airdrop_sdk::{compile_airdrop, AirdropSettings};
    use solana_pubkey::Pubkey;

    #[test]
    fn test_verify_generated_bundle() {
        let rows: Vec<EntryCsvRow> = (0..5)
            .map(|index| EntryCsvRow {
                index,
                recipient: Pubkey::new_unique(),
                amount: 10 + index,
            })
            .collect();
        let settings = AirdropSettings {
            administrator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            window_start: 1_100,
        };
        let compiled = compile_airdrop(&AddressFinder::default(), settings, &rows).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let compiled_path = dir.path().join("compiled_airdrop.json");
        let bundle_path = dir.path().join("bundle.json");
        compiled.save_json(&compiled_path).unwrap();
        crate::commands::generate_proof::execute(compiled_path, 2, Some(bundle_path.clone()))
            .unwrap();

        let root = hex::encode(compiled.merkle_root());
        execute(bundle_path.clone(), root, None).unwrap();
        assert!(execute(bundle_path.clone(), "00".repeat(32), None).is_err());
        assert!(execute(
            bundle_path,
            hex::encode(compiled.merkle_root()),
            Some(Pubkey::new_unique().to_string())
        )
        .is_err());
    }
}
