use airdrop_csvs::{read_entries_csv, write_commitment_csv, CommitmentCsvRow};
use airdrop_sdk::{compile_airdrop, AddressFinder, AirdropSettings, CompiledAirdrop};
use std::path::{Path, PathBuf};

use crate::config::{format_timestamp, AirdropConfig};
use crate::error::CliResult;

pub const COMPILED_AIRDROP_FILE: &str = "compiled_airdrop.json";
pub const COMMITMENT_CSV_FILE: &str = "commitment.csv";

/// Commit the entry table and write the compiled airdrop plus its commitment summary
pub fn execute(config_path: PathBuf, entries_path: PathBuf, output_dir: PathBuf) -> CliResult<()> {
    println!("📋 Loading configuration from {}", config_path.display());
    let config = AirdropConfig::load(&config_path)?;

    let compiled = compile_from_config(&config, &entries_path)?;

    std::fs::create_dir_all(&output_dir)?;
    let compiled_path = output_dir.join(COMPILED_AIRDROP_FILE);
    let commitment_path = output_dir.join(COMMITMENT_CSV_FILE);

    compiled.save_json(&compiled_path)?;
    write_commitment_csv(
        &commitment_path,
        &CommitmentCsvRow {
            merkle_root: compiled.merkle_root(),
            entry_count: compiled.len() as u64,
            total_amount: compiled.total_amount,
        },
    )?;

    println!("✅ Compiled airdrop '{}'", config.airdrop_name);
    println!("   Entries: {}", compiled.len());
    println!("   Total amount: {}", compiled.total_amount);
    println!("   Merkle root: {}", hex::encode(compiled.merkle_root()));
    println!("   Administrator: {}", compiled.params.administrator);
    println!("   Mint: {}", compiled.params.mint);
    println!(
        "   Window start: {}",
        format_timestamp(compiled.params.window_start)
    );
    println!("   Distributor: {}", compiled.distributor);
    println!("   Reserve: {}", compiled.reserve);
    println!("\n📄 Wrote {}", compiled_path.display());
    println!("📄 Wrote {}", commitment_path.display());
    println!(
        "\nFund the reserve with {} tokens before {}.",
        compiled.total_amount,
        format_timestamp(compiled.params.window_start)
    );

    Ok(())
}

pub(crate) fn compile_from_config(
    config: &AirdropConfig,
    entries_path: &Path,
) -> CliResult<CompiledAirdrop> {
    let settings = AirdropSettings {
        administrator: config.administrator()?,
        mint: config.mint()?,
        window_start: config.window_start.unix_timestamp()?,
    };
    let address_finder = match config.claim_agent_template()? {
        Some(template) => AddressFinder::with_claim_agent_template(template),
        None => AddressFinder::default(),
    };

    println!("📊 Reading entries from {}", entries_path.display());
    let rows = read_entries_csv(entries_path)?;

    Ok(compile_airdrop(&address_finder, settings, &rows)?)
}
