use airdrop_csvs::{write_entries_csv, EntryCsvRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use solana_pubkey::Pubkey;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Generate a deterministic entry table
pub fn execute(
    count: u64,
    seed: u64,
    output: PathBuf,
    min_amount: u64,
    max_amount: u64,
) -> CliResult<()> {
    if count == 0 {
        return Err(CliError::InvalidConfig("count must be positive".into()));
    }
    if min_amount > max_amount {
        return Err(CliError::InvalidConfig(format!(
            "min_amount {min_amount} exceeds max_amount {max_amount}"
        )));
    }

    println!("Generating {} entries with seed {}", count, seed);
    println!("Amount range: {} - {}", min_amount, max_amount);

    let rows = generate_rows(count, seed, min_amount, max_amount);
    let total: u128 = rows.iter().map(|row| row.amount as u128).sum();

    write_entries_csv(&output, &rows)?;

    println!("✅ Wrote {} entries to {}", rows.len(), output.display());
    println!("   Total amount: {}", total);
    Ok(())
}

fn generate_rows(count: u64, seed: u64, min_amount: u64, max_amount: u64) -> Vec<EntryCsvRow> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|index| EntryCsvRow {
            index,
            recipient: Pubkey::new_from_array(rng.gen()),
            amount: rng.gen_range(min_amount..=max_amount),
        })
        .collect()
}
