/*!
# Airdrop CSV Schema Definitions

The CSV files exchanged between the airdrop tooling:

- **`generate-fixtures`** (producer) writes `entries.csv`
- **`compile-airdrop`** (consumer) reads `entries.csv`, writes `commitment.csv`

## Entries CSV (`entries.csv`)
- `index`: position in the entry table (u64, dense over `0..N`)
- `recipient`: recipient public key (base58)
- `amount`: token amount (u64)

## Commitment CSV (`commitment.csv`)
- `merkle_root`: root of the claim tree (hex, no `0x` prefix)
- `entry_count`: number of entries committed
- `total_amount`: sum of all amounts

## Usage

```rust,no_run
use airdrop_csvs::{read_entries_csv, validate_dense_indices, CsvResult};

fn example() -> CsvResult<()> {
    let rows = read_entries_csv("entries.csv")?;
    validate_dense_indices(&rows)?;
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

pub use errors::{CsvError, CsvResult};
pub use schemas::{CommitmentCsvRow, EntryCsvRow, COMMITMENT_CSV_HEADERS, ENTRIES_CSV_HEADERS};
pub use validation::{
    read_commitment_csv, read_entries_csv, validate_dense_indices, write_commitment_csv,
    write_entries_csv,
};
