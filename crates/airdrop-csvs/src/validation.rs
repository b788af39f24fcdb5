/*!
# CSV Validation & I/O
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{CommitmentCsvRow, EntryCsvRow, COMMITMENT_CSV_HEADERS, ENTRIES_CSV_HEADERS},
};
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read an entries CSV file. Rows come back in file order.
pub fn read_entries_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<EntryCsvRow>> {
    read_rows(path, ENTRIES_CSV_HEADERS, "entries.csv")
}

pub fn read_commitment_csv<P: AsRef<Path>>(path: P) -> CsvResult<CommitmentCsvRow> {
    let mut rows: Vec<CommitmentCsvRow> =
        read_rows(path, COMMITMENT_CSV_HEADERS, "commitment.csv")?;
    if rows.len() != 1 {
        return Err(CsvError::SchemaValidation(format!(
            "commitment.csv: expected exactly 1 row, found {}",
            rows.len()
        )));
    }
    Ok(rows.remove(0))
}

fn read_rows<P, T>(path: P, expected_headers: &[&str], file_type: &str) -> CsvResult<Vec<T>>
where
    P: AsRef<Path>,
    T: serde::de::DeserializeOwned,
{
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    let headers = rdr.headers()?;
    validate_headers(headers.iter(), expected_headers, file_type)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(format!(
            "{} is empty",
            file_type
        )));
    }

    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

pub fn write_entries_csv<P: AsRef<Path>>(path: P, rows: &[EntryCsvRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // csv writes the headers from the first row
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_commitment_csv<P: AsRef<Path>>(path: P, row: &CommitmentCsvRow) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);
    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Table Validation
// ================================================================================================

/// Indices must be unique and cover exactly `0..rows.len()`, in any order.
pub fn validate_dense_indices(rows: &[EntryCsvRow]) -> CsvResult<()> {
    let mut indices: Vec<u64> = rows.iter().map(|row| row.index).collect();
    indices.sort_unstable();

    for window in indices.windows(2) {
        if window[0] == window[1] {
            return Err(CsvError::DataInconsistency(format!(
                "index {} appears more than once",
                window[0]
            )));
        }
    }

    for (expected, index) in indices.iter().enumerate() {
        if *index != expected as u64 {
            return Err(CsvError::DataInconsistency(format!(
                "index {} is missing from the entry table",
                expected
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_pubkey::Pubkey;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn rows(indices: &[u64]) -> Vec<EntryCsvRow> {
        indices
            .iter()
            .map(|&index| EntryCsvRow {
                index,
                recipient: Pubkey::new_unique(),
                amount: 100 * (index + 1),
            })
            .collect()
    }

    #[test]
    fn test_write_and_read_entries_csv() {
        let rows = rows(&[0, 1, 2]);

        let temp_file = NamedTempFile::new().unwrap();
        write_entries_csv(temp_file.path(), &rows).unwrap();
        let read_rows = read_entries_csv(temp_file.path()).unwrap();

        assert_eq!(rows, read_rows);
    }

    #[test]
    fn test_write_and_read_commitment_csv() {
        let row = CommitmentCsvRow {
            merkle_root: [0xab; 32],
            entry_count: 1000,
            total_amount: 123_456,
        };

        let temp_file = NamedTempFile::new().unwrap();
        write_commitment_csv(temp_file.path(), &row).unwrap();

        assert_eq!(read_commitment_csv(temp_file.path()).unwrap(), row);
    }

    #[test]
    fn test_rejects_wrong_headers() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "index,claimant,amount").unwrap();
        writeln!(temp_file, "0,11111111111111111111111111111112,5").unwrap();

        let err = read_entries_csv(temp_file.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("header 2 should be 'recipient', found 'claimant'"));
    }

    #[test]
    fn test_rejects_empty_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "index,recipient,amount").unwrap();

        assert!(matches!(
            read_entries_csv(temp_file.path()),
            Err(CsvError::SchemaValidation(_))
        ));
    }

    #[test]
    fn test_dense_indices() {
        validate_dense_indices(&rows(&[2, 0, 1])).unwrap();

        let duplicate = validate_dense_indices(&rows(&[0, 1, 1])).unwrap_err();
        assert!(duplicate.to_string().contains("index 1 appears more than once"));

        let gap = validate_dense_indices(&rows(&[0, 2, 3])).unwrap_err();
        assert!(gap.to_string().contains("index 1 is missing"));
    }
}
