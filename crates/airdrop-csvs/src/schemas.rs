use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;
use std::str::FromStr;

// ================================================================================================
// Entries CSV Schema
// ================================================================================================

/// Expected headers for entries.csv in exact order
pub const ENTRIES_CSV_HEADERS: &[&str] = &["index", "recipient", "amount"];

/// One row of the entry table.
///
/// **File**: `entries.csv`
/// **Producer**: `generate-fixtures` command
/// **Consumers**: `compile-airdrop` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryCsvRow {
    /// Position of the entry in the committed table
    pub index: u64,

    /// Recipient public key in base58 format
    #[serde(
        deserialize_with = "deserialize_pubkey",
        serialize_with = "serialize_pubkey"
    )]
    pub recipient: Pubkey,

    pub amount: u64,
}

// ================================================================================================
// Commitment CSV Schema
// ================================================================================================

/// Expected headers for commitment.csv in exact order
pub const COMMITMENT_CSV_HEADERS: &[&str] = &["merkle_root", "entry_count", "total_amount"];

/// **File**: `commitment.csv`
/// **Producer**: `compile-airdrop` command
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitmentCsvRow {
    /// Merkle root in hex format (without 0x prefix)
    #[serde(deserialize_with = "deserialize_hex", serialize_with = "serialize_hex")]
    pub merkle_root: [u8; 32],

    pub entry_count: u64,

    pub total_amount: u64,
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

fn deserialize_pubkey<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(serde::de::Error::custom)
}

fn serialize_pubkey<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&pubkey.to_string())
}

fn deserialize_hex<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
    <[u8; 32]>::try_from(bytes.as_slice()).map_err(|_| {
        serde::de::Error::custom(format!("Expected 32 bytes, got {}", bytes.len()))
    })
}

fn serialize_hex<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_row_uses_base58() {
        let recipient = Pubkey::from_str("11111111111111111111111111111112").unwrap();
        let row = EntryCsvRow {
            index: 0,
            recipient,
            amount: 100,
        };

        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(&row).unwrap();
        let csv_data = String::from_utf8(wtr.into_inner().unwrap()).unwrap();

        assert_eq!(
            csv_data,
            "index,recipient,amount\n0,11111111111111111111111111111112,100\n"
        );
    }

    #[test]
    fn test_commitment_row_rejects_short_root() {
        let csv_data = "merkle_root,entry_count,total_amount\nabcd,1,10\n";
        let mut rdr = csv::Reader::from_reader(csv_data.as_bytes());
        let row: Result<CommitmentCsvRow, _> = rdr.deserialize().next().unwrap();

        assert!(row
            .unwrap_err()
            .to_string()
            .contains("Expected 32 bytes, got 2"));
    }
}
