use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Csv(#[from] airdrop_csvs::CsvError),

    #[error(transparent)]
    Merkle(#[from] airdrop_merkle::MerkleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error("Entry table is empty")]
    EmptyEntryTable,

    #[error("Total airdrop amount overflows u64")]
    AmountOverflow,

    #[error("Recorded merkle root {recorded} does not match rebuilt root {rebuilt}")]
    RootMismatch { recorded: String, rebuilt: String },

    #[error("Recorded {what} address {recorded} does not match derived address {derived}")]
    AddressMismatch {
        what: &'static str,
        recorded: String,
        derived: String,
    },

    #[error("Invalid distributor parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid claim bundle: {0}")]
    InvalidBundle(String),
}

pub type SdkResult<T> = std::result::Result<T, SdkError>;
