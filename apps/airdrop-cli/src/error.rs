use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entry table error: {0}")]
    Csv(#[from] airdrop_csvs::CsvError),

    #[error("Airdrop config error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Artifact JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Sdk(#[from] airdrop_sdk::SdkError),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid pubkey: {0}")]
    InvalidPubkey(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    #[error("Keypair error: {0}")]
    Keypair(String),

    #[error("Instruction build error: {0}")]
    InstructionBuild(String),

    #[error("Account decode error: {0}")]
    AccountDecode(String),

    #[error("Invalid airdrop config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    CommandExecution(String),
}
