use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solana_pubkey::Pubkey;

use crate::error::{CliError, CliResult};

/// Airdrop configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirdropConfig {
    /// Human-readable airdrop name (for organization)
    pub airdrop_name: String,

    /// Base58 pubkey allowed to withdraw the reserve before the window opens
    pub administrator: String,

    /// Base58 mint of the token being distributed
    pub mint: String,

    /// When claims open: unix seconds or an RFC 3339 timestamp
    pub window_start: WindowStart,

    /// Base58 claim agent template; the built-in template when omitted
    #[serde(default)]
    pub claim_agent_template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindowStart {
    Unix(i64),
    Rfc3339(String),
}

impl WindowStart {
    pub fn unix_timestamp(&self) -> CliResult<i64> {
        match self {
            WindowStart::Unix(ts) => Ok(*ts),
            WindowStart::Rfc3339(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.timestamp())
                .map_err(|e| CliError::InvalidConfig(format!("window_start '{s}': {e}"))),
        }
    }
}

impl AirdropConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn administrator(&self) -> CliResult<Pubkey> {
        parse_pubkey(&self.administrator)
    }

    pub fn mint(&self) -> CliResult<Pubkey> {
        parse_pubkey(&self.mint)
    }

    pub fn claim_agent_template(&self) -> CliResult<Option<Pubkey>> {
        self.claim_agent_template
            .as_deref()
            .map(parse_pubkey)
            .transpose()
    }
}

pub fn parse_pubkey(s: &str) -> CliResult<Pubkey> {
    Pubkey::from_str(s).map_err(|e| CliError::InvalidPubkey(format!("'{s}': {e}")))
}

pub fn parse_hash(s: &str) -> CliResult<[u8; 32]> {
    let bytes = hex::decode(s.trim_start_matches("0x"))
        .map_err(|e| CliError::InvalidHex(format!("'{s}': {e}")))?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| CliError::InvalidHex(format!("expected 32 bytes, got {}", b.len())))
}

/// Render a unix timestamp for humans, falling back to the raw number when out of range.
pub fn format_timestamp(unix_timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(unix_timestamp, 0)
        .map(|dt| format!("{} ({unix_timestamp})", dt.to_rfc3339()))
        .unwrap_or_else(|| unix_timestamp.to_string())
}
