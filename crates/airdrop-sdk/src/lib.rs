mod address_finder;
mod airdrop_compiler;
mod distributor_params;
mod error;
mod instruction_builders;
mod serde_helpers;

pub use address_finder::AddressFinder;
pub use airdrop_compiler::*;
pub use distributor_params::DistributorParams;
pub use error::{SdkError, SdkResult};
pub use instruction_builders::*;

pub use airdrop::{AirdropEntry, ClaimConfirmation, DistributorV0, MerkleProof};
pub use claim_agent::{ClaimAgentState, ClaimAgentV0};

// Re-export program IDs
pub use airdrop::ID as AIRDROP_PROGRAM_ID;
pub use claim_agent::ID as CLAIM_AGENT_PROGRAM_ID;
