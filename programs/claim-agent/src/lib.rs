//! Claim agent template for the Merkle airdrop distributor.
//!
//! One [`ClaimAgentV0`] exists per `(distributor, index, proof digest)`. It is the only
//! address the distributor will pay that entry to, and it flips to `Claimed` in the same
//! instruction that receives the payout.

pub mod error;
pub mod instructions;
pub mod state;

pub use error::ClaimAgentError;
pub use instructions::*;
pub use state::*;

use airdrop::{AirdropEntry, MerkleProof};
use anchor_lang::prelude::*;

declare_id!("EQ2W2nJBJAtZyuxzkukoKXAmKtGy23JCwbScGaxDQzP1");

#[program]
pub mod claim_agent {
    use super::instructions;
    use super::*;

    // anyone
    pub fn deploy_claim_agent_v0(
        ctx: Context<DeployClaimAgentV0>,
        index: u64,
        proof_digest: [u8; 32],
    ) -> Result<()> {
        instructions::handle_deploy_claim_agent_v0(ctx, index, proof_digest)
    }

    // anyone
    pub fn submit_claim_v0(
        ctx: Context<SubmitClaimV0>,
        entry: AirdropEntry,
        proof: MerkleProof,
    ) -> Result<()> {
        instructions::handle_submit_claim_v0(ctx, entry, proof)
    }
}
