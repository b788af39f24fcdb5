//! Merkle airdrop distributor.
//!
//! A [`DistributorV0`] commits to an entry table through a single Merkle root. Each entry is
//! claimed through its own claim agent, an account whose address is derived from the entry's
//! index and proof under the distributor's `claim_agent_template` program. The distributor
//! only pays when that exact address signs the claim, and the agent locks itself in the same
//! instruction, so every entry pays out at most once without the distributor storing anything
//! per recipient.

pub mod address;
pub mod constants;
pub mod entry;
pub mod error;
pub mod hashing;
pub mod instructions;
pub mod proofs;
pub mod state;

pub use address::*;
pub use constants::{
    CLAIM_AGENT_V0_SEED_PREFIX, DISTRIBUTOR_V0_SEED_PREFIX, EMPTY_ROOT, MAX_PROOF_DEPTH,
    RESERVE_V0_SEED_PREFIX,
};
pub use entry::*;
pub use error::AirdropError;
pub use instructions::*;
pub use proofs::*;
pub use state::*;

use anchor_lang::prelude::*;

declare_id!("DSpyoJoR61BEdd62paKaVmn9px2S4akosgEC9X6K5PQe");

#[program]
pub mod airdrop {
    use super::instructions;
    use super::*;

    // admin
    pub fn initialize_distributor_v0(
        ctx: Context<InitializeDistributorV0>,
        merkle_root: [u8; 32],
        claim_agent_template: Pubkey,
        window_start: i64,
    ) -> Result<()> {
        instructions::handle_initialize_distributor_v0(
            ctx,
            merkle_root,
            claim_agent_template,
            window_start,
        )
    }

    // admin
    pub fn withdraw_reserve_v0(ctx: Context<WithdrawReserveV0>, amount: u64) -> Result<()> {
        instructions::handle_withdraw_reserve_v0(ctx, amount)
    }

    // claim agent
    pub fn claim_v0(
        ctx: Context<ClaimV0>,
        index: u64,
        entry: AirdropEntry,
        proof: MerkleProof,
    ) -> Result<ClaimConfirmation> {
        instructions::handle_claim_v0(ctx, index, entry, proof)
    }
}
