use anchor_lang::prelude::*;

use crate::constants::{
    CLAIM_AGENT_V0_SEED_PREFIX, DISTRIBUTOR_V0_SEED_PREFIX, RESERVE_V0_SEED_PREFIX,
};

pub fn find_distributor_v0_address(
    merkle_root: &[u8; 32],
    admin: &Pubkey,
    window_start: i64,
    claim_agent_template: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DISTRIBUTOR_V0_SEED_PREFIX,
            merkle_root.as_ref(),
            admin.as_ref(),
            &window_start.to_le_bytes(),
            claim_agent_template.as_ref(),
        ],
        program_id,
    )
}

pub fn find_reserve_v0_address(distributor: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RESERVE_V0_SEED_PREFIX, distributor.as_ref()], program_id)
}

/// The one address allowed to claim `index` with the proof whose digest is `proof_digest`.
pub fn find_claim_agent_v0_address(
    claim_agent_template: &Pubkey,
    distributor: &Pubkey,
    index: u64,
    proof_digest: &[u8; 32],
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            CLAIM_AGENT_V0_SEED_PREFIX,
            distributor.as_ref(),
            &index.to_le_bytes(),
            proof_digest.as_ref(),
        ],
        claim_agent_template,
    )
}
