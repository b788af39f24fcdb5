use airdrop::{find_claim_agent_v0_address, find_distributor_v0_address, find_reserve_v0_address};
use solana_pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use crate::DistributorParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFinder {
    pub airdrop_program_id: Pubkey,
    pub claim_agent_template: Pubkey,
}

impl AddressFinder {
    pub fn new(airdrop_program_id: Pubkey, claim_agent_template: Pubkey) -> Self {
        Self {
            airdrop_program_id,
            claim_agent_template,
        }
    }

    pub fn with_claim_agent_template(claim_agent_template: Pubkey) -> Self {
        Self::new(airdrop::ID, claim_agent_template)
    }

    pub fn find_distributor_address(&self, params: &DistributorParams) -> (Pubkey, u8) {
        find_distributor_v0_address(
            &params.merkle_root,
            &params.administrator,
            params.window_start,
            &params.claim_agent_template,
            &self.airdrop_program_id,
        )
    }

    pub fn find_reserve_address(&self, distributor: &Pubkey) -> (Pubkey, u8) {
        find_reserve_v0_address(distributor, &self.airdrop_program_id)
    }

    pub fn find_claim_agent_address(
        &self,
        distributor: &Pubkey,
        index: u64,
        proof_digest: &[u8; 32],
    ) -> (Pubkey, u8) {
        find_claim_agent_v0_address(&self.claim_agent_template, distributor, index, proof_digest)
    }

    /// The token account claims for `recipient` are paid into.
    pub fn find_recipient_token_account(&self, recipient: &Pubkey, mint: &Pubkey) -> Pubkey {
        get_associated_token_address(recipient, mint)
    }
}

impl Default for AddressFinder {
    fn default() -> Self {
        Self::new(airdrop::ID, claim_agent::ID)
    }
}
