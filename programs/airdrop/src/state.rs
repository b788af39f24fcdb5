use anchor_lang::prelude::*;

#[account] // seed [DISTRIBUTOR_V0_SEED_PREFIX, merkle_root, admin, window_start, claim_agent_template]
#[derive(InitSpace)]
pub struct DistributorV0 {
    /// May withdraw the reserve before the window opens.
    pub admin: Pubkey,

    /// The mint of the token being distributed.
    pub mint: Pubkey,

    /// Root of the commitment tree over the entry table.
    pub merkle_root: [u8; 32],

    /// Program that claim agent addresses are derived under.
    pub claim_agent_template: Pubkey,

    /// Unix timestamp (seconds) from which claims are accepted.
    pub window_start: i64,

    /// Token account holding what is still to be distributed.
    pub reserve: Pubkey,

    /// Sum of all amounts paid out through claims.
    pub total_claimed: u64,

    /// Number of successful claims.
    pub claim_count: u64,

    /// Bump seed for the Distributor PDA.
    pub bump: u8,

    /// Bump seed for the reserve token account.
    pub reserve_bump: u8,
}

impl DistributorV0 {
    pub fn is_open(&self, now: i64) -> bool {
        now >= self.window_start
    }
}

/// Returned by `claim_v0` once the payout has been made. The calling claim agent locks itself
/// on receipt.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimConfirmation {
    pub distributor: Pubkey,
    pub index: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
}
