use airdrop::{DistributorV0, CLAIM_AGENT_V0_SEED_PREFIX};
use anchor_lang::prelude::*;

use crate::state::{ClaimAgentState, ClaimAgentV0};

#[derive(Accounts)]
#[instruction(index: u64, proof_digest: [u8; 32])]
pub struct DeployClaimAgentV0<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub distributor: Account<'info, DistributorV0>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + ClaimAgentV0::INIT_SPACE,
        seeds = [
            CLAIM_AGENT_V0_SEED_PREFIX,
            distributor.key().as_ref(),
            &index.to_le_bytes(),
            proof_digest.as_ref(),
        ],
        bump
    )]
    pub claim_agent: Account<'info, ClaimAgentV0>,

    pub system_program: Program<'info, System>,
}

/// Idempotent. Deploying an agent that already exists, claimed or not, changes nothing.
pub fn handle_deploy_claim_agent_v0(
    ctx: Context<DeployClaimAgentV0>,
    index: u64,
    proof_digest: [u8; 32],
) -> Result<()> {
    let claim_agent = &mut ctx.accounts.claim_agent;

    if claim_agent.state != ClaimAgentState::Uninitialized {
        msg!("Claim agent for index {} already deployed", index);
        return Ok(());
    }

    claim_agent.set_inner(ClaimAgentV0 {
        distributor: ctx.accounts.distributor.key(),
        index,
        proof_digest,
        state: ClaimAgentState::Pending,
        bump: ctx.bumps.claim_agent,
    });

    Ok(())
}
