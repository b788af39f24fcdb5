use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DISTRIBUTOR_V0_SEED_PREFIX, EMPTY_ROOT, RESERVE_V0_SEED_PREFIX};
use crate::error::AirdropError;
use crate::state::DistributorV0;

#[derive(Accounts)]
#[instruction(merkle_root: [u8; 32], claim_agent_template: Pubkey, window_start: i64)]
pub struct InitializeDistributorV0<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + DistributorV0::INIT_SPACE,
        seeds = [
            DISTRIBUTOR_V0_SEED_PREFIX,
            merkle_root.as_ref(),
            admin.key().as_ref(),
            &window_start.to_le_bytes(),
            claim_agent_template.as_ref(),
        ],
        bump
    )]
    pub distributor: Account<'info, DistributorV0>,

    pub mint: Account<'info, Mint>,

    /// Holds the tokens to distribute. Only the distributor PDA can move them.
    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = distributor,
        seeds = [RESERVE_V0_SEED_PREFIX, distributor.key().as_ref()],
        bump
    )]
    pub reserve: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize_distributor_v0(
    ctx: Context<InitializeDistributorV0>,
    merkle_root: [u8; 32],
    claim_agent_template: Pubkey,
    window_start: i64,
) -> Result<()> {
    require!(merkle_root != EMPTY_ROOT, AirdropError::EmptyMerkleRoot);
    require!(
        claim_agent_template != Pubkey::default() && claim_agent_template != crate::ID,
        AirdropError::InvalidClaimAgentTemplate
    );

    let distributor = &mut ctx.accounts.distributor;
    distributor.set_inner(DistributorV0 {
        admin: ctx.accounts.admin.key(),
        mint: ctx.accounts.mint.key(),
        merkle_root,
        claim_agent_template,
        window_start,
        reserve: ctx.accounts.reserve.key(),
        total_claimed: 0,
        claim_count: 0,
        bump: ctx.bumps.distributor,
        reserve_bump: ctx.bumps.reserve,
    });

    msg!(
        "Distributor initialized: window_start={}, template={}",
        window_start,
        claim_agent_template
    );

    Ok(())
}
