use airdrop::program::Airdrop;
use airdrop::{AirdropEntry, MerkleProof, CLAIM_AGENT_V0_SEED_PREFIX};
use anchor_lang::prelude::*;
use anchor_spl::token::Token;

use crate::error::ClaimAgentError;
use crate::state::ClaimAgentV0;

#[derive(Accounts)]
pub struct SubmitClaimV0<'info> {
    #[account(
        mut,
        seeds = [
            CLAIM_AGENT_V0_SEED_PREFIX,
            distributor.key().as_ref(),
            &claim_agent.index.to_le_bytes(),
            claim_agent.proof_digest.as_ref(),
        ],
        bump = claim_agent.bump,
        has_one = distributor,
    )]
    pub claim_agent: Account<'info, ClaimAgentV0>,

    /// CHECK: Bound to the agent by `has_one`; the distributor program validates it.
    #[account(mut)]
    pub distributor: UncheckedAccount<'info>,

    /// CHECK: Validated by the distributor program against its reserve seeds.
    #[account(mut)]
    pub reserve: UncheckedAccount<'info>,

    /// CHECK: Validated by the distributor program (mint and owner).
    #[account(mut)]
    pub recipient_token_account: UncheckedAccount<'info>,

    pub airdrop_program: Program<'info, Airdrop>,
    pub token_program: Program<'info, Token>,
}

/// Claims this agent's entry and locks the agent in the same instruction. Callable by anyone:
/// the payout can only go to `entry.recipient`, and a submission whose proof does not hash to
/// this agent's digest is refused by the distributor, leaving the agent `Pending`.
pub fn handle_submit_claim_v0(
    ctx: Context<SubmitClaimV0>,
    entry: AirdropEntry,
    proof: MerkleProof,
) -> Result<()> {
    require!(
        !ctx.accounts.claim_agent.is_claimed(),
        ClaimAgentError::AlreadyClaimed
    );

    let distributor_key = ctx.accounts.distributor.key();
    let index = ctx.accounts.claim_agent.index;
    let index_bytes = index.to_le_bytes();
    let agent_seeds = &[
        CLAIM_AGENT_V0_SEED_PREFIX,
        distributor_key.as_ref(),
        index_bytes.as_ref(),
        ctx.accounts.claim_agent.proof_digest.as_ref(),
        &[ctx.accounts.claim_agent.bump],
    ];
    let signer_seeds = &[&agent_seeds[..]];

    let cpi_accounts = airdrop::cpi::accounts::ClaimV0 {
        claim_agent: ctx.accounts.claim_agent.to_account_info(),
        distributor: ctx.accounts.distributor.to_account_info(),
        reserve: ctx.accounts.reserve.to_account_info(),
        recipient_token_account: ctx.accounts.recipient_token_account.to_account_info(),
        token_program: ctx.accounts.token_program.to_account_info(),
    };

    let confirmation = airdrop::cpi::claim_v0(
        CpiContext::new_with_signer(
            ctx.accounts.airdrop_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        index,
        entry,
        proof,
    )?
    .get();

    ctx.accounts
        .claim_agent
        .receive_confirmation(&confirmation)?;

    msg!(
        "Claim agent locked: index={}, claimed_at={}",
        index,
        confirmation.claimed_at
    );

    Ok(())
}
