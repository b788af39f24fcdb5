use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::address::find_claim_agent_v0_address;
use crate::constants::{DISTRIBUTOR_V0_SEED_PREFIX, RESERVE_V0_SEED_PREFIX};
use crate::entry::AirdropEntry;
use crate::error::AirdropError;
use crate::proofs::MerkleProof;
use crate::state::{ClaimConfirmation, DistributorV0};

#[derive(Accounts)]
pub struct ClaimV0<'info> {
    /// The claim agent PDA, signing through `invoke_signed` from the template program.
    pub claim_agent: Signer<'info>,

    #[account(mut)]
    pub distributor: Box<Account<'info, DistributorV0>>,

    #[account(
        mut,
        seeds = [RESERVE_V0_SEED_PREFIX, distributor.key().as_ref()],
        bump = distributor.reserve_bump,
    )]
    pub reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = recipient_token_account.mint == distributor.mint @ AirdropError::MintMismatch,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// Pays `entry.amount` to the recipient when the signing claim agent is the one derived for
/// `index` and this exact proof. The distributor keeps no per-entry record; replay protection
/// lives entirely in the agent, which locks itself when this returns.
pub fn handle_claim_v0(
    ctx: Context<ClaimV0>,
    index: u64,
    entry: AirdropEntry,
    proof: MerkleProof,
) -> Result<ClaimConfirmation> {
    let now = Clock::get()?.unix_timestamp;

    {
        let distributor = &ctx.accounts.distributor;

        if !distributor.is_open(now) {
            msg!(
                "Claim window not open: now={}, window_start={}",
                now,
                distributor.window_start
            );
            return err!(AirdropError::NotYetOpen);
        }

        let (expected_agent, _) = find_claim_agent_v0_address(
            &distributor.claim_agent_template,
            &distributor.key(),
            index,
            &proof.digest(),
        );
        require_keys_eq!(
            ctx.accounts.claim_agent.key(),
            expected_agent,
            AirdropError::UnauthorizedCaller
        );

        if !proof.verify(&distributor.merkle_root, index, &entry) {
            return err!(AirdropError::InvalidProof);
        }
        msg!("Merkle proof verified successfully.");

        require_keys_eq!(
            ctx.accounts.recipient_token_account.owner,
            entry.recipient,
            AirdropError::RecipientMismatch
        );
        require!(
            ctx.accounts.reserve.amount >= entry.amount,
            AirdropError::LedgerTransferFailed
        );

        let transfer_accounts = Transfer {
            from: ctx.accounts.reserve.to_account_info(),
            to: ctx.accounts.recipient_token_account.to_account_info(),
            authority: distributor.to_account_info(),
        };

        let window_start = distributor.window_start.to_le_bytes();
        let distributor_seeds = &[
            DISTRIBUTOR_V0_SEED_PREFIX,
            distributor.merkle_root.as_ref(),
            distributor.admin.as_ref(),
            window_start.as_ref(),
            distributor.claim_agent_template.as_ref(),
            &[distributor.bump],
        ];
        let signer_seeds = &[&distributor_seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                transfer_accounts,
                signer_seeds,
            ),
            entry.amount,
        )?;
    }

    let distributor = &mut ctx.accounts.distributor;
    distributor.total_claimed = distributor
        .total_claimed
        .checked_add(entry.amount)
        .ok_or(AirdropError::NumericOverflow)?;
    distributor.claim_count = distributor
        .claim_count
        .checked_add(1)
        .ok_or(AirdropError::NumericOverflow)?;

    msg!("Claimed index {}: {} to {}", index, entry.amount, entry.recipient);

    Ok(ClaimConfirmation {
        distributor: distributor.key(),
        index,
        recipient: entry.recipient,
        amount: entry.amount,
        claimed_at: now,
    })
}
