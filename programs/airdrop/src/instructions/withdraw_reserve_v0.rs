use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_V0_SEED_PREFIX, RESERVE_V0_SEED_PREFIX};
use crate::error::AirdropError;
use crate::state::DistributorV0;

#[derive(Accounts)]
pub struct WithdrawReserveV0<'info> {
    pub admin: Signer<'info>,

    #[account(has_one = admin @ AirdropError::Unauthorized)]
    pub distributor: Account<'info, DistributorV0>,

    #[account(
        mut,
        seeds = [RESERVE_V0_SEED_PREFIX, distributor.key().as_ref()],
        bump = distributor.reserve_bump,
    )]
    pub reserve: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination_token_account.owner == admin.key() @ AirdropError::Unauthorized,
        constraint = destination_token_account.mint == distributor.mint @ AirdropError::MintMismatch,
    )]
    pub destination_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// Only allowed strictly before the window opens. Once claims are accepted the reserve is
/// locked for good.
pub fn handle_withdraw_reserve_v0(ctx: Context<WithdrawReserveV0>, amount: u64) -> Result<()> {
    let distributor = &ctx.accounts.distributor;
    let now = Clock::get()?.unix_timestamp;

    if distributor.is_open(now) {
        msg!(
            "Reserve locked: now={}, window_start={}",
            now,
            distributor.window_start
        );
        return err!(AirdropError::WindowAlreadyOpen);
    }
    require!(amount > 0, AirdropError::InvalidAmount);
    require!(
        ctx.accounts.reserve.amount >= amount,
        AirdropError::LedgerTransferFailed
    );

    let transfer_accounts = Transfer {
        from: ctx.accounts.reserve.to_account_info(),
        to: ctx.accounts.destination_token_account.to_account_info(),
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
        amount,
    )?;

    Ok(())
}
