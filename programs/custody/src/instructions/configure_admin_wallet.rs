use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::BPS_DENOMINATOR;
use crate::error::CustodyError;
use crate::state::{AdminWalletConfig, CustodyState, VestingSchedule};

pub fn configure_admin_wallet(
    ctx: Context<ConfigureAdminWallet>,
    beneficiary: Pubkey,
    total_allocation: u64,
    cliff_seconds: i64,
    vesting_seconds: i64,
    release_rate_bps: u16,
    burn_rate_bps: u16,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), CustodyError::InvalidPubkey);
    require!(total_allocation > 0, CustodyError::InvalidParameters);
    require!(vesting_seconds > 0, CustodyError::InvalidParameters);
    require!(cliff_seconds >= 0, CustodyError::InvalidParameters);
    require!(
        (release_rate_bps as u64) <= BPS_DENOMINATOR,
        CustodyError::InvalidParameters
    );
    require!(
        (burn_rate_bps as u64) <= BPS_DENOMINATOR,
        CustodyError::InvalidParameters
    );

    let st = &ctx.accounts.custody_state;
    require_keys_eq!(
        ctx.accounts.admin.key(),
        st.admin,
        CustodyError::UnauthorizedAdmin
    );
    require_keys_eq!(
        ctx.accounts.treasury.mint,
        st.mint,
        CustodyError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury.owner,
        ctx.accounts.admin.key(),
        CustodyError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.treasury.amount >= total_allocation,
        CustodyError::InsufficientBalance
    );

    let (immediate, locked) =
        AdminWalletConfig::split(total_allocation, st.immediate_release_bps)?;
    // The locked tranche backs the paired schedule; an all-immediate
    // split would leave it empty.
    require!(locked > 0, CustodyError::InvalidParameters);

    // Escrow both tranches; the immediate one stays in the vault until
    // its one-shot release is processed.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        total_allocation,
    )?;

    let now = Clock::get()?.unix_timestamp;

    let schedule = &mut ctx.accounts.schedule;
    schedule.beneficiary = beneficiary;
    schedule.total_amount = locked;
    schedule.released_amount = 0;
    schedule.burned_amount = 0;
    schedule.start_ts = now;
    schedule.cliff_seconds = cliff_seconds;
    schedule.vesting_seconds = vesting_seconds;
    schedule.release_rate_bps = release_rate_bps;
    schedule.burn_rate_bps = burn_rate_bps;
    schedule.is_admin = true;
    schedule.active = true;
    schedule.bump = ctx.bumps.schedule;

    let cfg = &mut ctx.accounts.admin_config;
    cfg.beneficiary = beneficiary;
    cfg.total_allocation = total_allocation;
    cfg.immediate_release_amount = immediate;
    cfg.locked_amount = locked;
    cfg.immediate_released = false;
    cfg.bump = ctx.bumps.admin_config;

    let st = &mut ctx.accounts.custody_state;
    st.total_allocated = st
        .total_allocated
        .checked_add(total_allocation)
        .ok_or(CustodyError::MathOverflow)?;

    emit!(AdminWalletConfigured {
        beneficiary,
        total_allocation,
        immediate_release_amount: immediate,
        locked_amount: locked,
        start_ts: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct ConfigureAdminWallet<'info> {
    #[account(mut, seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

    #[account(
        init,
        payer = admin,
        space = 8 + AdminWalletConfig::SIZE,
        seeds = [b"admin_config", beneficiary.as_ref()],
        bump
    )]
    pub admin_config: Account<'info, AdminWalletConfig>,

    #[account(
        init,
        payer = admin,
        space = 8 + VestingSchedule::SIZE,
        seeds = [b"schedule", beneficiary.as_ref()],
        bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", custody_state.key().as_ref()],
        bump,
        constraint = vault.mint == custody_state.mint @ CustodyError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct AdminWalletConfigured {
    pub beneficiary: Pubkey,
    pub total_allocation: u64,
    pub immediate_release_amount: u64,
    pub locked_amount: u64,
    pub start_ts: i64,
}
