use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::BPS_DENOMINATOR;
use crate::error::CustodyError;
use crate::state::{CustodyState, VestingSchedule};

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    beneficiary: Pubkey,
    total_amount: u64,
    cliff_seconds: i64,
    vesting_seconds: i64,
    release_rate_bps: u16,
    burn_rate_bps: u16,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), CustodyError::InvalidPubkey);
    require!(total_amount > 0, CustodyError::InvalidParameters);
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
        ctx.accounts.treasury.amount >= total_amount,
        CustodyError::InsufficientBalance
    );

    // Escrow the full allocation up front; the beneficiary balance is
    // untouched until release.
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.admin.to_account_info(),
            },
        ),
        total_amount,
    )?;

    let now = Clock::get()?.unix_timestamp;

    let schedule = &mut ctx.accounts.schedule;
    schedule.beneficiary = beneficiary;
    schedule.total_amount = total_amount;
    schedule.released_amount = 0;
    schedule.burned_amount = 0;
    schedule.start_ts = now;
    schedule.cliff_seconds = cliff_seconds;
    schedule.vesting_seconds = vesting_seconds;
    schedule.release_rate_bps = release_rate_bps;
    schedule.burn_rate_bps = burn_rate_bps;
    schedule.is_admin = false;
    schedule.active = true;
    schedule.bump = ctx.bumps.schedule;

    let st = &mut ctx.accounts.custody_state;
    st.total_allocated = st
        .total_allocated
        .checked_add(total_amount)
        .ok_or(CustodyError::MathOverflow)?;

    emit!(ScheduleCreated {
        beneficiary,
        total_amount,
        start_ts: now,
        cliff_seconds,
        vesting_seconds,
        release_rate_bps,
        burn_rate_bps,
        is_admin: false,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

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
pub struct ScheduleCreated {
    pub beneficiary: Pubkey,
    pub total_amount: u64,
    pub start_ts: i64,
    pub cliff_seconds: i64,
    pub vesting_seconds: i64,
    pub release_rate_bps: u16,
    pub burn_rate_bps: u16,
    pub is_admin: bool,
}
