use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::CustodyError;
use crate::state::{CustodyState, GovernanceState, VestingSchedule};
use crate::utils::{self, math};

pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
    // Capture AccountInfos/keys before taking mutable borrows.
    let custody_ai = ctx.accounts.custody_state.to_account_info();
    let custody_bump = ctx.accounts.custody_state.bump;
    let admin_key = ctx.accounts.custody_state.admin;
    let mint_key = ctx.accounts.custody_state.mint;

    let caller = ctx.accounts.caller.key();
    require!(
        caller == admin_key || caller == beneficiary,
        CustodyError::UnauthorizedRelease
    );

    let now = Clock::get()?.unix_timestamp;

    // The release path is a transfer path: apply the lazy auto-unpause
    // transition before consulting the flag.
    let gov = &mut ctx.accounts.governance_state;
    if gov.refresh_pause(now) {
        emit!(AutoUnpaused { at: now });
    }
    require!(!gov.transfers_paused, CustodyError::TransfersPaused);

    let schedule = &mut ctx.accounts.schedule;
    require!(schedule.active, CustodyError::ScheduleInactive);

    let gross = schedule.releasable_amount(now)?;
    require!(gross > 0, CustodyError::NothingToRelease);

    let burn_portion = math::bps_portion(gross, schedule.burn_rate_bps)?;
    let to_beneficiary = gross
        .checked_sub(burn_portion)
        .ok_or(CustodyError::MathOverflow)?;

    require_keys_eq!(
        ctx.accounts.mint.key(),
        mint_key,
        CustodyError::InvalidTokenMint
    );
    let expected_ata = utils::expected_ata_address(&beneficiary, &mint_key);
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.key(),
        expected_ata,
        CustodyError::InvalidBeneficiaryAta
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.mint,
        mint_key,
        CustodyError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.beneficiary_ata.owner,
        beneficiary,
        CustodyError::InvalidTokenAccount
    );
    require!(
        ctx.accounts.vault.amount >= gross,
        CustodyError::InsufficientVaultBalance
    );

    // Two outbound legs from the vault, both signed by the custody PDA.
    let signer_seeds: &[&[&[u8]]] = &[&[b"custody", &[custody_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: custody_ai.clone(),
            },
            signer_seeds,
        ),
        to_beneficiary,
    )?;
    if burn_portion > 0 {
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.burn_vault.to_account_info(),
                    authority: custody_ai,
                },
                signer_seeds,
            ),
            burn_portion,
        )?;
    }

    schedule.settle(to_beneficiary, burn_portion)?;

    let st = &mut ctx.accounts.custody_state;
    st.total_released = st
        .total_released
        .checked_add(to_beneficiary)
        .ok_or(CustodyError::MathOverflow)?;
    st.total_burned = st
        .total_burned
        .checked_add(burn_portion)
        .ok_or(CustodyError::MathOverflow)?;

    emit!(TokensReleased {
        beneficiary,
        amount: to_beneficiary,
        burned: burn_portion,
        released_total: schedule.released_amount,
        burned_total: schedule.burned_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct Release<'info> {
    #[account(mut, seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        mut,
        seeds = [b"schedule", beneficiary.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    #[account(
        mut,
        seeds = [b"vault", custody_state.key().as_ref()],
        bump,
        constraint = vault.mint == custody_state.mint @ CustodyError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"burn_vault", custody_state.key().as_ref()],
        bump,
        constraint = burn_vault.mint == custody_state.mint @ CustodyError::InvalidTokenMint,
    )]
    pub burn_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub burned: u64,
    pub released_total: u64,
    pub burned_total: u64,
}

#[event]
pub struct AutoUnpaused {
    pub at: i64,
}
