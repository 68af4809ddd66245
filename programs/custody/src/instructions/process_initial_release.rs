use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::CustodyError;
use crate::state::{AdminWalletConfig, CustodyState, GovernanceState};
use crate::utils;

use super::release::AutoUnpaused;

/// One-shot transition, intentionally distinct from the recurring
/// `release`: the immediate tranche carries no burn split.
pub fn process_initial_release(
    ctx: Context<ProcessInitialRelease>,
    beneficiary: Pubkey,
) -> Result<()> {
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

    let gov = &mut ctx.accounts.governance_state;
    if gov.refresh_pause(now) {
        emit!(AutoUnpaused { at: now });
    }
    require!(!gov.transfers_paused, CustodyError::TransfersPaused);

    let cfg = &mut ctx.accounts.admin_config;
    require_keys_eq!(cfg.beneficiary, beneficiary, CustodyError::NotConfigured);
    require!(!cfg.immediate_released, CustodyError::AlreadyReleased);

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

    let amount = cfg.immediate_release_amount;
    require!(
        ctx.accounts.vault.amount >= amount,
        CustodyError::InsufficientVaultBalance
    );

    let signer_seeds: &[&[&[u8]]] = &[&[b"custody", &[custody_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.beneficiary_ata.to_account_info(),
                authority: custody_ai,
            },
            signer_seeds,
        ),
        amount,
    )?;

    cfg.immediate_released = true;

    let st = &mut ctx.accounts.custody_state;
    st.total_released = st
        .total_released
        .checked_add(amount)
        .ok_or(CustodyError::MathOverflow)?;

    emit!(InitialReleaseProcessed {
        beneficiary,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct ProcessInitialRelease<'info> {
    #[account(mut, seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        mut,
        seeds = [b"admin_config", beneficiary.as_ref()],
        bump = admin_config.bump
    )]
    pub admin_config: Account<'info, AdminWalletConfig>,

    #[account(
        mut,
        seeds = [b"vault", custody_state.key().as_ref()],
        bump,
        constraint = vault.mint == custody_state.mint @ CustodyError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct InitialReleaseProcessed {
    pub beneficiary: Pubkey,
    pub amount: u64,
}
