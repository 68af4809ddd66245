use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::BPS_DENOMINATOR;
use crate::error::CustodyError;
use crate::state::{CustodyState, GovernanceConfig, GovernanceState};
use crate::utils::validation::{validate_governance_config, GovernanceBounds};

pub fn initialize(
    ctx: Context<Initialize>,
    immediate_release_bps: u16,
    config: GovernanceConfig,
) -> Result<()> {
    require!(
        (immediate_release_bps as u64) <= BPS_DENOMINATOR,
        CustodyError::InvalidParameters
    );
    validate_governance_config(&config, &GovernanceBounds::default())?;

    let st = &mut ctx.accounts.custody_state;
    st.mint = ctx.accounts.mint.key();
    st.admin = ctx.accounts.admin.key();
    st.immediate_release_bps = immediate_release_bps;
    st.total_allocated = 0;
    st.total_released = 0;
    st.total_burned = 0;
    st.bump = ctx.bumps.custody_state;

    let gov = &mut ctx.accounts.governance_state;
    gov.config = config;
    gov.next_proposal_id = 0;
    gov.last_pause_proposal_ts = 0;
    gov.last_unpause_proposal_ts = 0;
    gov.live_pause_proposal = None;
    gov.live_unpause_proposal = None;
    gov.transfers_paused = false;
    gov.paused_at = 0;
    gov.bump = ctx.bumps.governance_state;

    emit!(CustodyInitialized {
        mint: st.mint,
        admin: st.admin,
        signer_count: gov.config.signers.len() as u8,
        quorum_threshold: gov.config.quorum_threshold,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + CustodyState::SIZE,
        seeds = [b"custody"],
        bump
    )]
    pub custody_state: Account<'info, CustodyState>,

    #[account(
        init,
        payer = admin,
        space = 8 + GovernanceState::SIZE,
        seeds = [b"governance"],
        bump
    )]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = custody_state,
        seeds = [b"vault", custody_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = custody_state,
        seeds = [b"burn_vault", custody_state.key().as_ref()],
        bump
    )]
    pub burn_vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct CustodyInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub signer_count: u8,
    pub quorum_threshold: u8,
}
