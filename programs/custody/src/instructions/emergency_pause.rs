use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::GovernanceState;

/// Incident-response path: pauses immediately, bypassing proposal,
/// quorum and timelock. Deliberately one-directional; unpausing always
/// goes through governance.
pub fn emergency_pause(ctx: Context<EmergencyPause>) -> Result<()> {
    let gov = &mut ctx.accounts.governance_state;
    require!(
        gov.config.allow_emergency_bypass,
        CustodyError::EmergencyBypassDisabled
    );
    require_keys_eq!(
        ctx.accounts.authority.key(),
        gov.config.emergency_authority,
        CustodyError::UnauthorizedEmergency
    );

    let now = Clock::get()?.unix_timestamp;
    gov.transfers_paused = true;
    gov.paused_at = now;

    emit!(EmergencyPauseTriggered {
        authority: ctx.accounts.authority.key(),
        at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyPause<'info> {
    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    pub authority: Signer<'info>,
}

#[event]
pub struct EmergencyPauseTriggered {
    pub authority: Pubkey,
    pub at: i64,
}
