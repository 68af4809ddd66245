use anchor_lang::prelude::*;

use crate::state::GovernanceState;

use super::release::AutoUnpaused;

/// Permissionless crank: applies the lazy auto-unpause transition so
/// the pause flag read by the transfer path stays honest even without
/// release traffic.
pub fn sync_pause_state(ctx: Context<SyncPauseState>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let gov = &mut ctx.accounts.governance_state;
    if gov.refresh_pause(now) {
        emit!(AutoUnpaused { at: now });
    }
    Ok(())
}

#[derive(Accounts)]
pub struct SyncPauseState<'info> {
    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,
}
