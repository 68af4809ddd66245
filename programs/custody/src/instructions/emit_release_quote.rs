use anchor_lang::prelude::*;

use crate::state::{GovernanceState, VestingSchedule};

/// Read-only quote for off-chain tooling: what a `release` at this
/// instant would pay out, and whether transfers would currently permit
/// it.
pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, beneficiary: Pubkey) -> Result<()> {
    let schedule = &ctx.accounts.schedule;
    let gov = &ctx.accounts.governance_state;
    let now = Clock::get()?.unix_timestamp;

    let releasable = schedule.releasable_amount(now)?;

    emit!(ReleaseQuote {
        beneficiary,
        releasable,
        released_amount: schedule.released_amount,
        burned_amount: schedule.burned_amount,
        active: schedule.active,
        transfers_paused: gov.effective_paused(now),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct EmitReleaseQuote<'info> {
    #[account(seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        seeds = [b"schedule", beneficiary.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,
}

#[event]
pub struct ReleaseQuote {
    pub beneficiary: Pubkey,
    pub releasable: u64,
    pub released_amount: u64,
    pub burned_amount: u64,
    pub active: bool,
    pub transfers_paused: bool,
}
