use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{CustodyState, VestingSchedule};

/// Stops all future releases for a beneficiary. The schedule record is
/// kept as history; already-settled amounts stay settled.
pub fn deactivate_schedule(ctx: Context<DeactivateSchedule>, beneficiary: Pubkey) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.custody_state.admin,
        CustodyError::UnauthorizedAdmin
    );

    let schedule = &mut ctx.accounts.schedule;
    require!(schedule.active, CustodyError::ScheduleInactive);
    schedule.active = false;

    emit!(ScheduleDeactivated {
        beneficiary,
        released_amount: schedule.released_amount,
        burned_amount: schedule.burned_amount,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(beneficiary: Pubkey)]
pub struct DeactivateSchedule<'info> {
    #[account(seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

    #[account(
        mut,
        seeds = [b"schedule", beneficiary.as_ref()],
        bump = schedule.bump
    )]
    pub schedule: Account<'info, VestingSchedule>,

    pub admin: Signer<'info>,
}

#[event]
pub struct ScheduleDeactivated {
    pub beneficiary: Pubkey,
    pub released_amount: u64,
    pub burned_amount: u64,
}
