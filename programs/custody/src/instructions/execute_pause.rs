use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{GovernanceState, PauseAction, PauseProposal, ProposalState};

use super::approve_pause::ProposalExpired;

/// Permissionless once quorum and timelock are satisfied: anyone may
/// submit the execution, the gates are all recorded on the proposal.
pub fn execute_pause(ctx: Context<ExecutePause>, _proposal_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let gov = &mut ctx.accounts.governance_state;
    let p = &mut ctx.accounts.proposal;

    p.check_executable(gov.config.timelock_seconds, now)?;

    if p.has_expired(now) {
        p.mark_expired();
        gov.clear_live(p.action, p.id);
        emit!(ProposalExpired { id: p.id, at: now });
        return Ok(());
    }

    p.state = ProposalState::Executed;
    gov.apply_execution(p.action, now);
    gov.clear_live(p.action, p.id);

    emit!(ProposalExecuted {
        id: p.id,
        action: p.action,
        at: now,
        transfers_paused: gov.transfers_paused,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ExecutePause<'info> {
    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        mut,
        seeds = [b"proposal", proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, PauseProposal>,

    pub executor: Signer<'info>,
}

#[event]
pub struct ProposalExecuted {
    pub id: u64,
    pub action: PauseAction,
    pub at: i64,
    pub transfers_paused: bool,
}
