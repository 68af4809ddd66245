use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{GovernanceState, PauseAction, PauseProposal, ProposalState};

pub fn propose_pause(ctx: Context<ProposePause>, action: PauseAction) -> Result<()> {
    let proposer = ctx.accounts.proposer.key();
    let gov = &mut ctx.accounts.governance_state;
    require!(
        gov.config.is_authorized_signer(&proposer),
        CustodyError::UnauthorizedSigner
    );

    let now = Clock::get()?.unix_timestamp;
    gov.check_cooldown(action, now)?;
    gov.check_no_conflict(now)?;

    let id = gov.next_proposal_id;
    let expires_at = now
        .checked_add(gov.config.proposal_lifetime_seconds)
        .ok_or(CustodyError::MathOverflow)?;

    let p = &mut ctx.accounts.proposal;
    p.id = id;
    p.action = action;
    p.proposer = proposer;
    // Proposing counts as the first approval.
    p.approvals = vec![proposer];
    p.cancel_votes = Vec::new();
    p.created_at = now;
    p.quorum_reached_at = None;
    p.expires_at = expires_at;
    p.state = ProposalState::Open;
    p.bump = ctx.bumps.proposal;

    gov.note_proposal(action, id, now, expires_at);
    gov.next_proposal_id = gov
        .next_proposal_id
        .checked_add(1)
        .ok_or(CustodyError::MathOverflow)?;

    emit!(PauseProposed {
        id,
        action,
        proposer,
        created_at: now,
        expires_at,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ProposePause<'info> {
    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        init,
        payer = proposer,
        space = 8 + PauseProposal::SIZE,
        seeds = [b"proposal", governance_state.next_proposal_id.to_le_bytes().as_ref()],
        bump
    )]
    pub proposal: Account<'info, PauseProposal>,

    #[account(mut)]
    pub proposer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct PauseProposed {
    pub id: u64,
    pub action: PauseAction,
    pub proposer: Pubkey,
    pub created_at: i64,
    pub expires_at: i64,
}
