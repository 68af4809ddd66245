use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{GovernanceState, PauseProposal, ProposalState};

use super::approve_pause::ProposalExpired;

/// The proposer may withdraw their own proposal outright. Any other
/// authorized signer casts a cancel vote; the proposal dies only once a
/// full quorum has voted to cancel, so a lone signer can never block
/// governance.
pub fn cancel_pause(ctx: Context<CancelPause>, _proposal_id: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let gov = &mut ctx.accounts.governance_state;
    let p = &mut ctx.accounts.proposal;

    require!(p.is_live(), CustodyError::ProposalNotLive);

    let now = Clock::get()?.unix_timestamp;
    if p.has_expired(now) {
        p.mark_expired();
        gov.clear_live(p.action, p.id);
        emit!(ProposalExpired { id: p.id, at: now });
        return Ok(());
    }

    if signer == p.proposer {
        p.state = ProposalState::Cancelled;
        gov.clear_live(p.action, p.id);
        emit!(ProposalCancelled {
            id: p.id,
            by: signer,
            at: now,
        });
        return Ok(());
    }

    require!(
        gov.config.is_authorized_signer(&signer),
        CustodyError::UnauthorizedCancel
    );

    let record = p.record_cancel_vote(signer, gov.config.quorum_threshold)?;
    if record.newly_recorded {
        emit!(CancelVoteRecorded {
            id: p.id,
            signer,
            cancel_votes: p.cancel_votes.len() as u8,
        });
    }
    if record.threshold_met {
        p.state = ProposalState::Cancelled;
        gov.clear_live(p.action, p.id);
        emit!(ProposalCancelled {
            id: p.id,
            by: signer,
            at: now,
        });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CancelPause<'info> {
    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    #[account(
        mut,
        seeds = [b"proposal", proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, PauseProposal>,

    pub signer: Signer<'info>,
}

#[event]
pub struct ProposalCancelled {
    pub id: u64,
    pub by: Pubkey,
    pub at: i64,
}

#[event]
pub struct CancelVoteRecorded {
    pub id: u64,
    pub signer: Pubkey,
    pub cancel_votes: u8,
}
