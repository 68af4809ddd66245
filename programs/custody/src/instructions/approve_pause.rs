use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{GovernanceState, PauseProposal, ProposalState};

pub fn approve_pause(ctx: Context<ApprovePause>, _proposal_id: u64) -> Result<()> {
    let signer = ctx.accounts.signer.key();
    let gov = &mut ctx.accounts.governance_state;
    require!(
        gov.config.is_authorized_signer(&signer),
        CustodyError::UnauthorizedSigner
    );

    let p = &mut ctx.accounts.proposal;
    require!(p.state == ProposalState::Open, CustodyError::ProposalNotOpen);

    let now = Clock::get()?.unix_timestamp;
    if p.has_expired(now) {
        // The touching call records the terminal transition; an error
        // return would revert it.
        p.mark_expired();
        gov.clear_live(p.action, p.id);
        emit!(ProposalExpired { id: p.id, at: now });
        return Ok(());
    }

    let record = p.record_approval(signer, gov.config.quorum_threshold, now)?;
    if record.newly_recorded {
        emit!(ProposalApproved {
            id: p.id,
            signer,
            approvals: p.approvals.len() as u8,
        });
    }
    if record.threshold_met {
        emit!(ProposalQuorumReached { id: p.id, at: now });
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ApprovePause<'info> {
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
pub struct ProposalApproved {
    pub id: u64,
    pub signer: Pubkey,
    pub approvals: u8,
}

#[event]
pub struct ProposalQuorumReached {
    pub id: u64,
    pub at: i64,
}

#[event]
pub struct ProposalExpired {
    pub id: u64,
    pub at: i64,
}
