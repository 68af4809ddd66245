use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::MAX_SIGNERS;
use crate::error::CustodyError;

/// The two pause actions a proposal can carry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseAction {
    Pause,
    Unpause,
}

/// Proposal lifecycle. `Executed`, `Expired` and `Cancelled` are terminal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalState {
    Open,
    QuorumReached,
    Executed,
    Expired,
    Cancelled,
}

/// Governance parameters. Replaced wholesale under validation, never
/// field-mutated in place.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct GovernanceConfig {
    /// Distinct non-default signer accounts.
    pub signers: Vec<Pubkey>,
    /// Distinct approvals required before execution becomes possible.
    pub quorum_threshold: u8,
    /// Delay between reaching quorum and eligibility for execution.
    pub timelock_seconds: i64,
    /// An executed pause auto-expires after this long.
    pub max_pause_seconds: i64,
    /// Unexecuted proposals older than this become Expired.
    pub proposal_lifetime_seconds: i64,
    /// Minimum spacing between successive same-action proposals.
    pub proposal_cooldown_seconds: i64,
    pub auto_unpause_enabled: bool,
    pub allow_emergency_bypass: bool,
    /// Held separately from the signer set; may force a pause, never an
    /// unpause.
    pub emergency_authority: Pubkey,
}

impl GovernanceConfig {
    pub const SIZE: usize =
        4 + 32 * MAX_SIGNERS + // signers
        1 +  // quorum_threshold
        8 +  // timelock_seconds
        8 +  // max_pause_seconds
        8 +  // proposal_lifetime_seconds
        8 +  // proposal_cooldown_seconds
        1 +  // auto_unpause_enabled
        1 +  // allow_emergency_bypass
        32;  // emergency_authority

    pub fn is_authorized_signer(&self, key: &Pubkey) -> bool {
        self.signers.contains(key)
    }
}

/// Pointer to a live (open or quorum-reached) proposal, kept on the
/// singleton so conflict checks need no account scan. A stale pointer
/// heals itself once `expires_at` passes.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiveProposalRef {
    pub id: u64,
    pub expires_at: i64,
}

/// Singleton pause-governance state PDA.
#[account]
pub struct GovernanceState {
    pub config: GovernanceConfig,
    /// Running counter for proposal PDAs.
    pub next_proposal_id: u64,
    pub last_pause_proposal_ts: i64,
    pub last_unpause_proposal_ts: i64,
    pub live_pause_proposal: Option<LiveProposalRef>,
    pub live_unpause_proposal: Option<LiveProposalRef>,
    pub transfers_paused: bool,
    /// Anchor for the auto-unpause deadline. Zero while unpaused.
    pub paused_at: i64,
    pub bump: u8,
}

impl GovernanceState {
    pub const SIZE: usize =
        GovernanceConfig::SIZE +
        8 +  // next_proposal_id
        8 +  // last_pause_proposal_ts
        8 +  // last_unpause_proposal_ts
        17 + // live_pause_proposal
        17 + // live_unpause_proposal
        1 +  // transfers_paused
        8 +  // paused_at
        1;   // bump

    fn last_proposal_ts(&self, action: PauseAction) -> i64 {
        match action {
            PauseAction::Pause => self.last_pause_proposal_ts,
            PauseAction::Unpause => self.last_unpause_proposal_ts,
        }
    }

    /// Spacing check against the last proposal of the same action.
    pub fn check_cooldown(&self, action: PauseAction, now_ts: i64) -> Result<(), CustodyError> {
        let last = self.last_proposal_ts(action);
        if last > 0 && now_ts - last < self.config.proposal_cooldown_seconds {
            return Err(CustodyError::CooldownActive);
        }
        Ok(())
    }

    /// Rejects a new proposal while any unexpired proposal is live, for
    /// either action: pause and unpause must never race each other, and
    /// a second same-action proposal would make quorum tracking
    /// ambiguous.
    pub fn check_no_conflict(&self, now_ts: i64) -> Result<(), CustodyError> {
        for live in [&self.live_pause_proposal, &self.live_unpause_proposal] {
            if let Some(r) = live {
                if now_ts <= r.expires_at {
                    return Err(CustodyError::ConflictingProposal);
                }
            }
        }
        Ok(())
    }

    /// Record a freshly created proposal.
    pub fn note_proposal(&mut self, action: PauseAction, id: u64, created_at: i64, expires_at: i64) {
        let slot = Some(LiveProposalRef { id, expires_at });
        match action {
            PauseAction::Pause => {
                self.last_pause_proposal_ts = created_at;
                self.live_pause_proposal = slot;
            }
            PauseAction::Unpause => {
                self.last_unpause_proposal_ts = created_at;
                self.live_unpause_proposal = slot;
            }
        }
    }

    /// Drop the live pointer for `id` once its proposal leaves the live
    /// states.
    pub fn clear_live(&mut self, action: PauseAction, id: u64) {
        let slot = match action {
            PauseAction::Pause => &mut self.live_pause_proposal,
            PauseAction::Unpause => &mut self.live_unpause_proposal,
        };
        if matches!(slot, Some(r) if r.id == id) {
            *slot = None;
        }
    }

    /// Effective pause flag at `now_ts`, accounting for a pause that has
    /// outlived its maximum duration.
    pub fn effective_paused(&self, now_ts: i64) -> bool {
        if !self.transfers_paused {
            return false;
        }
        !(self.config.auto_unpause_enabled && now_ts >= self.auto_unpause_deadline())
    }

    /// Apply the auto-unpause transition if its deadline has passed.
    /// Returns true when a transition was recorded.
    pub fn refresh_pause(&mut self, now_ts: i64) -> bool {
        if self.transfers_paused
            && self.config.auto_unpause_enabled
            && now_ts >= self.auto_unpause_deadline()
        {
            self.transfers_paused = false;
            self.paused_at = 0;
            return true;
        }
        false
    }

    /// Flip the pause flag for an executed proposal.
    pub fn apply_execution(&mut self, action: PauseAction, now_ts: i64) {
        match action {
            PauseAction::Pause => {
                self.transfers_paused = true;
                self.paused_at = now_ts;
            }
            PauseAction::Unpause => {
                self.transfers_paused = false;
                self.paused_at = 0;
            }
        }
    }

    fn auto_unpause_deadline(&self) -> i64 {
        self.paused_at.saturating_add(self.config.max_pause_seconds)
    }
}

/// Outcome of recording an approval or a cancel vote.
pub struct VoteRecord {
    /// False when the signer had already voted (set semantics).
    pub newly_recorded: bool,
    /// True on the vote that crosses the threshold.
    pub threshold_met: bool,
}

/// One pause/unpause proposal PDA.
#[account]
pub struct PauseProposal {
    pub id: u64,
    pub action: PauseAction,
    pub proposer: Pubkey,
    /// Distinct approving signers. The proposer counts as the first.
    pub approvals: Vec<Pubkey>,
    /// Distinct signers voting to cancel; a full quorum cancels.
    pub cancel_votes: Vec<Pubkey>,
    pub created_at: i64,
    /// Set once, when the approval count reaches the quorum threshold.
    pub quorum_reached_at: Option<i64>,
    pub expires_at: i64,
    pub state: ProposalState,
    pub bump: u8,
}

impl PauseProposal {
    pub const SIZE: usize =
        8 +  // id
        1 +  // action
        32 + // proposer
        4 + 32 * MAX_SIGNERS + // approvals
        4 + 32 * MAX_SIGNERS + // cancel_votes
        8 +  // created_at
        9 +  // quorum_reached_at
        8 +  // expires_at
        1 +  // state
        1;   // bump

    pub fn is_live(&self) -> bool {
        matches!(self.state, ProposalState::Open | ProposalState::QuorumReached)
    }

    pub fn has_expired(&self, now_ts: i64) -> bool {
        now_ts > self.expires_at
    }

    pub fn mark_expired(&mut self) {
        self.state = ProposalState::Expired;
    }

    /// Add `signer` to the approval set. Re-approval is a no-op, not an
    /// error. Crossing the quorum threshold records `quorum_reached_at`
    /// and moves the proposal to `QuorumReached`.
    pub fn record_approval(
        &mut self,
        signer: Pubkey,
        quorum_threshold: u8,
        now_ts: i64,
    ) -> Result<VoteRecord, CustodyError> {
        if self.state != ProposalState::Open {
            return Err(CustodyError::ProposalNotOpen);
        }
        if self.approvals.contains(&signer) {
            return Ok(VoteRecord {
                newly_recorded: false,
                threshold_met: false,
            });
        }
        self.approvals.push(signer);
        let threshold_met = self.approvals.len() >= quorum_threshold as usize;
        if threshold_met {
            self.state = ProposalState::QuorumReached;
            self.quorum_reached_at = Some(now_ts);
        }
        Ok(VoteRecord {
            newly_recorded: true,
            threshold_met,
        })
    }

    /// Add `signer` to the cancel set. The threshold is the same quorum
    /// that would execute the proposal.
    pub fn record_cancel_vote(
        &mut self,
        signer: Pubkey,
        quorum_threshold: u8,
    ) -> Result<VoteRecord, CustodyError> {
        if !self.is_live() {
            return Err(CustodyError::ProposalNotLive);
        }
        if self.cancel_votes.contains(&signer) {
            return Ok(VoteRecord {
                newly_recorded: false,
                threshold_met: false,
            });
        }
        self.cancel_votes.push(signer);
        Ok(VoteRecord {
            newly_recorded: true,
            threshold_met: self.cancel_votes.len() >= quorum_threshold as usize,
        })
    }

    /// Gate for execution: quorum first, then the elapsed timelock.
    pub fn check_executable(
        &self,
        timelock_seconds: i64,
        now_ts: i64,
    ) -> Result<(), CustodyError> {
        if self.state != ProposalState::QuorumReached {
            return Err(CustodyError::ProposalNotReady);
        }
        let reached_at = self.quorum_reached_at.ok_or(CustodyError::ProposalNotReady)?;
        if now_ts < reached_at.saturating_add(timelock_seconds) {
            return Err(CustodyError::TimelockNotElapsed);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    fn signers(n: usize) -> Vec<Pubkey> {
        (0..n).map(|_| Pubkey::new_unique()).collect()
    }

    fn config(signers: Vec<Pubkey>, quorum: u8) -> GovernanceConfig {
        GovernanceConfig {
            signers,
            quorum_threshold: quorum,
            timelock_seconds: SECONDS_PER_DAY,
            max_pause_seconds: 14 * SECONDS_PER_DAY,
            proposal_lifetime_seconds: 3 * SECONDS_PER_DAY,
            proposal_cooldown_seconds: 6 * 3_600,
            auto_unpause_enabled: true,
            allow_emergency_bypass: true,
            emergency_authority: Pubkey::new_unique(),
        }
    }

    fn governance(cfg: GovernanceConfig) -> GovernanceState {
        GovernanceState {
            config: cfg,
            next_proposal_id: 0,
            last_pause_proposal_ts: 0,
            last_unpause_proposal_ts: 0,
            live_pause_proposal: None,
            live_unpause_proposal: None,
            transfers_paused: false,
            paused_at: 0,
            bump: 255,
        }
    }

    fn proposal(action: PauseAction, proposer: Pubkey, created_at: i64, lifetime: i64) -> PauseProposal {
        PauseProposal {
            id: 0,
            action,
            proposer,
            approvals: vec![proposer],
            cancel_votes: vec![],
            created_at,
            quorum_reached_at: None,
            expires_at: created_at + lifetime,
            state: ProposalState::Open,
            bump: 255,
        }
    }

    #[test]
    fn quorum_then_timelock_gates_execution() {
        // 5 signers, quorum 3, timelock 86400: proposer plus two
        // approvals reach quorum at t=0; execution opens exactly at
        // t=86400.
        let s = signers(5);
        let cfg = config(s.clone(), 3);
        let mut gov = governance(cfg);
        let mut p = proposal(PauseAction::Pause, s[0], 0, gov.config.proposal_lifetime_seconds);

        assert!(matches!(
            p.check_executable(gov.config.timelock_seconds, 0),
            Err(CustodyError::ProposalNotReady)
        ));

        let r = p.record_approval(s[1], 3, 0).unwrap();
        assert!(r.newly_recorded && !r.threshold_met);
        let r = p.record_approval(s[2], 3, 0).unwrap();
        assert!(r.newly_recorded && r.threshold_met);
        assert_eq!(p.state, ProposalState::QuorumReached);
        assert_eq!(p.quorum_reached_at, Some(0));

        assert!(matches!(
            p.check_executable(86_400, 86_399),
            Err(CustodyError::TimelockNotElapsed)
        ));
        assert!(p.check_executable(86_400, 86_400).is_ok());

        gov.apply_execution(p.action, 86_400);
        assert!(gov.transfers_paused);
        assert_eq!(gov.paused_at, 86_400);
    }

    #[test]
    fn reapproval_is_a_noop() {
        let s = signers(5);
        let mut p = proposal(PauseAction::Pause, s[0], 0, SECONDS_PER_DAY);
        let r = p.record_approval(s[0], 3, 10).unwrap();
        assert!(!r.newly_recorded);
        assert_eq!(p.approvals.len(), 1);
        p.record_approval(s[1], 3, 10).unwrap();
        let r = p.record_approval(s[1], 3, 20).unwrap();
        assert!(!r.newly_recorded);
        assert_eq!(p.approvals.len(), 2);
        assert_eq!(p.state, ProposalState::Open);
    }

    #[test]
    fn no_approvals_past_open() {
        let s = signers(5);
        let mut p = proposal(PauseAction::Pause, s[0], 0, SECONDS_PER_DAY);
        p.record_approval(s[1], 2, 0).unwrap();
        assert_eq!(p.state, ProposalState::QuorumReached);
        assert!(matches!(
            p.record_approval(s[2], 2, 0),
            Err(CustodyError::ProposalNotOpen)
        ));
    }

    #[test]
    fn expired_proposal_never_executes() {
        let s = signers(5);
        let lifetime = 3 * SECONDS_PER_DAY;
        let mut p = proposal(PauseAction::Pause, s[0], 0, lifetime);
        p.record_approval(s[1], 2, 0).unwrap();

        let late = lifetime + 1;
        assert!(p.has_expired(late));
        // The touching call records the terminal transition.
        p.mark_expired();
        assert_eq!(p.state, ProposalState::Expired);
        assert!(matches!(
            p.check_executable(0, late),
            Err(CustodyError::ProposalNotReady)
        ));
        assert!(matches!(
            p.record_approval(s[2], 2, late),
            Err(CustodyError::ProposalNotOpen)
        ));
    }

    #[test]
    fn cooldown_spaces_same_action_proposals() {
        let s = signers(5);
        let mut gov = governance(config(s, 3));
        let cooldown = gov.config.proposal_cooldown_seconds;

        assert!(gov.check_cooldown(PauseAction::Pause, 100).is_ok());
        gov.note_proposal(PauseAction::Pause, 0, 100, 100 + 3 * SECONDS_PER_DAY);

        assert!(matches!(
            gov.check_cooldown(PauseAction::Pause, 100 + cooldown - 1),
            Err(CustodyError::CooldownActive)
        ));
        assert!(gov.check_cooldown(PauseAction::Pause, 100 + cooldown).is_ok());
        // The other action keeps its own clock.
        assert!(gov.check_cooldown(PauseAction::Unpause, 101).is_ok());
    }

    #[test]
    fn live_proposals_conflict_until_expiry() {
        let s = signers(5);
        let mut gov = governance(config(s, 3));
        let expires = 100 + gov.config.proposal_lifetime_seconds;
        gov.note_proposal(PauseAction::Pause, 7, 100, expires);

        assert!(matches!(
            gov.check_no_conflict(expires),
            Err(CustodyError::ConflictingProposal)
        ));
        // A stale pointer stops conflicting once the proposal expires.
        assert!(gov.check_no_conflict(expires + 1).is_ok());

        gov.clear_live(PauseAction::Pause, 7);
        assert!(gov.live_pause_proposal.is_none());
        assert!(gov.check_no_conflict(200).is_ok());
    }

    #[test]
    fn clear_live_ignores_other_ids() {
        let s = signers(5);
        let mut gov = governance(config(s, 3));
        gov.note_proposal(PauseAction::Unpause, 3, 100, 200);
        gov.clear_live(PauseAction::Unpause, 4);
        assert!(gov.live_unpause_proposal.is_some());
    }

    #[test]
    fn pause_auto_expires_lazily() {
        let s = signers(5);
        let mut gov = governance(config(s, 3));
        gov.apply_execution(PauseAction::Pause, 1_000);
        let deadline = 1_000 + gov.config.max_pause_seconds;

        assert!(gov.effective_paused(deadline - 1));
        assert!(!gov.effective_paused(deadline));

        assert!(!gov.refresh_pause(deadline - 1));
        assert!(gov.transfers_paused);
        assert!(gov.refresh_pause(deadline));
        assert!(!gov.transfers_paused);
        assert_eq!(gov.paused_at, 0);
        // Already transitioned: a second refresh records nothing.
        assert!(!gov.refresh_pause(deadline + 1));
    }

    #[test]
    fn pause_holds_without_auto_unpause() {
        let s = signers(5);
        let mut cfg = config(s, 3);
        cfg.auto_unpause_enabled = false;
        let mut gov = governance(cfg);
        gov.apply_execution(PauseAction::Pause, 1_000);
        let far = 1_000 + 100 * SECONDS_PER_DAY;
        assert!(gov.effective_paused(far));
        assert!(!gov.refresh_pause(far));
        assert!(gov.transfers_paused);
    }

    #[test]
    fn cancel_votes_accumulate_to_quorum() {
        let s = signers(5);
        let mut p = proposal(PauseAction::Unpause, s[0], 0, SECONDS_PER_DAY);

        let r = p.record_cancel_vote(s[1], 3).unwrap();
        assert!(r.newly_recorded && !r.threshold_met);
        // Duplicate cancel vote is a no-op.
        let r = p.record_cancel_vote(s[1], 3).unwrap();
        assert!(!r.newly_recorded);
        let r = p.record_cancel_vote(s[2], 3).unwrap();
        assert!(!r.threshold_met);
        let r = p.record_cancel_vote(s[3], 3).unwrap();
        assert!(r.threshold_met);
    }

    #[test]
    fn unpause_execution_clears_pause() {
        let s = signers(5);
        let mut gov = governance(config(s, 3));
        gov.apply_execution(PauseAction::Pause, 500);
        assert!(gov.transfers_paused);
        gov.apply_execution(PauseAction::Unpause, 900);
        assert!(!gov.transfers_paused);
        assert_eq!(gov.paused_at, 0);
        assert!(!gov.effective_paused(901));
    }
}
