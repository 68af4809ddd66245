//! Governance config validation.
//!
//! Rules run in a fixed order and the first violation wins, so callers
//! always see a deterministic error for a given config.

use crate::constants::{
    MAX_PAUSE_DURATION_SECONDS, MAX_PROPOSAL_COOLDOWN_SECONDS, MAX_PROPOSAL_LIFETIME_SECONDS,
    MAX_SIGNERS, MAX_TIMELOCK_SECONDS, MIN_PAUSE_DURATION_SECONDS,
    MIN_PROPOSAL_COOLDOWN_SECONDS, MIN_PROPOSAL_LIFETIME_SECONDS, MIN_QUORUM, MIN_SIGNERS,
    MIN_TIMELOCK_SECONDS,
};
use crate::error::CustodyError;
use crate::state::GovernanceConfig;
use anchor_lang::prelude::Pubkey;

/// Bounds the validator checks a config against.
#[derive(Clone, Copy, Debug)]
pub struct GovernanceBounds {
    pub min_signers: usize,
    pub max_signers: usize,
    pub min_timelock_seconds: i64,
    pub max_timelock_seconds: i64,
    pub min_pause_seconds: i64,
    pub max_pause_seconds: i64,
    pub min_lifetime_seconds: i64,
    pub max_lifetime_seconds: i64,
    pub min_cooldown_seconds: i64,
    pub max_cooldown_seconds: i64,
}

impl Default for GovernanceBounds {
    fn default() -> Self {
        Self {
            min_signers: MIN_SIGNERS,
            max_signers: MAX_SIGNERS,
            min_timelock_seconds: MIN_TIMELOCK_SECONDS,
            max_timelock_seconds: MAX_TIMELOCK_SECONDS,
            min_pause_seconds: MIN_PAUSE_DURATION_SECONDS,
            max_pause_seconds: MAX_PAUSE_DURATION_SECONDS,
            min_lifetime_seconds: MIN_PROPOSAL_LIFETIME_SECONDS,
            max_lifetime_seconds: MAX_PROPOSAL_LIFETIME_SECONDS,
            min_cooldown_seconds: MIN_PROPOSAL_COOLDOWN_SECONDS,
            max_cooldown_seconds: MAX_PROPOSAL_COOLDOWN_SECONDS,
        }
    }
}

/// Validation order: signer count, signer addresses, quorum, timelock,
/// max pause duration, proposal lifetime, proposal cooldown, emergency
/// authority.
pub fn validate_governance_config(
    config: &GovernanceConfig,
    bounds: &GovernanceBounds,
) -> Result<(), CustodyError> {
    let count = config.signers.len();
    if count < bounds.min_signers || count > bounds.max_signers {
        return Err(CustodyError::InvalidSignerCount);
    }
    for (i, signer) in config.signers.iter().enumerate() {
        if *signer == Pubkey::default() {
            return Err(CustodyError::InvalidSignerAddress);
        }
        if config.signers[..i].contains(signer) {
            return Err(CustodyError::DuplicateSigner);
        }
    }
    if config.quorum_threshold < MIN_QUORUM || config.quorum_threshold as usize > count {
        return Err(CustodyError::InvalidQuorum);
    }
    if config.timelock_seconds < bounds.min_timelock_seconds
        || config.timelock_seconds > bounds.max_timelock_seconds
    {
        return Err(CustodyError::InvalidTimelock);
    }
    if config.max_pause_seconds < bounds.min_pause_seconds
        || config.max_pause_seconds > bounds.max_pause_seconds
    {
        return Err(CustodyError::InvalidPauseDuration);
    }
    if config.proposal_lifetime_seconds < bounds.min_lifetime_seconds
        || config.proposal_lifetime_seconds > bounds.max_lifetime_seconds
    {
        return Err(CustodyError::InvalidProposalLifetime);
    }
    if config.proposal_cooldown_seconds < bounds.min_cooldown_seconds
        || config.proposal_cooldown_seconds > bounds.max_cooldown_seconds
    {
        return Err(CustodyError::InvalidProposalCooldown);
    }
    if config.allow_emergency_bypass && config.emergency_authority == Pubkey::default() {
        return Err(CustodyError::InvalidEmergencyAuthority);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    fn valid_config(signer_count: usize, quorum: u8) -> GovernanceConfig {
        GovernanceConfig {
            signers: (0..signer_count).map(|_| Pubkey::new_unique()).collect(),
            quorum_threshold: quorum,
            timelock_seconds: SECONDS_PER_DAY,
            max_pause_seconds: 14 * SECONDS_PER_DAY,
            proposal_lifetime_seconds: 3 * SECONDS_PER_DAY,
            proposal_cooldown_seconds: 6 * 3_600,
            auto_unpause_enabled: true,
            allow_emergency_bypass: false,
            emergency_authority: Pubkey::default(),
        }
    }

    #[test]
    fn accepts_a_sound_config() {
        let cfg = valid_config(5, 3);
        assert!(validate_governance_config(&cfg, &GovernanceBounds::default()).is_ok());
    }

    #[test]
    fn signer_count_checked_before_quorum() {
        // One signer with quorum 2 violates both rules; the signer-count
        // rule must win.
        let cfg = valid_config(1, 2);
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::InvalidSignerCount)
        ));
    }

    #[test]
    fn rejects_default_signer_address() {
        let mut cfg = valid_config(5, 3);
        cfg.signers[2] = Pubkey::default();
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::InvalidSignerAddress)
        ));
    }

    #[test]
    fn rejects_duplicate_signers() {
        let mut cfg = valid_config(5, 3);
        cfg.signers[3] = cfg.signers[1];
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::DuplicateSigner)
        ));
    }

    #[test]
    fn quorum_must_be_reachable_and_plural() {
        let cfg = valid_config(5, 1);
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::InvalidQuorum)
        ));
        let cfg = valid_config(5, 6);
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::InvalidQuorum)
        ));
        let cfg = valid_config(5, 5);
        assert!(validate_governance_config(&cfg, &GovernanceBounds::default()).is_ok());
    }

    #[test]
    fn timing_bounds_each_report_their_own_error() {
        let bounds = GovernanceBounds::default();

        let mut cfg = valid_config(5, 3);
        cfg.timelock_seconds = 0;
        assert!(matches!(
            validate_governance_config(&cfg, &bounds),
            Err(CustodyError::InvalidTimelock)
        ));

        let mut cfg = valid_config(5, 3);
        cfg.max_pause_seconds = 0;
        assert!(matches!(
            validate_governance_config(&cfg, &bounds),
            Err(CustodyError::InvalidPauseDuration)
        ));

        let mut cfg = valid_config(5, 3);
        cfg.proposal_lifetime_seconds = 100 * SECONDS_PER_DAY;
        assert!(matches!(
            validate_governance_config(&cfg, &bounds),
            Err(CustodyError::InvalidProposalLifetime)
        ));

        let mut cfg = valid_config(5, 3);
        cfg.proposal_cooldown_seconds = 0;
        assert!(matches!(
            validate_governance_config(&cfg, &bounds),
            Err(CustodyError::InvalidProposalCooldown)
        ));
    }

    #[test]
    fn emergency_bypass_requires_an_authority() {
        let mut cfg = valid_config(5, 3);
        cfg.allow_emergency_bypass = true;
        assert!(matches!(
            validate_governance_config(&cfg, &GovernanceBounds::default()),
            Err(CustodyError::InvalidEmergencyAuthority)
        ));
        cfg.emergency_authority = Pubkey::new_unique();
        assert!(validate_governance_config(&cfg, &GovernanceBounds::default()).is_ok());
    }
}
