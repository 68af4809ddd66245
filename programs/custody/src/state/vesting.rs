use anchor_lang::prelude::*;
use core::result::Result;

use crate::constants::BPS_DENOMINATOR;
use crate::error::CustodyError;
use crate::utils::math;

/// Singleton custody state PDA. Owns the escrow vault and the burn vault.
#[account]
pub struct CustodyState {
    /// Token mint under custody.
    pub mint: Pubkey,
    /// Operational authority for vesting administration.
    pub admin: Pubkey,
    /// Fraction of an admin wallet allocation released up front.
    pub immediate_release_bps: u16,
    /// Sum of all escrowed allocations.
    pub total_allocated: u64,
    /// Sum of all amounts credited to beneficiaries.
    pub total_released: u64,
    /// Sum of all amounts diverted to the burn vault.
    pub total_burned: u64,
    pub bump: u8,
}

impl CustodyState {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        2 +  // immediate_release_bps
        8 +  // total_allocated
        8 +  // total_released
        8 +  // total_burned
        1;   // bump
}

/// Per-beneficiary vesting schedule PDA.
///
/// `released_amount + burned_amount` never exceeds `total_amount` and
/// both counters only grow. Schedules are never deleted; deactivation
/// flips `active` and keeps the record as history.
#[account]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Total tokens ever allocated to this schedule. Immutable.
    pub total_amount: u64,
    /// Cumulative amount credited to the beneficiary.
    pub released_amount: u64,
    /// Cumulative amount diverted to the burn vault.
    pub burned_amount: u64,
    /// Schedule creation timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// No release before `start_ts + cliff_seconds`.
    pub cliff_seconds: i64,
    /// Total period over which monthly releases occur.
    pub vesting_seconds: i64,
    /// Basis points of `total_amount` unlocked per elapsed month.
    pub release_rate_bps: u16,
    /// Basis points of each release diverted to the burn vault.
    pub burn_rate_bps: u16,
    /// Paired with an AdminWalletConfig (two-phase release).
    pub is_admin: bool,
    pub active: bool,
    pub bump: u8,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // total_amount
        8 +  // released_amount
        8 +  // burned_amount
        8 +  // start_ts
        8 +  // cliff_seconds
        8 +  // vesting_seconds
        2 +  // release_rate_bps
        2 +  // burn_rate_bps
        1 +  // is_admin
        1 +  // active
        1;   // bump

    /// Newly releasable gross amount at `now_ts`.
    ///
    /// Zero before the cliff. Afterwards, the cumulative entitlement for
    /// the elapsed whole months, minus everything already settled
    /// (released or burned). Calling twice at the same instant therefore
    /// yields zero the second time.
    pub fn releasable_amount(&self, now_ts: i64) -> Result<u64, CustodyError> {
        let cliff_end = self
            .start_ts
            .checked_add(self.cliff_seconds)
            .ok_or(CustodyError::MathOverflow)?;
        if now_ts < cliff_end {
            return Ok(0);
        }
        let months = math::months_elapsed(now_ts, self.start_ts);
        let max_months = math::max_months(self.vesting_seconds);
        let gross =
            math::gross_entitlement(self.total_amount, self.release_rate_bps, months, max_months)?;
        let settled = self
            .released_amount
            .checked_add(self.burned_amount)
            .ok_or(CustodyError::MathOverflow)?;
        Ok(gross.saturating_sub(settled))
    }

    /// Record a settled release. The two counters only grow, and their
    /// sum must stay within `total_amount`.
    pub fn settle(&mut self, to_beneficiary: u64, burned: u64) -> Result<(), CustodyError> {
        self.released_amount = self
            .released_amount
            .checked_add(to_beneficiary)
            .ok_or(CustodyError::MathOverflow)?;
        self.burned_amount = self
            .burned_amount
            .checked_add(burned)
            .ok_or(CustodyError::MathOverflow)?;
        let settled = self
            .released_amount
            .checked_add(self.burned_amount)
            .ok_or(CustodyError::MathOverflow)?;
        if settled > self.total_amount {
            return Err(CustodyError::ConservationViolated);
        }
        Ok(())
    }
}

/// Per-admin-wallet config PDA, paired 1:1 with an `is_admin` schedule.
#[account]
pub struct AdminWalletConfig {
    pub beneficiary: Pubkey,
    /// Total allocation across both tranches.
    pub total_allocation: u64,
    /// One-time up-front tranche (no burn split).
    pub immediate_release_amount: u64,
    /// Remainder, equal to the paired schedule's `total_amount`.
    pub locked_amount: u64,
    /// Settable exactly once.
    pub immediate_released: bool,
    pub bump: u8,
}

impl AdminWalletConfig {
    pub const SIZE: usize =
        32 + // beneficiary
        8 +  // total_allocation
        8 +  // immediate_release_amount
        8 +  // locked_amount
        1 +  // immediate_released
        1;   // bump

    /// Split a total allocation into (immediate, locked) tranches.
    pub fn split(total_allocation: u64, immediate_bps: u16) -> Result<(u64, u64), CustodyError> {
        if immediate_bps as u64 > BPS_DENOMINATOR {
            return Err(CustodyError::InvalidParameters);
        }
        let immediate = math::bps_portion(total_allocation, immediate_bps)?;
        let locked = total_allocation
            .checked_sub(immediate)
            .ok_or(CustodyError::MathOverflow)?;
        Ok((immediate, locked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_MONTH;

    fn schedule(total: u64, cliff_months: i64, vesting_months: i64, rate: u16, burn: u16) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::new_unique(),
            total_amount: total,
            released_amount: 0,
            burned_amount: 0,
            start_ts: 1_700_000_000,
            cliff_seconds: cliff_months * SECONDS_PER_MONTH,
            vesting_seconds: vesting_months * SECONDS_PER_MONTH,
            release_rate_bps: rate,
            burn_rate_bps: burn,
            is_admin: false,
            active: true,
            bump: 255,
        }
    }

    #[test]
    fn nothing_releasable_before_cliff() {
        let s = schedule(1_000_000, 3, 12, 300, 0);
        let cliff_end = s.start_ts + s.cliff_seconds;
        assert_eq!(s.releasable_amount(s.start_ts).unwrap(), 0);
        assert_eq!(s.releasable_amount(cliff_end - 1).unwrap(), 0);
        // At the cliff, three whole months have elapsed.
        assert_eq!(s.releasable_amount(cliff_end).unwrap(), 90_000);
    }

    #[test]
    fn settled_amounts_never_repay() {
        let mut s = schedule(300_000_000, 0, 34, 300, 1_000);
        let t1 = s.start_ts + SECONDS_PER_MONTH;
        let gross = s.releasable_amount(t1).unwrap();
        assert_eq!(gross, 9_000_000);
        s.settle(8_100_000, 900_000).unwrap();
        // Same instant again: the delta is fully settled.
        assert_eq!(s.releasable_amount(t1).unwrap(), 0);
        // One more month unlocks exactly one more tranche.
        let t2 = s.start_ts + 2 * SECONDS_PER_MONTH;
        assert_eq!(s.releasable_amount(t2).unwrap(), 9_000_000);
    }

    #[test]
    fn full_amount_entitled_at_vesting_end() {
        let mut s = schedule(1_000_000, 0, 12, 300, 0);
        let end = s.start_ts + s.vesting_seconds;
        assert_eq!(s.releasable_amount(end - 1).unwrap(), 330_000);
        assert_eq!(s.releasable_amount(end).unwrap(), 1_000_000);
        s.settle(330_000, 0).unwrap();
        assert_eq!(s.releasable_amount(end).unwrap(), 670_000);
        s.settle(670_000, 0).unwrap();
        // Conservation: released + burned == total, nothing left.
        assert_eq!(s.released_amount + s.burned_amount, s.total_amount);
        assert_eq!(s.releasable_amount(end + SECONDS_PER_MONTH).unwrap(), 0);
    }

    #[test]
    fn settle_rejects_overdraw() {
        let mut s = schedule(100, 0, 12, 10_000, 0);
        assert!(matches!(
            s.settle(90, 20),
            Err(CustodyError::ConservationViolated)
        ));
    }

    #[test]
    fn admin_split_ten_percent() {
        let (immediate, locked) = AdminWalletConfig::split(10_000_000, 1_000).unwrap();
        assert_eq!(immediate, 1_000_000);
        assert_eq!(locked, 9_000_000);
    }

    #[test]
    fn admin_split_rejects_excess_bps() {
        assert!(matches!(
            AdminWalletConfig::split(1_000, 10_001),
            Err(CustodyError::InvalidParameters)
        ));
    }
}
