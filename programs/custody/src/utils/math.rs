//! Fixed-month vesting arithmetic.
//!
//! All intermediate multiplication widens to u128; every narrowing is
//! checked. Entitlement is a pure function of (total, rate, elapsed
//! months), so repeated calls can only ever pay out the newly crossed
//! delta, never a duplicate.

use crate::constants::{BPS_DENOMINATOR, SECONDS_PER_MONTH};
use crate::error::CustodyError;

/// Whole months elapsed since `start_ts`, floor division over the fixed
/// month length. Returns 0 before start.
pub fn months_elapsed(now_ts: i64, start_ts: i64) -> u64 {
    if now_ts <= start_ts {
        return 0;
    }
    ((now_ts - start_ts) / SECONDS_PER_MONTH) as u64
}

/// Number of whole months in a vesting period.
pub fn max_months(vesting_seconds: i64) -> u64 {
    if vesting_seconds <= 0 {
        return 0;
    }
    (vesting_seconds / SECONDS_PER_MONTH) as u64
}

/// Cumulative gross entitlement after `months` elapsed months.
///
/// Once the vesting period is complete the full total is entitled,
/// regardless of whether `rate_bps * months` sums to 100%; the final
/// month picks up any rounding or rate remainder.
pub fn gross_entitlement(
    total: u64,
    rate_bps: u16,
    months: u64,
    max_months: u64,
) -> Result<u64, CustodyError> {
    if months >= max_months {
        return Ok(total);
    }
    let raw = (total as u128)
        .checked_mul(rate_bps as u128)
        .ok_or(CustodyError::MathOverflow)?
        .checked_mul(months as u128)
        .ok_or(CustodyError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    let capped = raw.min(total as u128);
    u64::try_from(capped).map_err(|_| CustodyError::MathOverflow)
}

/// `bps` fraction of `amount`, rounded down.
pub fn bps_portion(amount: u64, bps: u16) -> Result<u64, CustodyError> {
    let v = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(CustodyError::MathOverflow)?
        / (BPS_DENOMINATOR as u128);
    u64::try_from(v).map_err(|_| CustodyError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn months_floor_at_boundaries() {
        let start = 1_700_000_000;
        assert_eq!(months_elapsed(start, start), 0);
        assert_eq!(months_elapsed(start + SECONDS_PER_MONTH - 1, start), 0);
        assert_eq!(months_elapsed(start + SECONDS_PER_MONTH, start), 1);
        assert_eq!(months_elapsed(start + 3 * SECONDS_PER_MONTH + 5, start), 3);
        // Before start never underflows.
        assert_eq!(months_elapsed(start - 100, start), 0);
    }

    #[test]
    fn entitlement_is_linear_then_capped() {
        let total = 1_000_000u64;
        let max = 40;
        // 3% per month.
        assert_eq!(gross_entitlement(total, 300, 0, max).unwrap(), 0);
        assert_eq!(gross_entitlement(total, 300, 1, max).unwrap(), 30_000);
        assert_eq!(gross_entitlement(total, 300, 10, max).unwrap(), 300_000);
        // 34 months * 3% > 100%: capped at total even mid-period.
        assert_eq!(gross_entitlement(total, 300, 35, max).unwrap(), total);
    }

    #[test]
    fn entitlement_completes_at_period_end() {
        // 3%/month over 12 months only sums to 36%; the period end still
        // entitles the full total.
        let total = 1_000_000u64;
        assert_eq!(gross_entitlement(total, 300, 11, 12).unwrap(), 330_000);
        assert_eq!(gross_entitlement(total, 300, 12, 12).unwrap(), total);
        assert_eq!(gross_entitlement(total, 300, 500, 12).unwrap(), total);
    }

    #[test]
    fn monthly_release_with_burn_split() {
        // 300M schedule, 3%/month, 10% burn: one month in, the gross is
        // 9M, of which 900k burns and 8.1M goes to the beneficiary.
        let total = 300_000_000u64;
        let gross = gross_entitlement(total, 300, 1, 34).unwrap();
        assert_eq!(gross, 9_000_000);
        let burn = bps_portion(gross, 1_000).unwrap();
        assert_eq!(burn, 900_000);
        assert_eq!(gross - burn, 8_100_000);
    }

    #[test]
    fn bps_portion_rounds_down() {
        assert_eq!(bps_portion(0, 10_000).unwrap(), 0);
        assert_eq!(bps_portion(999, 10_000).unwrap(), 999);
        assert_eq!(bps_portion(1_000, 1).unwrap(), 0);
        assert_eq!(bps_portion(u64::MAX, 10_000).unwrap(), u64::MAX);
        assert_eq!(bps_portion(10_001, 5_000).unwrap(), 5_000);
    }

    #[test]
    fn max_months_floor() {
        assert_eq!(max_months(0), 0);
        assert_eq!(max_months(SECONDS_PER_MONTH - 1), 0);
        assert_eq!(max_months(12 * SECONDS_PER_MONTH), 12);
    }
}
