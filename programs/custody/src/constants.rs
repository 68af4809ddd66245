//! Program-wide constants and governance validator bounds.

/// Basis-point denominator (100% == 10_000 bps).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Fixed month length used by the vesting math (30 days).
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Authorized-signer set bounds.
pub const MIN_SIGNERS: usize = 3;
pub const MAX_SIGNERS: usize = 10;

/// A single signer must never be able to decide a pause.
pub const MIN_QUORUM: u8 = 2;

/// Bounds for the delay between quorum and execution.
pub const MIN_TIMELOCK_SECONDS: i64 = 3_600;
pub const MAX_TIMELOCK_SECONDS: i64 = 7 * SECONDS_PER_DAY;

/// Bounds for the auto-unpause deadline after an executed pause.
pub const MIN_PAUSE_DURATION_SECONDS: i64 = SECONDS_PER_DAY;
pub const MAX_PAUSE_DURATION_SECONDS: i64 = 30 * SECONDS_PER_DAY;

/// Bounds for how long an unexecuted proposal stays actionable.
pub const MIN_PROPOSAL_LIFETIME_SECONDS: i64 = SECONDS_PER_DAY;
pub const MAX_PROPOSAL_LIFETIME_SECONDS: i64 = 14 * SECONDS_PER_DAY;

/// Bounds for the minimum spacing between same-action proposals.
pub const MIN_PROPOSAL_COOLDOWN_SECONDS: i64 = 3_600;
pub const MAX_PROPOSAL_COOLDOWN_SECONDS: i64 = 7 * SECONDS_PER_DAY;

/// Default immediate-release fraction for admin wallets (10%).
pub const DEFAULT_IMMEDIATE_RELEASE_BPS: u16 = 1_000;
