use anchor_lang::prelude::*;

/// Custom error codes for the custody and pause-governance program.
#[error_code]
pub enum CustodyError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: not an authorized governance signer")]
    UnauthorizedSigner,

    #[msg("Unauthorized: admin or beneficiary signature required")]
    UnauthorizedRelease,

    #[msg("Unauthorized: emergency authority signature required")]
    UnauthorizedEmergency,

    #[msg("Unauthorized: only the proposer or a quorum of signers may cancel")]
    UnauthorizedCancel,

    #[msg("Emergency bypass is disabled in the governance config")]
    EmergencyBypassDisabled,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid schedule parameters")]
    InvalidParameters,

    #[msg("Vesting schedule already exists for this beneficiary")]
    DuplicateSchedule,

    #[msg("Vesting schedule is deactivated")]
    ScheduleInactive,

    #[msg("No releasable amount at the current time")]
    NothingToRelease,

    #[msg("Admin wallet is already configured")]
    AlreadyConfigured,

    #[msg("Admin wallet is not configured for this beneficiary")]
    NotConfigured,

    #[msg("Immediate release was already processed")]
    AlreadyReleased,

    #[msg("Proposal cooldown for this action is still active")]
    CooldownActive,

    #[msg("A live proposal already exists for a pause action")]
    ConflictingProposal,

    #[msg("Proposal not found")]
    ProposalNotFound,

    #[msg("Proposal is not open for approvals")]
    ProposalNotOpen,

    #[msg("Proposal is not open or quorum-reached")]
    ProposalNotLive,

    #[msg("Proposal has not reached quorum")]
    ProposalNotReady,

    #[msg("Proposal has expired")]
    ProposalExpired,

    #[msg("Timelock has not elapsed since quorum")]
    TimelockNotElapsed,

    #[msg("Token transfers are paused")]
    TransfersPaused,

    #[msg("Signer count outside configured bounds")]
    InvalidSignerCount,

    #[msg("Signer address is invalid")]
    InvalidSignerAddress,

    #[msg("Duplicate signer address")]
    DuplicateSigner,

    #[msg("Quorum threshold outside allowed range")]
    InvalidQuorum,

    #[msg("Timelock duration outside configured bounds")]
    InvalidTimelock,

    #[msg("Max pause duration outside configured bounds")]
    InvalidPauseDuration,

    #[msg("Proposal lifetime outside configured bounds")]
    InvalidProposalLifetime,

    #[msg("Proposal cooldown outside configured bounds")]
    InvalidProposalCooldown,

    #[msg("Emergency authority is invalid")]
    InvalidEmergencyAuthority,

    #[msg("Released and burned amounts would exceed the schedule total")]
    ConservationViolated,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for beneficiary")]
    InvalidBeneficiaryAta,

    #[msg("Insufficient treasury balance")]
    InsufficientBalance,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
