use anchor_lang::prelude::*;

use crate::error::CustodyError;
use crate::state::{CustodyState, GovernanceConfig, GovernanceState};
use crate::utils::validation::{validate_governance_config, GovernanceBounds};

/// Replaces the governance config wholesale; partial mutation is not
/// offered, so every change is auditable as a single diff.
pub fn reconfigure_governance(
    ctx: Context<ReconfigureGovernance>,
    config: GovernanceConfig,
) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.custody_state.admin,
        CustodyError::UnauthorizedAdmin
    );
    validate_governance_config(&config, &GovernanceBounds::default())?;

    let gov = &mut ctx.accounts.governance_state;
    gov.config = config;

    emit!(GovernanceReconfigured {
        signer_count: gov.config.signers.len() as u8,
        quorum_threshold: gov.config.quorum_threshold,
        timelock_seconds: gov.config.timelock_seconds,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReconfigureGovernance<'info> {
    #[account(seeds = [b"custody"], bump = custody_state.bump)]
    pub custody_state: Account<'info, CustodyState>,

    #[account(mut, seeds = [b"governance"], bump = governance_state.bump)]
    pub governance_state: Account<'info, GovernanceState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct GovernanceReconfigured {
    pub signer_count: u8,
    pub quorum_threshold: u8,
    pub timelock_seconds: i64,
}
