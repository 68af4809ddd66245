use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{GovernanceConfig, PauseAction};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod custody {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        immediate_release_bps: u16,
        config: GovernanceConfig,
    ) -> Result<()> {
        instructions::initialize::initialize(ctx, immediate_release_bps, config)
    }

    pub fn create_schedule(
        ctx: Context<CreateSchedule>,
        beneficiary: Pubkey,
        total_amount: u64,
        cliff_seconds: i64,
        vesting_seconds: i64,
        release_rate_bps: u16,
        burn_rate_bps: u16,
    ) -> Result<()> {
        instructions::create_schedule::create_schedule(
            ctx,
            beneficiary,
            total_amount,
            cliff_seconds,
            vesting_seconds,
            release_rate_bps,
            burn_rate_bps,
        )
    }

    pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
        instructions::release::release(ctx, beneficiary)
    }

    pub fn configure_admin_wallet(
        ctx: Context<ConfigureAdminWallet>,
        beneficiary: Pubkey,
        total_allocation: u64,
        cliff_seconds: i64,
        vesting_seconds: i64,
        release_rate_bps: u16,
        burn_rate_bps: u16,
    ) -> Result<()> {
        instructions::configure_admin_wallet::configure_admin_wallet(
            ctx,
            beneficiary,
            total_allocation,
            cliff_seconds,
            vesting_seconds,
            release_rate_bps,
            burn_rate_bps,
        )
    }

    pub fn process_initial_release(
        ctx: Context<ProcessInitialRelease>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::process_initial_release::process_initial_release(ctx, beneficiary)
    }

    pub fn deactivate_schedule(
        ctx: Context<DeactivateSchedule>,
        beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::deactivate_schedule::deactivate_schedule(ctx, beneficiary)
    }

    pub fn propose_pause(ctx: Context<ProposePause>, action: PauseAction) -> Result<()> {
        instructions::propose_pause::propose_pause(ctx, action)
    }

    pub fn approve_pause(ctx: Context<ApprovePause>, proposal_id: u64) -> Result<()> {
        instructions::approve_pause::approve_pause(ctx, proposal_id)
    }

    pub fn execute_pause(ctx: Context<ExecutePause>, proposal_id: u64) -> Result<()> {
        instructions::execute_pause::execute_pause(ctx, proposal_id)
    }

    pub fn cancel_pause(ctx: Context<CancelPause>, proposal_id: u64) -> Result<()> {
        instructions::cancel_pause::cancel_pause(ctx, proposal_id)
    }

    pub fn emergency_pause(ctx: Context<EmergencyPause>) -> Result<()> {
        instructions::emergency_pause::emergency_pause(ctx)
    }

    pub fn reconfigure_governance(
        ctx: Context<ReconfigureGovernance>,
        config: GovernanceConfig,
    ) -> Result<()> {
        instructions::reconfigure_governance::reconfigure_governance(ctx, config)
    }

    pub fn sync_pause_state(ctx: Context<SyncPauseState>) -> Result<()> {
        instructions::sync_pause_state::sync_pause_state(ctx)
    }

    pub fn emit_release_quote(ctx: Context<EmitReleaseQuote>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_release_quote::emit_release_quote(ctx, beneficiary)
    }
}
