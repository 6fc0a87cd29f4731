#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::instructions::utils::*;
use crate::state::*;

/// Event emitted when the registry is created
#[event]
pub struct RegistryInitialized {
    pub authority: Pubkey,
    pub fee_lamports: u64,
    pub timestamp: i64,
}

/// Account constraints for the registry initialization instruction
///
/// Sets up the singleton registry with the signer as authority. It can only
/// be executed once: the `init` constraint fails if the registry PDA already
/// exists, so a second call cannot overwrite the first.
#[derive(Accounts)]
pub struct InitializeAccountConstraints<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Registry state account (PDA)
    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

/// Initialize the registry
///
/// No fee is charged; the authority only funds the registry account's rent.
/// The registration fee starts at `DEFAULT_FEE_LAMPORTS` and can be changed
/// later via `update_fee`.
pub fn initialize_handler(context: Context<InitializeAccountConstraints>) -> Result<()> {
    let registry = &mut context.accounts.registry;

    registry.authority = context.accounts.authority.key();
    registry.total_registered = 0;
    registry.fee_lamports = DEFAULT_FEE_LAMPORTS;
    registry.bump = context.bumps.registry;

    msg!("Registry initialized with authority: {}", registry.authority);
    msg!("Registration fee set to: {} lamports", registry.fee_lamports);

    emit!(RegistryInitialized {
        authority: registry.authority,
        fee_lamports: registry.fee_lamports,
        timestamp: get_current_timestamp()?,
    });

    Ok(())
}
