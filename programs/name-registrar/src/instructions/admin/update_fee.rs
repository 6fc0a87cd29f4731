#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::RegistrarError;
use crate::state::*;

/// Event emitted when the registration fee changes
#[event]
pub struct FeeUpdated {
    pub old_fee: u64,
    pub new_fee: u64,
}

/// Account constraints for the fee update instruction
///
/// Only the registry authority may change the per-registration fee. Already
/// issued leases are unaffected; the new fee applies to subsequent
/// registrations and renewals.
#[derive(Accounts)]
pub struct UpdateFeeAccountConstraints<'info> {
    /// Registry authority, must match the authority stored in the registry
    pub authority: Signer<'info>,

    /// Registry state account
    #[account(
        mut,
        has_one = authority @ RegistrarError::NotRegistryAuthority,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,
}

/// Update the registration fee
///
/// # Parameters
/// * `new_fee` - New fee in lamports, charged per registration and per
///   renewal year
pub fn update_fee_handler(
    context: Context<UpdateFeeAccountConstraints>,
    new_fee: u64,
) -> Result<()> {
    let registry = &mut context.accounts.registry;
    let old_fee = registry.fee_lamports;

    registry.fee_lamports = new_fee;

    msg!("Registration fee updated to: {} lamports", new_fee);

    emit!(FeeUpdated { old_fee, new_fee });

    Ok(())
}
