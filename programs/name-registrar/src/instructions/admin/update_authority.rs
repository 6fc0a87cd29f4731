#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::RegistrarError;
use crate::state::*;

/// Account constraints for the authority handover instruction
///
/// The current registry authority transfers administrative control to a new
/// account.
#[derive(Accounts)]
pub struct UpdateAuthorityAccountConstraints<'info> {
    /// Current registry authority
    pub authority: Signer<'info>,

    /// Registry state account
    #[account(
        mut,
        has_one = authority @ RegistrarError::NotRegistryAuthority,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// Account receiving administrative control
    pub new_authority: SystemAccount<'info>,
}

/// Hand the registry over to a new authority
pub fn update_authority_handler(
    context: Context<UpdateAuthorityAccountConstraints>,
) -> Result<()> {
    let registry = &mut context.accounts.registry;
    let new_authority = context.accounts.new_authority.key();

    registry.authority = new_authority;

    msg!("Registry authority updated to: {}", new_authority);

    Ok(())
}
