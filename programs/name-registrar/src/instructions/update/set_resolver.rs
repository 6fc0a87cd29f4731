#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::RegistrarError;
use crate::instructions::utils::*;
use crate::state::*;

/// Event emitted when a name's resolver changes
#[event]
pub struct ResolverUpdated {
    pub name: String,
    pub resolver: Pubkey,
}

/// Account constraints for the resolver update instruction
///
/// The owner points a live name at a resolver account. Lookup clients read
/// the pointer from the record; the registrar itself never dereferences it.
#[derive(Accounts)]
#[instruction(name: String)]
pub struct SetResolverAccountConstraints<'info> {
    /// Name owner
    pub owner: Signer<'info>,

    /// Record to update
    #[account(
        mut,
        has_one = owner @ RegistrarError::Unauthorized,
        seeds = [NAME_RECORD_SEED, name.as_bytes()],
        bump = name_record.bump
    )]
    pub name_record: Account<'info, NameRecord>,
}

/// Set the resolver for a name
///
/// # Parameters
/// * `context` - Instruction context, containing all relevant accounts
/// * `resolver` - Resolver account the name should delegate to;
///   `Pubkey::default()` clears the pointer
///
/// # Errors
/// * `Unauthorized` - Signer is not the current owner
/// * `NameExpired` - Lease has lapsed; renew before repointing the name
pub fn set_resolver_handler(
    context: Context<SetResolverAccountConstraints>,
    resolver: Pubkey,
) -> Result<()> {
    let current_timestamp = get_current_timestamp()?;

    let name_record = &mut context.accounts.name_record;
    require!(
        !name_record.is_expired(current_timestamp),
        RegistrarError::NameExpired
    );

    name_record.resolver = resolver;

    msg!("Resolver for name {} set to {}", name_record.name, resolver);

    emit!(ResolverUpdated {
        name: name_record.name.clone(),
        resolver,
    });

    Ok(())
}
