#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::RegistrarError;
use crate::instructions::utils::*;
use crate::state::*;

/// Event emitted when a name changes owner
#[event]
pub struct NameTransferred {
    pub name: String,
    pub from: Pubkey,
    pub to: Pubkey,
}

/// Account constraints for the ownership transfer instruction
///
/// The current owner hands a live lease to another account. No fee is
/// charged and the expiry is unchanged.
#[derive(Accounts)]
#[instruction(name: String)]
pub struct TransferNameAccountConstraints<'info> {
    /// Current name owner
    pub owner: Signer<'info>,

    /// Record to transfer
    #[account(
        mut,
        has_one = owner @ RegistrarError::Unauthorized,
        seeds = [NAME_RECORD_SEED, name.as_bytes()],
        bump = name_record.bump
    )]
    pub name_record: Account<'info, NameRecord>,
}

/// Transfer name ownership to a new account
///
/// # Parameters
/// * `context` - Instruction context, containing all relevant accounts
/// * `new_owner` - Public key of the new owner
///
/// # Errors
/// * `Unauthorized` - Signer is not the current owner
/// * `NameExpired` - Lease has lapsed; an expired name cannot change hands
pub fn transfer_name_handler(
    context: Context<TransferNameAccountConstraints>,
    new_owner: Pubkey,
) -> Result<()> {
    let current_timestamp = get_current_timestamp()?;

    let name_record = &mut context.accounts.name_record;
    require!(
        !name_record.is_expired(current_timestamp),
        RegistrarError::NameExpired
    );

    let previous_owner = name_record.owner;
    name_record.owner = new_owner;

    msg!(
        "Transferred name {} from {} to {}",
        name_record.name,
        previous_owner,
        new_owner
    );

    emit!(NameTransferred {
        name: name_record.name.clone(),
        from: previous_owner,
        to: new_owner,
    });

    Ok(())
}
