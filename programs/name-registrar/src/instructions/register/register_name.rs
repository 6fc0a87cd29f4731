#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, transfer};
use crate::constants::*;
use crate::error::RegistrarError;
use crate::instructions::register::utils::*;
use crate::instructions::utils::*;
use crate::state::*;

/// Event emitted when a name is registered
#[event]
pub struct NameRegistered {
    pub name: String,
    pub owner: Pubkey,
    pub fee: u64,
    pub expires_at: i64,
}

/// Account constraints for the name registration instruction
///
/// Registers a name that has never been registered before. The record PDA is
/// created with `init`, so a second registration of the same name fails at
/// the account level while the record exists: first registration wins, and
/// there is no reclaim path for expired names.
#[derive(Accounts)]
#[instruction(name: String)]
pub struct RegisterNameAccountConstraints<'info> {
    /// User paying the registration fee, who becomes the initial owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Record storing the lease, using the name as PDA seed
    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + NameRecord::INIT_SPACE,
        seeds = [NAME_RECORD_SEED, name.as_bytes()],
        bump
    )]
    pub name_record: Account<'info, NameRecord>,

    /// Registry state account, tracking fee and registration count
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Treasury account receiving the fee, chosen by the caller
    #[account(mut)]
    pub treasury: AccountInfo<'info>,

    /// Solana system program, used for the fee transfer
    pub system_program: Program<'info, System>,
}

/// Name registration instruction handler
///
/// # Parameters
/// * `context` - Instruction context, containing all relevant accounts
/// * `name` - Name to register, 3 to 12 characters of `[a-z0-9_]`
///
/// # Errors
/// * `InvalidNameLength` - Name is shorter than 3 or longer than 12 characters
/// * `InvalidNameCharacters` - Name contains characters outside `[a-z0-9_]`
pub fn register_name_handler(
    context: Context<RegisterNameAccountConstraints>,
    name: String,
) -> Result<()> {
    validate_name(&name)?;

    let current_timestamp = get_current_timestamp()?;
    let fee = context.accounts.registry.fee_lamports;

    // Transfer the registration fee to the treasury
    transfer(
        CpiContext::new(
            context.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: context.accounts.owner.to_account_info(),
                to: context.accounts.treasury.to_account_info(),
            },
        ),
        fee,
    )?;

    // Write the lease record
    let name_record = &mut context.accounts.name_record;
    name_record.name = name;
    name_record.owner = context.accounts.owner.key();
    name_record.resolver = Pubkey::default();
    name_record.registered_at = current_timestamp;
    name_record.expires_at = initial_expiry_timestamp(current_timestamp)?;
    name_record.bump = context.bumps.name_record;

    // Update the registry counter
    let registry = &mut context.accounts.registry;
    registry.total_registered = registry
        .total_registered
        .checked_add(1)
        .ok_or(error!(RegistrarError::MathOverflow))?;

    msg!(
        "Name {} registered to {} until {}",
        name_record.name,
        name_record.owner,
        name_record.expires_at
    );

    emit!(NameRegistered {
        name: name_record.name.clone(),
        owner: name_record.owner,
        fee,
        expires_at: name_record.expires_at,
    });

    Ok(())
}
