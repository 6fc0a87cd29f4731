#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, transfer};
use crate::constants::*;
use crate::error::RegistrarError;
use crate::instructions::register::utils::*;
use crate::state::*;

/// Event emitted when a name is renewed
#[event]
pub struct NameRenewed {
    pub name: String,
    pub owner: Pubkey,
    pub years: u64,
    pub fee: u64,
    pub old_expiry: i64,
    pub new_expiry: i64,
}

/// Account constraints for the name renewal instruction
///
/// The owner extends the lease on a name they hold. Renewal is allowed even
/// after the lease has lapsed: expired names are never reclaimed, so only
/// their owner can bring them back by renewing.
#[derive(Accounts)]
#[instruction(name: String)]
pub struct RenewNameAccountConstraints<'info> {
    /// Name owner paying the renewal fee
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Record being renewed
    #[account(
        mut,
        has_one = owner @ RegistrarError::Unauthorized,
        seeds = [NAME_RECORD_SEED, name.as_bytes()],
        bump = name_record.bump,
    )]
    pub name_record: Account<'info, NameRecord>,

    /// Registry state account, read for the current fee
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Treasury account receiving the fee, chosen by the caller
    #[account(mut)]
    pub treasury: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Name renewal instruction handler
///
/// Charges `fee_lamports * years` and extends `expires_at` by exactly
/// `years * SECONDS_PER_YEAR`, counted from the stored expiry.
///
/// # Parameters
/// * `context` - Instruction context, containing all relevant accounts
/// * `years` - Renewal period, 1 to 5 years
///
/// # Errors
/// * `InvalidRenewalPeriod` - `years` is zero or above the cap
/// * `Unauthorized` - Signer is not the current owner
pub fn renew_name_handler(
    context: Context<RenewNameAccountConstraints>,
    years: u64,
) -> Result<()> {
    validate_renewal_years(years)?;

    let fee = calculate_renewal_fee(context.accounts.registry.fee_lamports, years)?;

    // Transfer the renewal fee to the treasury
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

    let name_record = &mut context.accounts.name_record;
    let old_expiry = name_record.expires_at;

    name_record.expires_at = extend_expiry_timestamp(old_expiry, years)?;

    msg!(
        "Name {} renewed for {} years, expires at {}",
        name_record.name,
        years,
        name_record.expires_at
    );

    emit!(NameRenewed {
        name: name_record.name.clone(),
        owner: name_record.owner,
        years,
        fee,
        old_expiry,
        new_expiry: name_record.expires_at,
    });

    Ok(())
}
