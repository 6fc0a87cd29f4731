//! Name Registrar Program
//!
//! This program manages the registration, renewal, and transfer of
//! human-readable names on Solana. Each name is a leased ownership entry: a
//! registration buys a one-year lease, renewals extend it, and transfers hand
//! the live lease to a new owner. Registration and renewal fees are paid in
//! lamports to a treasury account supplied by the caller.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

use instructions::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("CqSC1GsPHGVhLgPbTedQEeyT7YAkQ64nZcb1esKm7HY6");

#[program]
pub mod name_registrar {
    use super::*;

    pub fn initialize(context: Context<InitializeAccountConstraints>) -> Result<()> {
        initialize_handler(context)
    }

    pub fn update_fee(
        context: Context<UpdateFeeAccountConstraints>,
        new_fee: u64,
    ) -> Result<()> {
        update_fee_handler(context, new_fee)
    }

    pub fn update_authority(context: Context<UpdateAuthorityAccountConstraints>) -> Result<()> {
        update_authority_handler(context)
    }

    pub fn register_name(
        context: Context<RegisterNameAccountConstraints>,
        name: String,
    ) -> Result<()> {
        register_name_handler(context, name)
    }

    pub fn renew_name(
        context: Context<RenewNameAccountConstraints>,
        _name: String,
        years: u64,
    ) -> Result<()> {
        renew_name_handler(context, years)
    }

    pub fn transfer_name(
        context: Context<TransferNameAccountConstraints>,
        _name: String,
        new_owner: Pubkey,
    ) -> Result<()> {
        transfer_name_handler(context, new_owner)
    }

    pub fn set_resolver(
        context: Context<SetResolverAccountConstraints>,
        _name: String,
        resolver: Pubkey,
    ) -> Result<()> {
        set_resolver_handler(context, resolver)
    }
}
