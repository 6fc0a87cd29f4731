//! Error definitions for the name-registrar program.
//!
//! Every error aborts its instruction with no partial effect; the runtime
//! rolls back all account writes of a failed transaction. Conditions the
//! runtime already guarantees are not duplicated here: re-registering a live
//! name (or re-initializing the registry) fails the `init` constraint with
//! account-already-in-use, a missing record fails account deserialization,
//! and an underfunded payer fails the system-program transfer.

use anchor_lang::prelude::*;

#[error_code]
pub enum RegistrarError {
    #[msg("Name must be between 3 and 12 characters")]
    InvalidNameLength,

    #[msg("Name can only contain lowercase letters, digits, and underscores")]
    InvalidNameCharacters,

    #[msg("Only the name owner can perform this action")]
    Unauthorized,

    #[msg("Only the registry authority can perform this action")]
    NotRegistryAuthority,

    #[msg("Renewal period must be between 1 and 5 years")]
    InvalidRenewalPeriod,

    #[msg("Name lease has expired")]
    NameExpired,

    #[msg("Calculation overflow")]
    MathOverflow,
}
