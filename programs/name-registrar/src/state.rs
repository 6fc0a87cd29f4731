//! Program state definitions for the name registrar.
//!
//! Two account kinds exist: the singleton [`Registry`] holding global
//! configuration and counters, and one [`NameRecord`] per registered name.
//! Both are PDAs; the derivation helpers below expose the same addresses the
//! account constraints enforce, so clients and tests can compute them
//! off-chain.

use anchor_lang::prelude::*;

use crate::constants::*;

/// Global registry state - singleton PDA
#[account]
#[derive(InitSpace)]
pub struct Registry {
    /// Admin authority who can update the fee and hand over the registry
    pub authority: Pubkey,

    /// Total number of names ever registered. Never decremented; transfers
    /// and renewals do not touch it.
    pub total_registered: u64,

    /// Fee in lamports charged per registration, and per year of renewal
    pub fee_lamports: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl Registry {
    /// Derive the singleton registry address for `program_id`.
    pub fn find_address(program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[REGISTRY_SEED], program_id)
    }
}

/// The leased ownership entry for a single registered name
#[account]
#[derive(InitSpace)]
pub struct NameRecord {
    /// The registered name. Immutable once set; also the PDA seed.
    #[max_len(12)]
    pub name: String,

    /// Current owner; changes via `transfer_name`
    pub owner: Pubkey,

    /// Resolver account the name delegates lookups to.
    /// `Pubkey::default()` until the owner sets one via `set_resolver`.
    pub resolver: Pubkey,

    /// Timestamp of the initial registration (seconds since Unix epoch)
    pub registered_at: i64,

    /// Timestamp when the lease expires (seconds since Unix epoch).
    /// Extended by `renew_name`, never moved backwards.
    pub expires_at: i64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl NameRecord {
    /// Derive the record address for `name` under `program_id`.
    pub fn find_address(name: &str, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[NAME_RECORD_SEED, name.as_bytes()], program_id)
    }

    /// Whether the lease has lapsed at `current_time`.
    pub fn is_expired(&self, current_time: i64) -> bool {
        current_time > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expires_at: i64) -> NameRecord {
        NameRecord {
            name: "testname".to_string(),
            owner: Pubkey::new_unique(),
            resolver: Pubkey::default(),
            registered_at: 0,
            expires_at,
            bump: 255,
        }
    }

    #[test]
    fn expiry_boundary() {
        let r = record(1_000);
        assert!(!r.is_expired(999));
        assert!(!r.is_expired(1_000)); // still live at the exact expiry second
        assert!(r.is_expired(1_001));
    }

    #[test]
    fn record_layout_roundtrips_resolver() {
        let mut r = record(1_000);
        r.resolver = Pubkey::new_unique();

        let bytes = r.try_to_vec().unwrap();
        let decoded = NameRecord::try_from_slice(&bytes).unwrap();
        assert_eq!(decoded.resolver, r.resolver);
        assert_eq!(decoded.owner, r.owner);
        assert_eq!(decoded.expires_at, r.expires_at);
    }

    #[test]
    fn derived_addresses_are_deterministic() {
        let program_id = crate::ID;
        let (a1, b1) = NameRecord::find_address("testname", &program_id);
        let (a2, b2) = NameRecord::find_address("testname", &program_id);
        assert_eq!(a1, a2);
        assert_eq!(b1, b2);
    }

    #[test]
    fn derived_addresses_do_not_collide() {
        let program_id = crate::ID;
        let (registry, _) = Registry::find_address(&program_id);
        let (alpha, _) = NameRecord::find_address("alpha", &program_id);
        let (beta, _) = NameRecord::find_address("beta", &program_id);
        assert_ne!(registry, alpha);
        assert_ne!(registry, beta);
        assert_ne!(alpha, beta);

        // The record tag keeps name seeds out of the registry's namespace.
        let (registry_name, _) = NameRecord::find_address("registry", &program_id);
        assert_ne!(registry, registry_name);
    }
}
