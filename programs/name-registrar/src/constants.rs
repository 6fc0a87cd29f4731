//! Constants used throughout the name-registrar program.
//!
//! This module defines the PDA seeds, fee defaults, and time constants the
//! rest of the program relies on for consistent behavior.

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// PDA Seeds
pub const REGISTRY_SEED: &[u8] = b"registry";
pub const NAME_RECORD_SEED: &[u8] = b"name";

/// Registration fee set at initialization time, in lamports (0.1 SOL).
/// The registry authority can change it afterwards via `update_fee`.
pub const DEFAULT_FEE_LAMPORTS: u64 = 100_000_000;

/// Seconds per lease year. A fixed 365-day year, deliberately not
/// leap-adjusted: clients derive expiry deltas from this exact value.
pub const SECONDS_PER_YEAR: i64 = 31_536_000; // 365 * 24 * 60 * 60

/// Lease granted by a fresh registration. One year; renewals extend beyond it.
pub const INITIAL_LEASE_SECONDS: i64 = SECONDS_PER_YEAR;

// Name syntax bounds
pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 12;

/// Upper bound on the years accepted by a single renewal.
pub const MAX_RENEWAL_YEARS: u64 = 5;
