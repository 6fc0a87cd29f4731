use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;

/// Current cluster time in seconds since the Unix epoch.
///
/// Every lease decision (initial expiry, expiry checks on transfer and
/// resolver updates) reads the clock through here.
pub fn get_current_timestamp() -> Result<i64> {
    let clock = Clock::get()?;
    Ok(clock.unix_timestamp)
}
