use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::RegistrarError;

/// Validate the syntax of a submitted name.
///
/// Length must be within `MIN_NAME_LEN..=MAX_NAME_LEN` and the charset is
/// restricted to lowercase letters, digits, and underscores. The charset
/// keeps PDA derivation stable across clients: the name itself is the seed,
/// so no normalization happens on-chain.
pub fn validate_name(name: &str) -> Result<()> {
    require!(
        name.len() >= MIN_NAME_LEN && name.len() <= MAX_NAME_LEN,
        RegistrarError::InvalidNameLength
    );
    require!(
        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
        RegistrarError::InvalidNameCharacters
    );
    Ok(())
}

/// Validate the period requested by a single renewal.
pub fn validate_renewal_years(years: u64) -> Result<()> {
    require!(
        years >= 1 && years <= MAX_RENEWAL_YEARS,
        RegistrarError::InvalidRenewalPeriod
    );
    Ok(())
}

/// Expiry of a fresh registration made at `current_timestamp`.
pub fn initial_expiry_timestamp(current_timestamp: i64) -> Result<i64> {
    current_timestamp
        .checked_add(INITIAL_LEASE_SECONDS)
        .ok_or(error!(RegistrarError::MathOverflow))
}

/// Extend a lease by whole years from its stored expiry.
///
/// Always counts from `expires_at`, never from the current time, so renewals
/// add exactly `years * SECONDS_PER_YEAR` to the previous expiry regardless
/// of when they land.
pub fn extend_expiry_timestamp(expires_at: i64, years: u64) -> Result<i64> {
    let extension = (years as i64)
        .checked_mul(SECONDS_PER_YEAR)
        .ok_or(error!(RegistrarError::MathOverflow))?;
    expires_at
        .checked_add(extension)
        .ok_or(error!(RegistrarError::MathOverflow))
}

/// Renewal fee for `years`, scaled linearly from the registry's current fee.
pub fn calculate_renewal_fee(fee_lamports: u64, years: u64) -> Result<u64> {
    fee_lamports
        .checked_mul(years)
        .ok_or(error!(RegistrarError::MathOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    fn assert_registrar_error(result: Result<()>, expected: RegistrarError) {
        match result.unwrap_err() {
            Error::AnchorError(e) => {
                assert_eq!(e.error_code_number, ERROR_CODE_OFFSET + expected as u32)
            }
            other => panic!("expected a registrar error, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_names() {
        assert!(validate_name("abc").is_ok());
        assert!(validate_name("testname").is_ok());
        assert!(validate_name("name_42").is_ok());
        assert!(validate_name("twelve_chars").is_ok()); // exactly at the cap
    }

    #[test]
    fn rejects_short_and_long_names() {
        assert_registrar_error(validate_name("ab"), RegistrarError::InvalidNameLength);
        assert_registrar_error(validate_name(""), RegistrarError::InvalidNameLength);
        assert_registrar_error(
            validate_name("thirteenchars"),
            RegistrarError::InvalidNameLength,
        );
    }

    #[test]
    fn rejects_forbidden_characters() {
        assert_registrar_error(validate_name("UpperCase"), RegistrarError::InvalidNameCharacters);
        assert_registrar_error(validate_name("with-dash"), RegistrarError::InvalidNameCharacters);
        assert_registrar_error(validate_name("with space"), RegistrarError::InvalidNameCharacters);
        assert_registrar_error(validate_name("naïve"), RegistrarError::InvalidNameCharacters);
    }

    #[test]
    fn renewal_period_bounds() {
        assert_registrar_error(
            validate_renewal_years(0),
            RegistrarError::InvalidRenewalPeriod,
        );
        assert!(validate_renewal_years(1).is_ok());
        assert!(validate_renewal_years(MAX_RENEWAL_YEARS).is_ok());
        assert_registrar_error(
            validate_renewal_years(MAX_RENEWAL_YEARS + 1),
            RegistrarError::InvalidRenewalPeriod,
        );
    }

    #[test]
    fn fresh_registration_gets_one_year() {
        let now = 1_700_000_000;
        assert_eq!(initial_expiry_timestamp(now).unwrap(), now + 31_536_000);
    }

    #[test]
    fn renewal_adds_exact_year_multiples() {
        let expiry = 1_700_000_000;
        // Two 365-day years, no leap adjustment.
        assert_eq!(
            extend_expiry_timestamp(expiry, 2).unwrap(),
            expiry + 63_072_000
        );
        assert_eq!(
            extend_expiry_timestamp(expiry, 1).unwrap(),
            expiry + 31_536_000
        );
    }

    #[test]
    fn renewal_extension_overflows_cleanly() {
        assert!(extend_expiry_timestamp(i64::MAX - 1, 1).is_err());
    }

    #[test]
    fn renewal_fee_scales_with_years() {
        assert_eq!(calculate_renewal_fee(100_000_000, 1).unwrap(), 100_000_000);
        assert_eq!(calculate_renewal_fee(100_000_000, 5).unwrap(), 500_000_000);
        assert!(calculate_renewal_fee(u64::MAX, 2).is_err());
    }
}
