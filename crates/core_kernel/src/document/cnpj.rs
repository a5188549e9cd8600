//! CNPJ check digits
//!
//! Weights start at `n - 7` for a sum over `n` digits and count down,
//! wrapping from 2 back to 9. A remainder below 2 gives check digit 0,
//! anything else `11 - remainder`.

use super::{ensure_check_digit, ensure_not_repeated, values, DocumentError};

/// Digits in a complete CNPJ
pub const LENGTH: usize = 14;

/// Digits before the check digits
pub const BASE_LENGTH: usize = 12;

fn check_digit(values: &[u8]) -> u8 {
    let mut weight = values.len() as u32 - 7;
    let mut sum = 0u32;
    for &v in values {
        sum += u32::from(v) * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Computes both check digits for a 12-digit base
///
/// Returns `None` unless `base` holds exactly twelve ASCII digits.
pub fn check_digits(base: &str) -> Option<[u8; 2]> {
    if base.len() != BASE_LENGTH || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut values = values(base);
    let first = check_digit(&values);
    values.push(first);
    let second = check_digit(&values);
    Some([first, second])
}

/// Validates a digit-only CNPJ
pub(crate) fn check(digits: &str) -> Result<(), DocumentError> {
    if digits.len() != LENGTH {
        return Err(DocumentError::InvalidLength { found: digits.len() });
    }
    let values = values(digits);
    ensure_not_repeated(&values)?;
    ensure_check_digit(&values, 12, check_digit(&values[..12]))?;
    ensure_check_digit(&values, 13, check_digit(&values[..13]))
}
