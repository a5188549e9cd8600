//! CPF check digits
//!
//! Each check digit is `11 - (sum mod 11)` over the preceding digits, with
//! weights counting down to 2 from one more than the number of digits
//! summed. Results of 10 or 11 become 0.

use super::{ensure_check_digit, ensure_not_repeated, values, DocumentError};

/// Digits in a complete CPF
pub const LENGTH: usize = 11;

/// Digits before the check digits
pub const BASE_LENGTH: usize = 9;

fn check_digit(values: &[u8]) -> u8 {
    let top = values.len() as u32 + 1;
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| u32::from(v) * (top - i as u32))
        .sum();
    match 11 - sum % 11 {
        rev if rev >= 10 => 0,
        rev => rev as u8,
    }
}

/// Computes both check digits for a 9-digit base
///
/// Returns `None` unless `base` holds exactly nine ASCII digits.
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

/// Validates a digit-only CPF
pub(crate) fn check(digits: &str) -> Result<(), DocumentError> {
    if digits.len() != LENGTH {
        return Err(DocumentError::InvalidLength { found: digits.len() });
    }
    let values = values(digits);
    ensure_not_repeated(&values)?;
    ensure_check_digit(&values, 9, check_digit(&values[..9]))?;
    ensure_check_digit(&values, 10, check_digit(&values[..10]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digits_for_known_bases() {
        assert_eq!(check_digits("111444777"), Some([3, 5]));
        assert_eq!(check_digits("529982247"), Some([2, 5]));
        assert_eq!(check_digits("987654321"), Some([0, 0]));
    }

    #[test]
    fn test_check_digits_rejects_bad_base() {
        assert_eq!(check_digits("11144477"), None);
        assert_eq!(check_digits("11144477a"), None);
    }

    #[test]
    fn test_check_reports_mismatch_position() {
        assert_eq!(
            check("11144477745"),
            Err(DocumentError::ChecksumMismatch { position: 9 })
        );
        assert_eq!(
            check("11144477736"),
            Err(DocumentError::ChecksumMismatch { position: 10 })
        );
    }

    #[test]
    fn test_repeated_digits() {
        for d in 0..=9 {
            let raw = d.to_string().repeat(LENGTH);
            assert_eq!(check(&raw), Err(DocumentError::RepeatedDigits));
        }
    }
}
