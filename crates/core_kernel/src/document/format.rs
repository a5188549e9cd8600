//! Progressive punctuation for partially typed identifiers

use super::{digits, DocumentKind};

/// Formats a raw value as a CPF or CNPJ while it is being typed
///
/// Up to 11 digits are shown as `XXX.XXX.XXX-XX`, more as
/// `XX.XXX.XXX/XXXX-XX`. Each separator appears only once the digit after
/// it exists, and digits past the pattern's capacity are dropped.
///
/// ```rust
/// use core_kernel::document::format;
///
/// assert_eq!(format("1234"), "123.4");
/// assert_eq!(format("12345678901234"), "12.345.678/9012-34");
/// ```
pub fn format(input: &str) -> String {
    let digits = digits(input);
    let kind = DocumentKind::for_partial_len(digits.len());
    let separators = kind.separators();

    let mut out = String::with_capacity(kind.formatted_len());
    for (index, digit) in digits.chars().take(kind.digit_count()).enumerate() {
        if let Some((_, separator)) = separators.iter().find(|(at, _)| *at == index) {
            out.push(*separator);
        }
        out.push(digit);
    }
    out
}
