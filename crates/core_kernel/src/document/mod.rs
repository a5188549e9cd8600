//! Brazilian tax document identifiers (CPF and CNPJ)
//!
//! A CPF identifies a natural person and has 11 digits; a CNPJ identifies a
//! legal entity and has 14. Both end in two check digits computed with
//! modulo-11 weighted sums.
//!
//! Every operation first reduces its input to the ASCII digit subsequence,
//! so `"111.444.777-35"`, `"111 444 777 35"` and `"11144477735"` are the
//! same identifier.
//!
//! # Examples
//!
//! ```rust
//! use core_kernel::document::{self, Document, DocumentKind};
//!
//! assert_eq!(document::format("11144477735"), "111.444.777-35");
//! assert!(document::validate("111.444.777-35"));
//! assert!(!document::validate("111.444.777-36"));
//!
//! let doc: Document = "11.222.333/0001-81".parse().unwrap();
//! assert_eq!(doc.kind(), DocumentKind::Cnpj);
//! assert_eq!(doc.digits(), "11222333000181");
//! ```

pub mod cnpj;
pub mod cpf;
mod format;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use format::format;

/// The numbering scheme of a document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, 11 digits
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, 14 digits
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in a complete identifier
    pub fn digit_count(&self) -> usize {
        match self {
            DocumentKind::Cpf => cpf::LENGTH,
            DocumentKind::Cnpj => cnpj::LENGTH,
        }
    }

    /// Length of the fully punctuated identifier
    pub fn formatted_len(&self) -> usize {
        self.digit_count() + self.separators().len()
    }

    /// Punctuation inserted before the digit at each index
    pub(crate) fn separators(&self) -> &'static [(usize, char)] {
        match self {
            DocumentKind::Cpf => &[(3, '.'), (6, '.'), (9, '-')],
            DocumentKind::Cnpj => &[(2, '.'), (5, '.'), (8, '/'), (12, '-')],
        }
    }

    /// Pattern used to display a partially typed identifier of `len` digits
    pub fn for_partial_len(len: usize) -> Self {
        if len <= cpf::LENGTH {
            DocumentKind::Cpf
        } else {
            DocumentKind::Cnpj
        }
    }

    /// Kind whose complete identifier has exactly `len` digits
    pub fn for_exact_len(len: usize) -> Option<Self> {
        match len {
            cpf::LENGTH => Some(DocumentKind::Cpf),
            cnpj::LENGTH => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        })
    }
}

/// Why a raw value is not a valid document identifier
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Invalid length: expected 11 or 14 digits, found {found}")]
    InvalidLength { found: usize },

    #[error("All digits are identical")]
    RepeatedDigits,

    #[error("Check digit mismatch at position {position}")]
    ChecksumMismatch { position: usize },
}

/// Reduces a raw value to its ASCII digit subsequence
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Converts a digit string into numeric values
///
/// Callers pass the output of [`digits`], so every byte is `b'0'..=b'9'`.
pub(crate) fn values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

/// Rejects sequences made of a single repeated digit
pub(crate) fn ensure_not_repeated(values: &[u8]) -> Result<(), DocumentError> {
    match values.split_first() {
        Some((first, rest)) if rest.iter().all(|v| v == first) => {
            Err(DocumentError::RepeatedDigits)
        }
        _ => Ok(()),
    }
}

/// Compares a computed check digit with the one at `position`
pub(crate) fn ensure_check_digit(
    values: &[u8],
    position: usize,
    expected: u8,
) -> Result<(), DocumentError> {
    if values[position] == expected {
        Ok(())
    } else {
        Err(DocumentError::ChecksumMismatch { position })
    }
}

/// Validates a CPF (11-digit personal identifier)
pub fn validate_personal(raw: &str) -> bool {
    cpf::check(&digits(raw)).is_ok()
}

/// Validates a CNPJ (14-digit organizational identifier)
pub fn validate_organizational(raw: &str) -> bool {
    cnpj::check(&digits(raw)).is_ok()
}

/// Validates a CPF or CNPJ, dispatching on the digit count
///
/// Every failure mode collapses to `false`; use [`check`] to learn why.
pub fn validate(raw: &str) -> bool {
    check(raw).is_ok()
}

/// Validates a CPF or CNPJ and reports the kind or the failure reason
pub fn check(raw: &str) -> Result<DocumentKind, DocumentError> {
    let digits = digits(raw);
    match DocumentKind::for_exact_len(digits.len()) {
        Some(DocumentKind::Cpf) => cpf::check(&digits).map(|_| DocumentKind::Cpf),
        Some(DocumentKind::Cnpj) => cnpj::check(&digits).map(|_| DocumentKind::Cnpj),
        None => Err(DocumentError::InvalidLength { found: digits.len() }),
    }
}

/// A validated CPF or CNPJ
///
/// Holds only the digits; punctuation is applied on display. Serializes as
/// the formatted string and deserializes through full validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    /// Parses and validates a raw value
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let kind = check(raw)?;
        Ok(Self {
            kind,
            digits: digits(raw),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// The bare digits, without punctuation
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The punctuated form, e.g. `111.444.777-35`
    pub fn formatted(&self) -> String {
        format(&self.digits)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Document> for String {
    fn from(document: Document) -> String {
        document.formatted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_strips_punctuation_and_letters() {
        assert_eq!(digits("111.444.777-35"), "11144477735");
        assert_eq!(digits("abc1d2e3"), "123");
        assert_eq!(digits(""), "");
    }

    #[test]
    fn test_digits_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not decimal ASCII
        assert_eq!(digits("١٢٣１２３4"), "4");
    }

    #[test]
    fn test_check_reports_kind() {
        assert_eq!(check("11144477735"), Ok(DocumentKind::Cpf));
        assert_eq!(check("11222333000181"), Ok(DocumentKind::Cnpj));
    }

    #[test]
    fn test_check_reports_length() {
        assert_eq!(
            check("123456789"),
            Err(DocumentError::InvalidLength { found: 9 })
        );
        assert_eq!(check(""), Err(DocumentError::InvalidLength { found: 0 }));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DocumentError::InvalidLength { found: 9 }.to_string(),
            "Invalid length: expected 11 or 14 digits, found 9"
        );
        assert_eq!(
            DocumentError::ChecksumMismatch { position: 13 }.to_string(),
            "Check digit mismatch at position 13"
        );
    }

    #[test]
    fn test_kind_lengths() {
        assert_eq!(DocumentKind::Cpf.formatted_len(), 14);
        assert_eq!(DocumentKind::Cnpj.formatted_len(), 18);
        assert_eq!(DocumentKind::for_partial_len(0), DocumentKind::Cpf);
        assert_eq!(DocumentKind::for_partial_len(11), DocumentKind::Cpf);
        assert_eq!(DocumentKind::for_partial_len(12), DocumentKind::Cnpj);
        assert_eq!(DocumentKind::for_exact_len(12), None);
    }

    #[test]
    fn test_document_display_is_formatted() {
        let doc = Document::parse("11144477735").unwrap();
        assert_eq!(doc.to_string(), "111.444.777-35");
    }
}
