//! Property-Based Test Generators
//!
//! Provides proptest strategies for CPF/CNPJ values and leads that keep
//! the check-digit invariants.

use core_kernel::document::{cnpj, cpf};
use proptest::prelude::*;

use domain_lead::Lead;

use crate::fixtures::LeadFixtures;

fn is_repeated(digits: &str) -> bool {
    digits.bytes().all(|b| Some(b) == digits.bytes().next())
}

fn with_check_digits(base: &str, check: [u8; 2]) -> String {
    format!("{}{}{}", base, check[0], check[1])
}

/// Strategy for 11-digit CPFs with correct check digits
pub fn valid_cpf_strategy() -> impl Strategy<Value = String> {
    "[0-9]{9}".prop_filter_map("repeated digits", |base| {
        let raw = with_check_digits(&base, cpf::check_digits(&base)?);
        (!is_repeated(&raw)).then_some(raw)
    })
}

/// Strategy for 14-digit CNPJs with correct check digits
pub fn valid_cnpj_strategy() -> impl Strategy<Value = String> {
    "[0-9]{12}".prop_filter_map("repeated digits", |base| {
        let raw = with_check_digits(&base, cnpj::check_digits(&base)?);
        (!is_repeated(&raw)).then_some(raw)
    })
}

/// Strategy for either kind of valid document
pub fn valid_document_strategy() -> impl Strategy<Value = String> {
    prop_oneof![valid_cpf_strategy(), valid_cnpj_strategy()]
}

/// Strategy for digit strings whose length is neither 11 nor 14
pub fn wrong_length_digits_strategy() -> impl Strategy<Value = String> {
    "[0-9]{0,20}".prop_filter("valid length", |s| s.len() != 11 && s.len() != 14)
}

/// Strategy for free-form text typed into the document field
pub fn document_input_strategy() -> impl Strategy<Value = String> {
    "[0-9./\\- a-zA-Z]{0,30}"
}

/// Strategy for valid leads carrying generated documents
pub fn valid_lead_strategy() -> impl Strategy<Value = Lead> {
    valid_document_strategy().prop_map(|document| Lead {
        document,
        ..LeadFixtures::valid()
    })
}
