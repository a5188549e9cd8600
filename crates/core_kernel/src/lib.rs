//! Core Kernel - Foundational types for lead capture
//!
//! This crate provides the building blocks used by the lead domain and the API:
//! - CPF/CNPJ formatting and check-digit validation
//! - Time periods for campaign windows
//! - Strongly-typed identifiers

pub mod document;
pub mod temporal;
pub mod identifiers;

pub use document::{Document, DocumentError, DocumentKind};
pub use temporal::{ValidPeriod, TemporalError};
pub use identifiers::SubmissionId;
