//! Lead Capture Domain
//!
//! This crate models the subscription form of a landing page: the lead it
//! collects, which fields editors have hidden, how a lead is validated,
//! which campaigns are accepting entries, and the payload handed to the
//! forms backend.
//!
//! # Examples
//!
//! ```rust
//! use chrono::Utc;
//! use domain_lead::{FieldSettings, FormField, FormsConfig, Lead, Submission};
//!
//! let lead = Lead {
//!     name: "Maria Silva".into(),
//!     document: "11144477735".into(),
//!     email: "maria@example.com".into(),
//!     phone: "+55 11 91234-5678".into(),
//!     position: "Gerente".into(),
//!     company: "Acme Ltda".into(),
//!     ..Lead::default()
//! };
//!
//! // Message and consent boxes switched off by the editor
//! let settings = FieldSettings::hiding(&[FormField::Message, FormField::Optin1, FormField::Optin2]);
//! let now = Utc::now();
//! let submission = Submission::build(&lead, &settings, &FormsConfig::default(), now, now).unwrap();
//!
//! assert_eq!(submission.answers.len(), 6);
//! assert_eq!(submission.answers[1].answer1, "111.444.777-35");
//! ```

pub mod campaign;
pub mod error;
pub mod field;
pub mod lead;
pub mod messages;
pub mod submission;
pub mod validation;

pub use campaign::{CampaignStatus, CampaignWindow, Campaigns};
pub use error::LeadError;
pub use field::{FieldSetting, FieldSettings, FormField};
pub use lead::{is_valid_phone, Lead, OPTIN1_ACCEPTED, OPTIN2_ACCEPTED};
pub use messages::{Catalog, Locale};
pub use submission::{Answer, FormsConfig, Submission};
pub use validation::{FieldError, LeadValidator, Reason, ValidationResult};
