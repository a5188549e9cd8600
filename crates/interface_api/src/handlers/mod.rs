//! Request handlers

pub mod campaigns;
pub mod documents;
pub mod health;
pub mod leads;
