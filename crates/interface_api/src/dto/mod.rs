//! Request and response bodies

pub mod campaigns;
pub mod documents;
pub mod leads;
