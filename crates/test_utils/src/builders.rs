//! Test Data Builders
//!
//! Builder for leads that starts from a valid fixture so tests only set
//! the fields they care about.

use domain_lead::Lead;

use crate::fixtures::LeadFixtures;

/// Builder for constructing test leads
pub struct TestLeadBuilder {
    lead: Lead,
}

impl Default for TestLeadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLeadBuilder {
    /// Creates a builder seeded with a fully valid lead
    pub fn new() -> Self {
        Self {
            lead: LeadFixtures::valid(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.lead.name = name.into();
        self
    }

    pub fn document(mut self, document: impl Into<String>) -> Self {
        self.lead.document = document.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.lead.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.lead.phone = phone.into();
        self
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.lead.position = position.into();
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.lead.company = company.into();
        self
    }

    pub fn message(mut self, message: Option<&str>) -> Self {
        self.lead.message = message.map(str::to_string);
        self
    }

    pub fn optin1(mut self, value: Option<&str>) -> Self {
        self.lead.optin1 = value.map(str::to_string);
        self
    }

    pub fn optin2(mut self, value: Option<&str>) -> Self {
        self.lead.optin2 = value.map(str::to_string);
        self
    }

    /// Clears message and consents, as a form with those fields hidden sends
    pub fn without_optional_fields(self) -> Self {
        self.message(None).optin1(None).optin2(None)
    }

    pub fn build(self) -> Lead {
        self.lead
    }
}
