//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for documents, leads, campaigns and
//! forms configuration. Values are fixed so assertions can name them.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::job::en::Title;
use fake::faker::name::en::Name;
use fake::Fake;
use once_cell::sync::Lazy;

use domain_lead::{
    Campaigns, CampaignWindow, Catalog, FormsConfig, Lead, OPTIN1_ACCEPTED, OPTIN2_ACCEPTED,
};

static CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::load().expect("embedded message files should parse"));

/// Known CPF/CNPJ values
pub struct DocumentFixtures;

impl DocumentFixtures {
    /// Publicly known algorithmically valid CPF
    pub fn valid_cpf() -> &'static str {
        "11144477735"
    }

    pub fn valid_cpf_formatted() -> &'static str {
        "111.444.777-35"
    }

    /// Valid CPF whose check digits are both zero
    pub fn valid_cpf_zero_check() -> &'static str {
        "98765432100"
    }

    /// CPF with a wrong second check digit
    pub fn invalid_cpf() -> &'static str {
        "11144477736"
    }

    pub fn valid_cnpj() -> &'static str {
        "11222333000181"
    }

    pub fn valid_cnpj_formatted() -> &'static str {
        "11.222.333/0001-81"
    }

    /// CNPJ with a wrong second check digit
    pub fn invalid_cnpj() -> &'static str {
        "11222333000182"
    }

    /// Passes no checksum because every digit is the same
    pub fn repeated_cpf() -> &'static str {
        "00000000000"
    }
}

/// Ready-made leads
pub struct LeadFixtures;

impl LeadFixtures {
    /// A lead that passes every rule with all fields visible
    pub fn valid() -> Lead {
        Lead {
            name: "Maria Silva".to_string(),
            document: DocumentFixtures::valid_cpf_formatted().to_string(),
            email: "maria.silva@example.com".to_string(),
            phone: "+55 11 91234-5678".to_string(),
            position: "Gerente de Marketing".to_string(),
            company: "Acme Ltda".to_string(),
            message: Some("Gostaria de participar do evento".to_string()),
            optin1: Some(OPTIN1_ACCEPTED.to_string()),
            optin2: Some(OPTIN2_ACCEPTED.to_string()),
        }
    }

    /// A valid lead with generated contact details
    pub fn random() -> Lead {
        Lead {
            name: Name().fake(),
            email: SafeEmail().fake(),
            position: Title().fake(),
            company: CompanyName().fake(),
            ..Self::valid()
        }
    }

    /// A valid lead registered under a CNPJ
    pub fn corporate() -> Lead {
        Lead {
            document: DocumentFixtures::valid_cnpj().to_string(),
            ..Self::valid()
        }
    }
}

/// Fixed points in time
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn campaign_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
    }

    pub fn campaign_end() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 23, 59, 59).unwrap()
    }

    /// A moment inside the campaign window
    pub fn during_campaign() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 20, 14, 30, 0).unwrap()
    }

    /// A moment after the campaign window
    pub fn after_campaign() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 1, 0, 0, 0).unwrap()
    }
}

/// Campaign windows and forms configuration
pub struct CampaignFixtures;

impl CampaignFixtures {
    pub const OPEN: &'static str = "voices-2025";
    pub const INACTIVE: &'static str = "paused-2025";
    pub const ENDED: &'static str = "rio-gastronomia-2024";

    pub fn window() -> CampaignWindow {
        CampaignWindow {
            form_active: true,
            form_start: TemporalFixtures::campaign_start(),
            form_end: TemporalFixtures::campaign_end(),
            closed_message: Some("Inscrições encerradas para o Voices 2025.".to_string()),
        }
    }

    /// One open campaign and one switched off
    pub fn campaigns() -> Campaigns {
        let mut campaigns = Campaigns::new();
        campaigns.insert(Self::OPEN, Self::window());
        campaigns.insert(
            Self::INACTIVE,
            CampaignWindow {
                form_active: false,
                ..Self::window()
            },
        );
        campaigns
    }

    /// Campaigns positioned around the current time, for code that reads the clock
    pub fn live_campaigns() -> Campaigns {
        let now = Utc::now();
        let live = CampaignWindow {
            form_start: now - Duration::days(1),
            form_end: now + Duration::days(1),
            ..Self::window()
        };
        let mut campaigns = Campaigns::new();
        campaigns.insert(Self::OPEN, live.clone());
        campaigns.insert(
            Self::INACTIVE,
            CampaignWindow {
                form_active: false,
                ..live
            },
        );
        campaigns.insert(
            Self::ENDED,
            CampaignWindow {
                form_active: true,
                form_start: now - Duration::days(30),
                form_end: now - Duration::days(2),
                closed_message: None,
            },
        );
        campaigns
    }

    pub fn forms_config() -> FormsConfig {
        FormsConfig {
            forms_url_base64: "aHR0cHM6Ly9mb3Jtcy5leGFtcGxlLmNvbS9yLzEyMw==".to_string(),
            ..FormsConfig::default()
        }
    }
}

/// Shared message catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}
