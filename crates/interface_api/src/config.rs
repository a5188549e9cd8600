//! API configuration

use serde::Deserialize;

use domain_lead::{Campaigns, FieldSettings, FormsConfig, Locale};

/// File read when `API_CONFIG_FILE` is not set
pub const DEFAULT_CONFIG_FILE: &str = "leadform.toml";

/// API configuration
///
/// Everything the service needs is read once at startup and passed to the
/// router; handlers never consult the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Message locale when `Accept-Language` matches nothing supported
    pub default_locale: Locale,
    /// Submission windows per campaign slug
    pub campaigns: Campaigns,
    /// Forms backend target and question ids
    pub forms: FormsConfig,
    /// Visibility of the optional form fields
    pub fields: FieldSettings,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            default_locale: Locale::default(),
            campaigns: Campaigns::default(),
            forms: FormsConfig::default(),
            fields: FieldSettings::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the file named by `API_CONFIG_FILE` and the environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let file = std::env::var("API_CONFIG_FILE")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::from_file(&file)
    }

    /// Loads configuration from an optional TOML file overlaid with `API_*` variables
    pub fn from_file(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("API").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
