use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration, loadable from TOML.
///
/// ```toml
/// [form]
/// reset_on_close = false
///
/// [enrichment]
/// amount = 3
/// timeout_ms = 5000
///
/// [enrichment.categories]
/// Technology = 18
/// Health = 17
/// ```
///
/// Every key is optional. A `categories` table replaces the default mapping
/// as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurveyFormConfig {
    pub form: FormSettings,
    pub enrichment: EnrichmentConfig,
}

impl SurveyFormConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.enrichment.validate()?;
        Ok(config)
    }
}

/// Behavior of the form session itself.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormSettings {
    /// Start a fresh form when the confirmation popup is closed.
    pub reset_on_close: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            reset_on_close: true,
        }
    }
}

/// Settings for the trivia question service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrichmentConfig {
    /// Endpoint queried with `amount`, `category` and `encode` parameters.
    pub base_url: String,
    /// Number of questions requested per submission.
    pub amount: u8,
    pub timeout_ms: u64,
    /// Raw topic value -> trivia category id.
    pub categories: BTreeMap<String, u32>,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            base_url: "https://opentdb.com/api.php".to_string(),
            amount: 5,
            timeout_ms: 10_000,
            categories: BTreeMap::from([
                ("Technology".to_string(), 18),
                ("Health".to_string(), 17),
                ("Education".to_string(), 9),
            ]),
        }
    }
}

impl EnrichmentConfig {
    /// Largest batch the trivia service hands out per request.
    pub const MAX_AMOUNT: u8 = 50;

    /// Category id configured for a raw topic value.
    pub fn category_for(&self, topic: &str) -> Option<u32> {
        self.categories.get(topic).copied()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("enrichment.base_url is empty".into()));
        }
        if self.amount == 0 || self.amount > Self::MAX_AMOUNT {
            return Err(ConfigError::Invalid(format!(
                "enrichment.amount must be between 1 and {}, got {}",
                Self::MAX_AMOUNT,
                self.amount
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "enrichment.timeout_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}
