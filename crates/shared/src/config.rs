//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report generation configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

/// Report generation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Decimal places applied when rounding report figures.
    #[serde(default = "default_float_precision")]
    pub float_precision: u32,
    /// Currency assumed when neither the filters nor the company provide one.
    #[serde(default = "default_fallback_currency")]
    pub fallback_currency: String,
}

fn default_float_precision() -> u32 {
    2
}

fn default_fallback_currency() -> String {
    "USD".to_string()
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            float_precision: default_float_precision(),
            fallback_currency: default_fallback_currency(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOLIO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
