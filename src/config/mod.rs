#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;

use crate::domain::ports::{ConfigProvider, LookupSource};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Effective settings once command-line overrides are laid over the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub source: LookupSource,
}

impl LookupSettings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            base_url: config.customer_api_base_url().to_string(),
            timeout_seconds: config.timeout_seconds(),
            source: config.lookup_source(),
        }
    }

    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
        source: Option<LookupSource>,
    ) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        if timeout_seconds.is_some() {
            self.timeout_seconds = timeout_seconds;
        }
        if let Some(source) = source {
            self.source = source;
        }
        self
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl ConfigProvider for LookupSettings {
    fn customer_api_base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn lookup_source(&self) -> LookupSource {
        self.source
    }
}

impl Validate for LookupSettings {
    fn validate(&self) -> Result<()> {
        toml_config::validate_settings(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let file = TomlConfig::from_toml_str(
            r#"
[customer_api]
base_url = "https://file.example.com"
timeout_seconds = 30
"#,
        )
        .unwrap();

        let settings = LookupSettings::from_toml(&file).with_overrides(
            Some("http://localhost:8080".to_string()),
            None,
            Some(LookupSource::Remote),
        );

        assert_eq!(settings.base_url, "http://localhost:8080");
        assert_eq!(settings.timeout_seconds, Some(30));
        assert_eq!(settings.source, LookupSource::Remote);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_default_settings_are_canned() {
        let settings = LookupSettings::default();
        assert_eq!(settings.source, LookupSource::Canned);
        assert!(settings.validate().is_ok());
    }
}
