//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{JobkitError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;
use tracing::info;

impl Config {
    /// Load config from a JSON file.
    ///
    /// Unknown fields are ignored and missing sections take their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            JobkitError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Load the config, writing the default file first if none exists.
    pub fn load_or_init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            let config = Config::default();
            atomic_write_file(path, &config.to_json()?)?;
            info!(path = %path.display(), "created default config");
            return Ok(config);
        }
        Self::load(path)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)
            .map_err(|e| JobkitError::ConfigError(format!("failed to parse config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self).map_err(|e| {
            JobkitError::ConfigError(format!("failed to serialize config to JSON: {}", e))
        })?;
        json.push('\n');
        Ok(json)
    }

    /// Save config atomically.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_json()?)
    }

    /// Validate config values.
    ///
    /// - `quality_gates.min_priority_score` must lie on the 4-40 rubric
    /// - `email_settings.max_words` and `follow_up_days` must be positive
    /// - every `targets` rate must be within 0.0..=1.0
    pub fn validate(&self) -> Result<()> {
        let min = self.quality_gates.min_priority_score;
        if !(4..=40).contains(&min) {
            return Err(JobkitError::ConfigError(format!(
                "config validation failed: quality_gates.min_priority_score must be between 4 and 40 (found {})",
                min
            )));
        }

        if self.email_settings.max_words == 0 {
            return Err(JobkitError::ConfigError(
                "config validation failed: email_settings.max_words must be greater than 0"
                    .to_string(),
            ));
        }

        if self.email_settings.follow_up_days <= 0 {
            return Err(JobkitError::ConfigError(
                "config validation failed: email_settings.follow_up_days must be greater than 0"
                    .to_string(),
            ));
        }

        let rates = [
            ("email_response_rate", self.targets.email_response_rate),
            ("interview_conversion", self.targets.interview_conversion),
            ("offer_rate", self.targets.offer_rate),
        ];
        for (name, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(JobkitError::ConfigError(format!(
                    "config validation failed: targets.{} must be between 0.0 and 1.0 (found {})",
                    name, rate
                )));
            }
        }

        Ok(())
    }
}
