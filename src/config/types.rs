//! Settings types for the generator binary.
//!
//! The core library takes no configuration; these settings only drive the
//! bootstrap binary.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Defines errors that may occur while loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings failed validation
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    /// Error reading the settings file
    #[error("Failed to load configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// Error parsing the settings file
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for one generation run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorSettings {
    /// Path to the JSON seed file holding the label records.
    pub labels_file: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self { labels_file: "labels.json".to_string() }
    }
}

impl GeneratorSettings {
    /// Validates the settings.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] describing the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels_file.is_empty() {
            return Err(ConfigError::Invalid("labelsFile: path cannot be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// デフォルト値の確認
    #[rstest]
    fn test_default_settings() {
        let settings = GeneratorSettings::default();

        assert_that!(settings.labels_file, eq("labels.json"));
        assert!(settings.validate().is_ok());
    }

    /// validate: 空のパスは無効
    #[rstest]
    fn test_validate_rejects_empty_labels_file() {
        let settings = GeneratorSettings { labels_file: String::new() };

        let result = settings.validate();

        let error_message = result.unwrap_err().to_string();
        assert_that!(error_message, contains_substring("Invalid configuration"));
        assert_that!(error_message, contains_substring("labelsFile"));
    }

    /// camelCase キーでデシリアライズされる
    #[rstest]
    fn test_deserialize_camel_case() {
        let settings: GeneratorSettings =
            serde_json::from_str(r#"{"labelsFile": "data/labels.json"}"#).unwrap();

        assert_that!(settings.labels_file, eq("data/labels.json"));
    }
}
