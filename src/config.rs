//! Loading and validation of the probe configuration (`appsettings.json`).

use crate::{
    constants::DEFAULT_CONFIG_PATH,
    probe::{ProbeError, Result},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Raw configuration as it appears on disk. Both keys are optional at this
/// stage so a missing key can be reported by name instead of as a parse error.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProbeConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

/// Configuration that has passed presence checks; values are used verbatim.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ProbeConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;

        Ok(config)
    }

    /// Load configuration from `appsettings.json` in the working directory.
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// Check that both values are present and non-empty, naming the missing
    /// key otherwise. This must run before any client construction.
    pub fn validated(self) -> Result<ValidatedConfig> {
        let base_url = match self.base_url {
            Some(url) if !url.is_empty() => url,
            _ => return Err(ProbeError::MissingConfig("BaseUrl")),
        };

        let api_key = match self.api_key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ProbeError::MissingConfig("ApiKey")),
        };

        Ok(ValidatedConfig { base_url, api_key })
    }
}
