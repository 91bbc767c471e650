//! Config file loading.

use crate::types::{ClusterConfig, RuleEntry, SCHEDULE_PREFIX};
use camino::Utf8Path;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config section {0} not found")]
    MissingSection(String),
}

impl<G, R> ClusterConfig<G, R>
where
    G: DeserializeOwned,
    R: DeserializeOwned,
{
    /// Load a backend's configuration from a JSON file.
    ///
    /// `general_section` names the backend-wide section (for example
    /// `qsub_general`). Every `schedule_*` key becomes a rule entry; other
    /// top-level keys, such as another backend's general section, are
    /// ignored.
    pub fn load(path: &Utf8Path, general_section: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let mut table: serde_json::Map<String, Value> = serde_json::from_str(&content)?;

        let general = table
            .remove(general_section)
            .ok_or_else(|| ConfigError::MissingSection(general_section.to_string()))?;
        let general: G = serde_json::from_value(general)?;

        let mut rules = HashMap::new();
        for (key, value) in table {
            if key.starts_with(SCHEDULE_PREFIX) {
                rules.insert(key, serde_json::from_value::<RuleEntry<R>>(value)?);
            }
        }

        Ok(Self { general, rules })
    }
}
