//! The persisted configuration record and the store it lives in.

use crate::common::ConfigStoreError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_THEME_ID: &str = "one_dark_pro";

/// User-facing theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub current_theme_id: String,
    pub apply_to_content: bool,
    pub apply_to_chrome: bool,
    /// Style text appended verbatim after every derived artifact.
    pub override_text: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            current_theme_id: DEFAULT_THEME_ID.to_string(),
            apply_to_content: true,
            apply_to_chrome: true,
            override_text: String::new(),
        }
    }
}

impl Configuration {
    /// Shallow merge: every field set in `update` replaces the current value.
    pub fn merge(&mut self, update: ConfigurationUpdate) {
        if let Some(id) = update.current_theme_id {
            self.current_theme_id = id;
        }
        if let Some(enabled) = update.apply_to_content {
            self.apply_to_content = enabled;
        }
        if let Some(enabled) = update.apply_to_chrome {
            self.apply_to_chrome = enabled;
        }
        if let Some(text) = update.override_text {
            self.override_text = text;
        }
    }
}

/// Partial configuration. Unset fields keep their prior value on merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_theme_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_to_chrome: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_text: Option<String>,
}

impl ConfigurationUpdate {
    pub fn theme(id: impl Into<String>) -> Self {
        Self {
            current_theme_id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Synchronous persistence for [`Configuration`].
///
/// Failures are surfaced to the caller; nothing retries.
pub trait ConfigStore: Send {
    fn read(&self) -> Result<Configuration, ConfigStoreError>;
    fn write(&self, configuration: &Configuration) -> Result<(), ConfigStoreError>;
}

/// Store that keeps the record in memory. Used by embedders without a
/// persistent backend and by tests.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    stored: std::sync::Mutex<Configuration>,
}

impl MemoryConfigStore {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            stored: std::sync::Mutex::new(configuration),
        }
    }
}

impl ConfigStore for MemoryConfigStore {
    fn read(&self) -> Result<Configuration, ConfigStoreError> {
        let stored = self
            .stored
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(stored.clone())
    }

    fn write(&self, configuration: &Configuration) -> Result<(), ConfigStoreError> {
        let mut stored = self
            .stored
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *stored = configuration.clone();
        Ok(())
    }
}
