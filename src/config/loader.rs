use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::store::{OptionError, OptionStore};
use crate::config::types::WizardOptions;
use crate::wizard::{RegistryError, StepDefinition, StepRegistry};

/// Errors that can occur when loading a wizard definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Failed to read wizard definition '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse wizard definition '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Options(#[from] OptionError),
}

/// A wizard as written on disk: options plus the ordered step list.
///
/// ```toml
/// [options]
/// menuEnable = true
///
/// [options.counter]
/// enable = true
///
/// [[steps]]
/// title = "Welcome"
/// body = "..."
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WizardDefinition {
    #[serde(default, deserialize_with = "options_over_defaults")]
    pub options: WizardOptions,
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
}

/// Tables in `[options]` only override the keys they name.
fn options_over_defaults<'de, D>(deserializer: D) -> Result<WizardOptions, D::Error>
where
    D: Deserializer<'de>,
{
    let partial = serde_json::Value::deserialize(deserializer)?;
    WizardOptions::overlaid(partial).map_err(serde::de::Error::custom)
}

impl WizardDefinition {
    /// Returns the default definition path.
    ///
    /// Uses `~/.config/stepwise/wizard.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current directory.
    pub fn default_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stepwise").join("wizard.toml")
    }

    /// Parse a definition from TOML text.
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, DefinitionError> {
        toml::from_str(content).map_err(|e| DefinitionError::Parse {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Load and parse a definition file.
    pub fn load_from(path: &Path) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|e| DefinitionError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let definition = Self::from_toml(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            steps = definition.steps.len(),
            "Loaded wizard definition"
        );
        Ok(definition)
    }

    /// Override one option by dotted path before the wizard is built.
    pub fn set_option(&mut self, path: &str, value: serde_json::Value) -> Result<(), DefinitionError> {
        let mut store = OptionStore::new(self.options.clone());
        store.set(path, value)?;
        self.options = store.options().clone();
        Ok(())
    }

    /// Build the step registry, consuming the step list.
    pub fn into_parts(self) -> Result<(StepRegistry, WizardOptions), DefinitionError> {
        let registry = StepRegistry::build(self.steps)?;
        Ok((registry, self.options))
    }
}
