//! Crate-level error aggregating every recoverable failure.

use thiserror::Error;

use crate::config::{DefinitionError, OptionError};
use crate::wizard::{NavigationError, RegistryError, StepId};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("Navigation failed: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Option error: {0}")]
    Option(#[from] OptionError),

    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Step '{step}' has no field named '{field}'")]
    UnknownField { step: StepId, field: String },

    #[error("Wizard has been destroyed")]
    Destroyed,
}
