//! Wizard configuration: the typed option tree, the recognized option
//! paths, the per-wizard option store and the on-disk definition format.

mod loader;
mod path;
mod store;
mod types;

pub use loader::{DefinitionError, WizardDefinition};
pub use path::{ButtonField, CounterField, EffectField, OptionPath};
pub use store::{OptionChange, OptionError, OptionStore};
pub use types::{
    ButtonOptions, ButtonType, CounterOptions, CounterType, EffectDuration, EffectGroup,
    EffectPhase, EffectSpec, EffectsOptions, HighlightEffects, TextOrient, TransitionEffects,
    WizardOptions,
};
