//! The wizard core: step registry, navigation state machine, validation
//! gate and display synchronizers, driven through a [`Presenter`].

mod effects;
mod machine;
mod navigator;
mod presenter;
mod signal;
mod step;
mod sync;
mod transition;
mod validation;

pub use effects::{EffectPlayer, Playback, Stage};
pub use machine::{ClickOutcome, Wizard, WizardBuilder};
pub use navigator::{NavTarget, NavigationError, NavigationOutcome, WizardState};
pub use presenter::{EffectAction, EffectRequest, EffectTarget, EffectTicket, Presenter};
pub use signal::{Control, Interaction, WizardSignal};
pub use step::{InputField, RegistryError, Step, StepDefinition, StepId, StepRegistry};
pub use sync::{
    functional_step_count, ButtonView, ButtonsView, CounterView, EntryStatus, MenuEntry,
    MenuView, TitleView,
};
pub use transition::TransitionPhase;
pub use validation::{FieldValidator, RequiredFields, ValidationGate};
