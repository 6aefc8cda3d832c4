//! The wizard: one step registry, one option store, one presenter.
//!
//! Navigation requests resolve and validate against the navigator, then
//! commit and drive the step effect chain:
//!
//! ```text
//! Idle --hide(from)--> Leaving --complete--> activate(to), show(to) --> Entering --complete--> Idle
//! ```
//!
//! Display synchronizers run right after the commit, in the same call.

use serde_json::Value;

use crate::config::{
    DefinitionError, EffectGroup, EffectPhase, OptionChange, OptionError, OptionStore,
    WizardDefinition, WizardOptions,
};
use crate::error::WizardError;

use super::effects::{EffectPlayer, Stage};
use super::navigator::{NavTarget, NavigationError, NavigationOutcome, Navigator, WizardState};
use super::presenter::{EffectTarget, EffectTicket, Presenter};
use super::signal::{Control, Interaction, SignalBus, WizardSignal};
use super::step::{Step, StepId, StepRegistry};
use super::sync::{
    functional_step_count, ButtonsSync, ButtonsView, CounterSync, CounterView, MenuSync,
    MenuView, TitleSync, TitleView,
};
use super::transition::{TransitionIntent, TransitionPhase};
use super::validation::{FieldValidator, ValidationGate};

/// What a control press led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Navigated(NavigationOutcome),
    /// A cancel or finish signal went out.
    Signalled,
    /// Hidden button, or a menu entry that is not navigable.
    Ignored,
}

/// Collects everything a wizard needs before its initial activation.
pub struct WizardBuilder {
    registry: StepRegistry,
    options: WizardOptions,
    validator: Option<Box<dyn FieldValidator>>,
    signals: SignalBus,
}

impl WizardBuilder {
    pub fn new(registry: StepRegistry, options: WizardOptions) -> Self {
        Self {
            registry,
            options,
            validator: None,
            signals: SignalBus::new(),
        }
    }

    /// Replace the bundled [`RequiredFields`](super::RequiredFields) validator.
    pub fn validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Listen to every signal, including the initial activation.
    pub fn subscribe(mut self, listener: impl FnMut(&WizardSignal) + 'static) -> Self {
        self.signals.subscribe(listener);
        self
    }

    /// Build the wizard and activate the first step without effects.
    pub fn build<P: Presenter>(self, presenter: P) -> Wizard<P> {
        let Self {
            registry,
            options,
            validator,
            signals,
        } = self;

        let mut wizard = Wizard {
            navigator: Navigator::new(registry.len()),
            gate: validator
                .map(ValidationGate::from_boxed)
                .unwrap_or_default(),
            player: EffectPlayer::new(),
            title: TitleSync::new(options.hide_title),
            menu: options.menu_enable.then(|| MenuSync::build(&registry)),
            counter: options.counter.enable.then(CounterSync::new),
            buttons: ButtonsSync::new(&options.buttons),
            store: OptionStore::new(options),
            registry,
            signals,
            presenter,
            destroyed: false,
        };

        tracing::debug!(steps = wizard.registry.len(), "Wizard created");
        if let Err(err) = wizard.transition_to(NavTarget::Index(0)) {
            tracing::warn!(error = %err, "Initial activation failed");
        }
        wizard
    }
}

/// A step-sequencer bound to one presenter.
pub struct Wizard<P: Presenter> {
    registry: StepRegistry,
    store: OptionStore,
    navigator: Navigator,
    gate: ValidationGate,
    player: EffectPlayer,
    title: TitleSync,
    menu: Option<MenuSync>,
    counter: Option<CounterSync>,
    buttons: ButtonsSync,
    signals: SignalBus,
    presenter: P,
    destroyed: bool,
}

impl<P: Presenter> Wizard<P> {
    pub fn new(registry: StepRegistry, options: WizardOptions, presenter: P) -> Self {
        WizardBuilder::new(registry, options).build(presenter)
    }

    pub fn from_definition(
        definition: WizardDefinition,
        presenter: P,
    ) -> Result<Self, DefinitionError> {
        let (registry, options) = definition.into_parts()?;
        Ok(Self::new(registry, options, presenter))
    }

    // Navigation

    pub fn first_step(&mut self) -> Result<NavigationOutcome, NavigationError> {
        self.transition_to(NavTarget::Index(0))
    }

    pub fn last_step(&mut self) -> Result<NavigationOutcome, NavigationError> {
        let target = self.navigator.last_target();
        self.transition_to(target)
    }

    pub fn next_step(&mut self) -> Result<NavigationOutcome, NavigationError> {
        let target = self.navigator.next_target();
        self.transition_to(target)
    }

    pub fn previous_step(&mut self) -> Result<NavigationOutcome, NavigationError> {
        let target = self.navigator.previous_target();
        self.transition_to(target)
    }

    /// Jump to an index or a step id.
    pub fn change_step(
        &mut self,
        target: impl Into<NavTarget>,
    ) -> Result<NavigationOutcome, NavigationError> {
        self.transition_to(target.into())
    }

    fn transition_to(&mut self, target: NavTarget) -> Result<NavigationOutcome, NavigationError> {
        self.ensure_alive()?;
        self.navigator.ensure_idle().inspect_err(|err| {
            tracing::debug!(?target, error = %err, "Ignoring navigation during transition");
        })?;
        let to = self
            .navigator
            .resolve(&target, &self.registry)
            .inspect_err(|err| tracing::debug!(error = %err, "Navigation rejected"))?;

        if let Some(from) = self.navigator.current() {
            if let Some(step) = self.registry.get(from) {
                self.signals.emit(&WizardSignal::Deactivate {
                    index: from,
                    id: step.id().clone(),
                });
                if self.store.options().validate && !self.gate.allows(step) {
                    if self.store.options().debug {
                        tracing::debug!(step = %step.id(), to, "Validation kept the wizard in place");
                    }
                    return Ok(NavigationOutcome::Vetoed {
                        step: step.id().clone(),
                    });
                }
            }
        }

        let commit = self.navigator.commit(to);
        if self.store.options().debug {
            tracing::debug!(from = ?commit.from, to, initial = commit.initial, "Step committed");
        }

        match commit.from {
            Some(from) => self.leave(from, commit.to),
            None => self.enter(commit.to, true),
        }
        self.synchronize(commit.initial);

        Ok(NavigationOutcome::Moved {
            from: commit.from,
            to: commit.to,
        })
    }

    fn leave(&mut self, from: usize, to: usize) {
        let playback = self.stage(false).play(
            EffectGroup::Step,
            EffectPhase::Hide,
            EffectTarget::Step(from),
        );
        self.navigator.dispatch(TransitionIntent::Leave {
            from,
            to,
            ticket: playback.ticket,
        });
        if playback.instant {
            self.complete_effect(playback.ticket);
        }
    }

    fn enter(&mut self, step: usize, initial: bool) {
        if let Some(id) = self.registry.get(step).map(|s| s.id().clone()) {
            self.signals.emit(&WizardSignal::Activate { index: step, id });
        }
        let playback = self.stage(initial).play(
            EffectGroup::Step,
            EffectPhase::Show,
            EffectTarget::Step(step),
        );
        self.navigator.dispatch(TransitionIntent::Enter {
            step,
            ticket: playback.ticket,
        });
        if playback.instant {
            self.complete_effect(playback.ticket);
        }
    }

    /// Report that the presenter finished an animated effect.
    ///
    /// Returns true when the ticket advanced the step transition. Tickets of
    /// title, menu and counter effects are accepted and ignored.
    pub fn complete_effect(&mut self, ticket: EffectTicket) -> bool {
        if self.destroyed {
            return false;
        }
        let phase = self.navigator.phase();
        if phase.awaiting() != Some(ticket) {
            tracing::trace!(%ticket, phase = phase.name(), "Ticket does not advance the transition");
            return false;
        }
        match phase {
            TransitionPhase::Leaving { to, .. } => {
                self.enter(to, false);
                true
            }
            TransitionPhase::Entering { step, .. } => {
                self.navigator.dispatch(TransitionIntent::Settle { ticket });
                self.presenter.hide_other_steps(step);
                true
            }
            TransitionPhase::Idle => false,
        }
    }

    fn stage(&mut self, initial: bool) -> Stage<'_> {
        Stage::new(
            &mut self.presenter,
            &mut self.player,
            &self.store.options().effects,
            initial,
        )
    }

    fn synchronize(&mut self, initial: bool) {
        let current = self.navigator.current_index();
        let total = self.registry.len();
        let options = self.store.options();

        self.buttons
            .refresh(&mut self.presenter, current, total, &options.buttons);

        let mut stage = Stage::new(
            &mut self.presenter,
            &mut self.player,
            &options.effects,
            initial,
        );
        if let Some(step) = self.registry.get(current) {
            self.title.refresh(&mut stage, step.title());
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.refresh(&mut stage, current);
        }
        if let Some(counter) = self.counter.as_mut() {
            counter.refresh(&mut stage, current, total, &options.counter);
        }
    }

    // Options

    /// Write an option and re-render whatever depends on it before returning.
    pub fn set_option(&mut self, path: &str, value: Value) -> Result<OptionChange, WizardError> {
        if self.destroyed {
            return Err(WizardError::Destroyed);
        }
        let change = self.store.set(path, value).inspect_err(|err| {
            tracing::warn!(path, error = %err, "Option write rejected");
        })?;
        self.apply_change(change);
        Ok(change)
    }

    pub fn option(&self, path: &str) -> Result<Value, OptionError> {
        self.store.get(path)
    }

    pub fn options(&self) -> &WizardOptions {
        self.store.options()
    }

    fn apply_change(&mut self, change: OptionChange) {
        let current = self.navigator.current_index();
        let total = self.registry.len();
        let options = self.store.options();

        match change {
            OptionChange::Inert => {}
            OptionChange::TitleVisibility => {
                self.title.set_hidden(&mut self.presenter, options.hide_title);
            }
            OptionChange::Menu { enabled: true } => {
                let menu = self
                    .menu
                    .get_or_insert_with(|| MenuSync::build(&self.registry));
                let mut stage = Stage::new(
                    &mut self.presenter,
                    &mut self.player,
                    &options.effects,
                    false,
                );
                menu.refresh(&mut stage, current);
            }
            OptionChange::Menu { enabled: false } => {
                if self.menu.take().is_some() {
                    self.presenter.render_menu(None);
                }
            }
            OptionChange::Buttons => {
                self.buttons
                    .refresh(&mut self.presenter, current, total, &options.buttons);
            }
            OptionChange::Button(field) => {
                self.buttons
                    .apply(&mut self.presenter, field, &options.buttons);
            }
            OptionChange::CounterRebuild | OptionChange::CounterToggle { .. } => {
                if options.counter.enable {
                    let counter = self.counter.insert(CounterSync::new());
                    let mut stage = Stage::new(
                        &mut self.presenter,
                        &mut self.player,
                        &options.effects,
                        false,
                    );
                    counter.refresh(&mut stage, current, total, &options.counter);
                } else if self.counter.take().is_some() {
                    self.presenter.render_counter(None);
                }
            }
            OptionChange::CounterRefresh(_) => {
                if let Some(counter) = self.counter.as_mut() {
                    let mut stage = Stage::new(
                        &mut self.presenter,
                        &mut self.player,
                        &options.effects,
                        false,
                    );
                    counter.refresh(&mut stage, current, total, &options.counter);
                }
            }
        }
    }

    // Controls

    /// Handle a click on a button or a menu entry.
    pub fn press(&mut self, interaction: Interaction) -> Result<ClickOutcome, NavigationError> {
        self.ensure_alive()?;

        let control = interaction.control;
        if let Control::MenuEntry(index) = control {
            return match self.menu.as_ref().and_then(|menu| menu.click(index)) {
                Some(target) => self.change_step(target).map(ClickOutcome::Navigated),
                None => Ok(ClickOutcome::Ignored),
            };
        }

        let visible = self
            .buttons
            .view()
            .button(control)
            .is_some_and(|button| button.visible);
        if !visible {
            tracing::trace!(?control, "Ignoring hidden control");
            return Ok(ClickOutcome::Ignored);
        }

        match control {
            Control::Previous => self.previous_step().map(ClickOutcome::Navigated),
            Control::Next => self.next_step().map(ClickOutcome::Navigated),
            Control::Cancel => {
                self.signals.emit(&WizardSignal::Cancel(interaction));
                Ok(ClickOutcome::Signalled)
            }
            Control::Finish => {
                self.signals.emit(&WizardSignal::Finish(interaction));
                Ok(ClickOutcome::Signalled)
            }
            Control::MenuEntry(_) => Ok(ClickOutcome::Ignored),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WizardSignal) + 'static) {
        self.signals.subscribe(listener);
    }

    pub fn on_cancel(&mut self, mut callback: impl FnMut(&Interaction) + 'static) {
        self.signals.subscribe(move |signal| {
            if let WizardSignal::Cancel(interaction) = signal {
                callback(interaction);
            }
        });
    }

    pub fn on_finish(&mut self, mut callback: impl FnMut(&Interaction) + 'static) {
        self.signals.subscribe(move |signal| {
            if let WizardSignal::Finish(interaction) = signal {
                callback(interaction);
            }
        });
    }

    // Form state

    /// Set the value of an input field on a step.
    pub fn update_field(
        &mut self,
        step: &StepId,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        if self.destroyed {
            return Err(WizardError::Destroyed);
        }
        let input = self
            .registry
            .field_mut(step, field)
            .ok_or_else(|| WizardError::UnknownField {
                step: step.clone(),
                field: field.to_string(),
            })?;
        input.value = value.into();
        Ok(())
    }

    /// Tear down menu, counter and presenter output. Every later operation
    /// fails with `Destroyed`.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.menu = None;
        self.counter = None;
        self.signals.clear();
        self.presenter.teardown();
        self.destroyed = true;
        tracing::debug!("Wizard destroyed");
    }

    // Accessors

    pub fn state(&self) -> WizardState {
        let total = self.registry.len();
        WizardState {
            current_index: self.navigator.current_index(),
            total_steps: total,
            functional_step_count: functional_step_count(total, &self.store.options().counter),
        }
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.registry.get(self.navigator.current_index())
    }

    pub fn previous_step_index(&self) -> Option<usize> {
        self.navigator.previous()
    }

    pub fn phase(&self) -> TransitionPhase {
        self.navigator.phase()
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn title_view(&self) -> &TitleView {
        self.title.view()
    }

    pub fn menu_view(&self) -> Option<&MenuView> {
        self.menu.as_ref().map(MenuSync::view)
    }

    pub fn counter_view(&self) -> Option<&CounterView> {
        self.counter.as_ref().and_then(CounterSync::view)
    }

    pub fn buttons_view(&self) -> &ButtonsView {
        self.buttons.view()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn ensure_alive(&self) -> Result<(), NavigationError> {
        if self.destroyed {
            Err(NavigationError::Destroyed)
        } else {
            Ok(())
        }
    }
}
