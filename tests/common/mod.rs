//! Shared test utilities: a recording presenter and wizard builders.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use stepwise::config::WizardOptions;
use stepwise::wizard::{
    ButtonsView, CounterView, EffectAction, EffectRequest, EffectTarget, EffectTicket,
    InputField, MenuView, Presenter, StepDefinition, StepRegistry, TitleView, Wizard,
    WizardBuilder, WizardSignal,
};

/// Everything the wizard asked the presentation layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Effect(EffectRequest),
    HideOthers(usize),
    Title(TitleView),
    Menu(Option<MenuView>),
    Counter(Option<CounterView>),
    Buttons(ButtonsView),
    Progress(u8),
    Teardown,
}

#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<Call>,
}

impl RecordingPresenter {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn effects(&self) -> Vec<&EffectRequest> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Effect(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    /// Effects on one target, in request order.
    pub fn effects_on(&self, target: EffectTarget) -> Vec<&EffectRequest> {
        self.effects()
            .into_iter()
            .filter(|request| request.target == target)
            .collect()
    }

    /// Ticket of the latest animated effect on `target`.
    pub fn pending_ticket(&self, target: EffectTarget, action: EffectAction) -> Option<EffectTicket> {
        self.effects()
            .into_iter()
            .rev()
            .find(|r| r.target == target && r.action == action && !r.is_instant())
            .map(|r| r.ticket)
    }

    pub fn last_buttons(&self) -> Option<&ButtonsView> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Buttons(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_title(&self) -> Option<&TitleView> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Title(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_counter(&self) -> Option<&Option<CounterView>> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Counter(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_menu(&self) -> Option<&Option<MenuView>> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Menu(view) => Some(view),
            _ => None,
        })
    }

    pub fn last_progress(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Progress(percent) => Some(*percent),
            _ => None,
        })
    }
}

impl Presenter for RecordingPresenter {
    fn play_effect(&mut self, request: EffectRequest) {
        self.calls.push(Call::Effect(request));
    }

    fn hide_other_steps(&mut self, visible: usize) {
        self.calls.push(Call::HideOthers(visible));
    }

    fn render_title(&mut self, view: &TitleView) {
        self.calls.push(Call::Title(view.clone()));
    }

    fn render_menu(&mut self, view: Option<&MenuView>) {
        self.calls.push(Call::Menu(view.cloned()));
    }

    fn render_counter(&mut self, view: Option<&CounterView>) {
        self.calls.push(Call::Counter(view.cloned()));
    }

    fn render_buttons(&mut self, view: &ButtonsView) {
        self.calls.push(Call::Buttons(view.clone()));
    }

    fn render_progress(&mut self, percent: u8) {
        self.calls.push(Call::Progress(percent));
    }

    fn teardown(&mut self) {
        self.calls.push(Call::Teardown);
    }
}

/// `n` steps titled "Step 0".. with fallback ids.
pub fn registry(n: usize) -> StepRegistry {
    StepRegistry::build(
        (0..n)
            .map(|i| StepDefinition::titled(format!("Step {i}")))
            .collect(),
    )
    .expect("registry")
}

pub fn wizard(n: usize, options: WizardOptions) -> Wizard<RecordingPresenter> {
    Wizard::new(registry(n), options, RecordingPresenter::default())
}

/// Options with every effect group animated.
pub fn animated() -> WizardOptions {
    let mut options = WizardOptions::default();
    options.effects.enable = true;
    options
}

/// Records every signal a wizard emits.
#[derive(Clone, Default)]
pub struct SignalLog(Rc<RefCell<Vec<WizardSignal>>>);

impl SignalLog {
    pub fn listener(&self) -> impl FnMut(&WizardSignal) + 'static {
        let log = Rc::clone(&self.0);
        move |signal| log.borrow_mut().push(signal.clone())
    }

    pub fn take(&self) -> Vec<WizardSignal> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

/// Wizard whose signals, including the initial activation, go to the returned log.
pub fn logged_wizard(
    registry: StepRegistry,
    options: WizardOptions,
) -> (Wizard<RecordingPresenter>, SignalLog) {
    let log = SignalLog::default();
    let wizard = WizardBuilder::new(registry, options)
        .subscribe(log.listener())
        .build(RecordingPresenter::default());
    (wizard, log)
}

/// A form step with one required field.
pub fn form_step(id: &str) -> StepDefinition {
    StepDefinition::titled(id)
        .with_id(id)
        .with_field(InputField::new("name").required())
}

pub const NORMAL: Duration = Duration::from_millis(400);
