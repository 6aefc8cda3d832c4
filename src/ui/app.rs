use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::ui::presenter::TerminalPresenter;
use crate::wizard::{
    ClickOutcome, Control, InputField, Interaction, NavigationError, NavigationOutcome, Step,
    Wizard, WizardSignal,
};

/// Where key presses go.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Keys navigate and press buttons.
    Navigation,
    /// Keys edit the field at this position on the current step.
    Field(usize),
}

/// Why the app stopped.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExitReason {
    Quit,
    Cancelled,
    Finished,
}

/// Status line shown under the step body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Notice {
    Info(String),
    Error(String),
}

pub struct App {
    wizard: Wizard<TerminalPresenter>,
    focus: Focus,
    exit: Rc<RefCell<Option<ExitReason>>>,
    notice: Option<Notice>,
}

impl App {
    pub fn new(mut wizard: Wizard<TerminalPresenter>) -> Self {
        let exit = Rc::new(RefCell::new(None));

        let on_cancel = Rc::clone(&exit);
        wizard.on_cancel(move |interaction| {
            tracing::info!(detail = ?interaction.detail, "Wizard cancelled");
            *on_cancel.borrow_mut() = Some(ExitReason::Cancelled);
        });
        let on_finish = Rc::clone(&exit);
        wizard.on_finish(move |interaction| {
            tracing::info!(detail = ?interaction.detail, "Wizard finished");
            *on_finish.borrow_mut() = Some(ExitReason::Finished);
        });
        wizard.subscribe(|signal| {
            if let WizardSignal::Activate { index, id } = signal {
                tracing::debug!(index, %id, "Step activated");
            }
        });

        Self {
            wizard,
            focus: Focus::Navigation,
            exit,
            notice: None,
        }
    }

    pub fn wizard(&self) -> &Wizard<TerminalPresenter> {
        &self.wizard
    }

    pub fn presenter(&self) -> &TerminalPresenter {
        self.wizard.presenter()
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.exit.borrow().is_some()
    }

    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit.borrow().clone()
    }

    pub fn request_quit(&mut self) {
        self.exit.borrow_mut().get_or_insert(ExitReason::Quit);
    }

    /// Advance running effects and feed finished tickets back to the wizard.
    pub fn on_tick(&mut self, elapsed: Duration) {
        if !self.presenter().is_animating() {
            return;
        }
        let finished = self.wizard.presenter_mut().advance(elapsed);
        for ticket in finished {
            self.wizard.complete_effect(ticket);
        }
    }

    pub fn current_step(&self) -> Option<&Step> {
        self.wizard.current_step()
    }

    fn current_fields(&self) -> &[InputField] {
        self.current_step().map(Step::fields).unwrap_or_default()
    }

    // Navigation

    pub fn press(&mut self, control: Control, detail: &str) {
        let interaction = Interaction::new(control).with_detail(detail);
        let result = self.wizard.press(interaction);
        self.report(result);
    }

    pub fn first(&mut self) {
        let result = self.wizard.first_step().map(ClickOutcome::Navigated);
        self.report(result);
    }

    pub fn last(&mut self) {
        let result = self.wizard.last_step().map(ClickOutcome::Navigated);
        self.report(result);
    }

    fn report(&mut self, result: Result<ClickOutcome, NavigationError>) {
        match result {
            Ok(ClickOutcome::Navigated(outcome)) => {
                if outcome.moved() {
                    self.focus = Focus::Navigation;
                    self.notice = None;
                } else if let NavigationOutcome::Vetoed { step } = outcome {
                    self.notice = Some(Notice::Error(format!(
                        "Fill in every required field on '{step}' first"
                    )));
                }
            }
            Ok(ClickOutcome::Ignored) => {
                self.notice = Some(Notice::Info("Not available on this step".to_string()));
            }
            Ok(ClickOutcome::Signalled) => {}
            Err(NavigationError::TransitionInFlight { .. }) => {}
            Err(err) => self.notice = Some(Notice::Error(err.to_string())),
        }
    }

    // Form editing

    /// Move focus to the next field of the current step, wrapping back to navigation.
    pub fn cycle_focus(&mut self) {
        let count = self.current_fields().len();
        self.focus = match self.focus {
            _ if count == 0 => Focus::Navigation,
            Focus::Navigation => Focus::Field(0),
            Focus::Field(index) if index + 1 < count => Focus::Field(index + 1),
            Focus::Field(_) => Focus::Navigation,
        };
    }

    pub fn leave_field(&mut self) {
        self.focus = Focus::Navigation;
    }

    pub fn type_char(&mut self, ch: char) {
        self.edit_focused(|value| value.push(ch));
    }

    pub fn backspace(&mut self) {
        self.edit_focused(|value| {
            value.pop();
        });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Focus::Field(index) = self.focus else {
            return;
        };
        let Some(step) = self.current_step() else {
            return;
        };
        let Some(field) = step.fields().get(index) else {
            return;
        };

        let id = step.id().clone();
        let name = field.name.clone();
        let mut value = field.value.clone();
        edit(&mut value);

        if let Err(err) = self.wizard.update_field(&id, &name, value) {
            self.notice = Some(Notice::Error(err.to_string()));
        }
    }

    /// Field values of every step, keyed by step id and field name.
    pub fn form_values(&self) -> serde_json::Value {
        let mut steps = serde_json::Map::new();
        for step in self.wizard.registry().iter() {
            if step.fields().is_empty() {
                continue;
            }
            let fields = step
                .fields()
                .iter()
                .map(|f| (f.name.clone(), serde_json::Value::from(f.value.clone())))
                .collect();
            steps.insert(step.id().to_string(), serde_json::Value::Object(fields));
        }
        serde_json::Value::Object(steps)
    }
}
