use crate::config::{ButtonField, ButtonOptions, ButtonType};
use crate::wizard::presenter::Presenter;
use crate::wizard::signal::Control;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub visible: bool,
    pub kind: ButtonType,
}

/// The four navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonsView {
    pub cancel: ButtonView,
    pub previous: ButtonView,
    pub next: ButtonView,
    pub finish: ButtonView,
}

impl ButtonsView {
    /// Layout for `current` in a wizard of `total` steps.
    ///
    /// Previous shows after the first step, next before the last, finish
    /// only on the last.
    ///
    /// A single step is both first and last. It shows finish and no next,
    /// because next has no step to go to and the wizard could never be
    /// completed otherwise.
    pub fn compute(current: usize, total: usize, options: &ButtonOptions) -> Self {
        let last = total.saturating_sub(1);
        Self {
            cancel: ButtonView {
                label: options.cancel_text.clone(),
                visible: !options.cancel_hide,
                kind: options.cancel_type,
            },
            previous: ButtonView {
                label: options.previous_text.clone(),
                visible: current > 0,
                kind: ButtonType::Button,
            },
            next: ButtonView {
                label: options.next_text.clone(),
                visible: current < last,
                kind: ButtonType::Button,
            },
            finish: ButtonView {
                label: options.finish_text.clone(),
                visible: current == last,
                kind: options.finish_type,
            },
        }
    }

    pub fn button(&self, control: Control) -> Option<&ButtonView> {
        match control {
            Control::Cancel => Some(&self.cancel),
            Control::Previous => Some(&self.previous),
            Control::Next => Some(&self.next),
            Control::Finish => Some(&self.finish),
            Control::MenuEntry(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct ButtonsSync {
    view: ButtonsView,
}

impl ButtonsSync {
    pub fn new(options: &ButtonOptions) -> Self {
        Self {
            view: ButtonsView::compute(0, 1, options),
        }
    }

    pub fn view(&self) -> &ButtonsView {
        &self.view
    }

    pub fn refresh(
        &mut self,
        presenter: &mut dyn Presenter,
        current: usize,
        total: usize,
        options: &ButtonOptions,
    ) {
        self.view = ButtonsView::compute(current, total, options);
        presenter.render_buttons(&self.view);
    }

    /// Apply a single changed attribute, leaving the other buttons as they are.
    pub fn apply(&mut self, presenter: &mut dyn Presenter, field: ButtonField, options: &ButtonOptions) {
        match field {
            ButtonField::CancelHide => self.view.cancel.visible = !options.cancel_hide,
            ButtonField::CancelType => self.view.cancel.kind = options.cancel_type,
            ButtonField::FinishType => self.view.finish.kind = options.finish_type,
            ButtonField::CancelText => self.view.cancel.label = options.cancel_text.clone(),
            ButtonField::PreviousText => self.view.previous.label = options.previous_text.clone(),
            ButtonField::NextText => self.view.next.label = options.next_text.clone(),
            ButtonField::FinishText => self.view.finish.label = options.finish_text.clone(),
        }
        presenter.render_buttons(&self.view);
    }
}
