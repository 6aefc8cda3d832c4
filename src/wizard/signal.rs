//! Lifecycle and button signals delivered to the embedding application.

use std::fmt;

use super::step::StepId;

/// A clickable control of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Cancel,
    Previous,
    Next,
    Finish,
    MenuEntry(usize),
}

/// A user interaction with a control, forwarded with the cancel and finish signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub control: Control,
    /// Free-form description supplied by the presenter (key name, click position).
    pub detail: Option<String>,
}

impl Interaction {
    pub fn new(control: Control) -> Self {
        Self {
            control,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardSignal {
    Activate { index: usize, id: StepId },
    Deactivate { index: usize, id: StepId },
    Cancel(Interaction),
    Finish(Interaction),
}

type Listener = Box<dyn FnMut(&WizardSignal)>;

/// Ordered list of signal listeners.
#[derive(Default)]
pub struct SignalBus {
    listeners: Vec<Listener>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&WizardSignal) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, signal: &WizardSignal) {
        tracing::trace!(?signal, listeners = self.listeners.len(), "Emitting signal");
        for listener in &mut self.listeners {
            listener(signal);
        }
    }

    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}

impl fmt::Debug for SignalBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = SignalBus::new();
        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_| seen.borrow_mut().push(tag));
        }

        bus.emit(&WizardSignal::Finish(Interaction::new(Control::Finish)));
        assert_eq!(*seen.borrow(), vec!["a", "b"]);

        bus.clear();
        bus.emit(&WizardSignal::Cancel(Interaction::new(Control::Cancel)));
        assert_eq!(seen.borrow().len(), 2);
    }
}
