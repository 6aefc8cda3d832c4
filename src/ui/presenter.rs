//! Terminal implementation of [`Presenter`].
//!
//! Keeps the latest view of every wizard element and plays effects on a
//! countdown: each [`EffectRequest`] with a duration becomes an
//! [`Animation`] that [`TerminalPresenter::advance`] ticks down. Effects on
//! the same target queue up and run one after another. Finished tickets are
//! handed back so the caller can pass them to `Wizard::complete_effect`.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::wizard::{
    ButtonsView, CounterView, EffectAction, EffectRequest, EffectTarget, EffectTicket, MenuView,
    Presenter, TitleView,
};

/// An effect in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub ticket: EffectTicket,
    pub target: EffectTarget,
    pub action: EffectAction,
    pub kind: String,
    pub total: Duration,
    pub remaining: Duration,
}

impl Animation {
    /// Completed fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.total.is_zero() {
            return 1.0;
        }
        1.0 - self.remaining.as_secs_f64() / self.total.as_secs_f64()
    }
}

#[derive(Debug, Default)]
pub struct TerminalPresenter {
    title: TitleView,
    menu: Option<MenuView>,
    counter: Option<CounterView>,
    buttons: Option<ButtonsView>,
    progress: Option<u8>,
    visible_steps: BTreeSet<usize>,
    /// Running and queued effects in request order; per target, the first
    /// one is running.
    animations: Vec<Animation>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count down running effects by `elapsed` and return the tickets that finished.
    ///
    /// A queued effect starts on the tick after the one ahead of it finishes.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<EffectTicket> {
        let mut finished = Vec::new();
        let mut ticked: Vec<EffectTarget> = Vec::new();
        let mut pending = Vec::with_capacity(self.animations.len());
        for mut animation in std::mem::take(&mut self.animations) {
            if ticked.contains(&animation.target) {
                pending.push(animation);
                continue;
            }
            ticked.push(animation.target);
            animation.remaining = animation.remaining.saturating_sub(elapsed);
            if animation.remaining.is_zero() {
                finished.push(animation);
            } else {
                pending.push(animation);
            }
        }
        self.animations = pending;

        let mut tickets = Vec::with_capacity(finished.len());
        for animation in finished {
            self.apply_end_state(animation.target, animation.action);
            if let Some(next) = self.animation(animation.target).map(|a| a.action) {
                self.apply_start_state(animation.target, next);
            }
            tickets.push(animation.ticket);
        }
        tickets
    }

    /// Showing starts drawing immediately; hiding keeps the panel on screen
    /// until the effect runs out.
    fn apply_start_state(&mut self, target: EffectTarget, action: EffectAction) {
        if action == EffectAction::Show {
            self.apply_end_state(target, action);
        }
    }

    fn apply_end_state(&mut self, target: EffectTarget, action: EffectAction) {
        if let EffectTarget::Step(index) = target {
            match action {
                EffectAction::Hide => {
                    self.visible_steps.remove(&index);
                }
                EffectAction::Show => {
                    self.visible_steps.insert(index);
                }
                EffectAction::Highlight => {}
            }
        }
    }

    /// Running effect on `target`, if any. Queued effects are not reported.
    pub fn animation(&self, target: EffectTarget) -> Option<&Animation> {
        self.animations.iter().find(|a| a.target == target)
    }

    pub fn is_animating(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn title(&self) -> &TitleView {
        &self.title
    }

    pub fn menu(&self) -> Option<&MenuView> {
        self.menu.as_ref()
    }

    pub fn counter(&self) -> Option<&CounterView> {
        self.counter.as_ref()
    }

    pub fn buttons(&self) -> Option<&ButtonsView> {
        self.buttons.as_ref()
    }

    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    pub fn is_step_visible(&self, index: usize) -> bool {
        self.visible_steps.contains(&index)
    }

    /// Steps currently on screen, in index order.
    pub fn visible_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.visible_steps.iter().copied()
    }
}

impl Presenter for TerminalPresenter {
    fn play_effect(&mut self, request: EffectRequest) {
        let Some(total) = request.duration else {
            self.apply_end_state(request.target, request.action);
            return;
        };
        // Zero-length animations still owe a completion; they finish on the next tick.
        if self.animation(request.target).is_none() {
            self.apply_start_state(request.target, request.action);
        }
        self.animations.push(Animation {
            ticket: request.ticket,
            target: request.target,
            action: request.action,
            kind: request.kind,
            total,
            remaining: total,
        });
    }

    fn hide_other_steps(&mut self, visible: usize) {
        self.visible_steps.retain(|index| *index == visible);
        self.visible_steps.insert(visible);
    }

    fn render_title(&mut self, view: &TitleView) {
        self.title = view.clone();
    }

    fn render_menu(&mut self, view: Option<&MenuView>) {
        self.menu = view.cloned();
    }

    fn render_counter(&mut self, view: Option<&CounterView>) {
        self.counter = view.cloned();
        if self.counter.is_none() {
            self.progress = None;
        }
    }

    fn render_buttons(&mut self, view: &ButtonsView) {
        self.buttons = Some(view.clone());
    }

    fn render_progress(&mut self, percent: u8) {
        self.progress = Some(percent.min(100));
    }

    fn teardown(&mut self) {
        self.menu = None;
        self.counter = None;
        self.buttons = None;
        self.progress = None;
        self.visible_steps.clear();
        self.animations.clear();
    }
}
