//! Presentation-layer capability consumed by the wizard.
//!
//! The wizard never draws anything itself. It hands view snapshots and
//! effect requests to a [`Presenter`], and the presenter reports finished
//! animations back through [`crate::wizard::Wizard::complete_effect`].

use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

use super::sync::{ButtonsView, CounterView, MenuView, TitleView};

/// Handle identifying one effect playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EffectTicket(u64);

impl EffectTicket {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EffectTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Element an effect plays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectTarget {
    Step(usize),
    Title,
    MenuEntry(usize),
    Counter,
}

/// What the effect does to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectAction {
    /// Element ends hidden.
    Hide,
    /// Element ends visible.
    Show,
    /// Element stays as is; attention effect only.
    Highlight,
}

/// One effect playback request.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectRequest {
    pub ticket: EffectTicket,
    pub target: EffectTarget,
    pub action: EffectAction,
    /// Effect name from the options (`slide`, `highlight`, ...).
    pub kind: String,
    pub options: Map<String, Value>,
    /// `None` means apply the end state instantly.
    pub duration: Option<Duration>,
}

impl EffectRequest {
    pub fn is_instant(&self) -> bool {
        self.duration.is_none()
    }
}

/// Presentation layer driven by the wizard.
///
/// For an animated request (`duration` is `Some`) the presenter must call
/// `Wizard::complete_effect(ticket)` once the animation ends. Instant
/// requests are completed by the wizard itself.
pub trait Presenter {
    /// Start (or instantly apply) an effect.
    fn play_effect(&mut self, request: EffectRequest);

    /// Hide every step panel except `visible`.
    fn hide_other_steps(&mut self, visible: usize);

    fn render_title(&mut self, view: &TitleView);

    /// `None` removes the menu.
    fn render_menu(&mut self, view: Option<&MenuView>);

    /// `None` removes the counter.
    fn render_counter(&mut self, view: Option<&CounterView>);

    fn render_buttons(&mut self, view: &ButtonsView);

    /// Progress-bar capability, `percent` in `0..=100`.
    fn render_progress(&mut self, percent: u8);

    /// Release everything the presenter built for this wizard.
    fn teardown(&mut self) {}
}
