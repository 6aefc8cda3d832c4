//! Effect gating and ticket allocation.

use crate::config::{EffectGroup, EffectPhase, EffectsOptions};

use super::presenter::{EffectAction, EffectRequest, EffectTarget, EffectTicket, Presenter};

/// Allocates effect tickets for one wizard.
#[derive(Debug, Default)]
pub struct EffectPlayer {
    issued: u64,
}

impl EffectPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_ticket(&mut self) -> EffectTicket {
        self.issued += 1;
        EffectTicket::new(self.issued)
    }
}

/// Result of asking the stage to play an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    pub ticket: EffectTicket,
    /// The end state was applied immediately; no completion will follow.
    pub instant: bool,
}

/// Everything a synchronizer needs to push output: the presenter, the
/// ticket source and the effect settings in force for this call.
pub struct Stage<'a> {
    presenter: &'a mut dyn Presenter,
    player: &'a mut EffectPlayer,
    effects: &'a EffectsOptions,
    initial: bool,
}

impl<'a> Stage<'a> {
    pub fn new(
        presenter: &'a mut dyn Presenter,
        player: &'a mut EffectPlayer,
        effects: &'a EffectsOptions,
        initial: bool,
    ) -> Self {
        Self {
            presenter,
            player,
            effects,
            initial,
        }
    }

    /// True during the initial activation, when every effect is suppressed.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    pub fn presenter(&mut self) -> &mut (dyn Presenter + 'a) {
        self.presenter
    }

    /// Whether effects of `group` animate right now.
    pub fn animates(&self, group: EffectGroup) -> bool {
        !self.initial && self.effects.enable && self.effects.group_enabled(group)
    }

    /// Hand one effect to the presenter.
    pub fn play(&mut self, group: EffectGroup, phase: EffectPhase, target: EffectTarget) -> Playback {
        let ticket = self.player.next_ticket();
        let action = match phase {
            EffectPhase::Hide => EffectAction::Hide,
            EffectPhase::Show => EffectAction::Show,
            EffectPhase::Change => EffectAction::Highlight,
        };
        let spec = self.effects.spec(group, phase);
        let duration = spec
            .filter(|_| self.animates(group))
            .map(|s| s.duration.as_duration());

        let request = EffectRequest {
            ticket,
            target,
            action,
            kind: spec.map(|s| s.kind.clone()).unwrap_or_default(),
            options: spec.map(|s| s.options.clone()).unwrap_or_default(),
            duration,
        };
        let instant = request.is_instant();
        tracing::trace!(%ticket, ?target, ?action, instant, "Playing effect");
        self.presenter.play_effect(request);

        Playback { ticket, instant }
    }
}
