//! Intents for the transition phase machine.

use crate::mvi::Intent;
use crate::wizard::presenter::EffectTicket;

/// Intents that can be dispatched to the transition reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionIntent {
    /// The outgoing step started its hide effect.
    Leave {
        from: usize,
        to: usize,
        ticket: EffectTicket,
    },

    /// The incoming step was activated and started its show effect.
    Enter { step: usize, ticket: EffectTicket },

    /// The show effect with this ticket completed.
    Settle { ticket: EffectTicket },
}

impl Intent for TransitionIntent {}
