//! State for the transition phase machine.

use crate::mvi::UiState;
use crate::wizard::presenter::EffectTicket;

/// Where the current step transition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition in flight.
    #[default]
    Idle,

    /// Outgoing step is playing its hide effect.
    Leaving {
        from: usize,
        to: usize,
        /// Ticket of the hide effect.
        ticket: EffectTicket,
    },

    /// Incoming step is active and playing its show effect.
    Entering {
        step: usize,
        /// Ticket of the show effect.
        ticket: EffectTicket,
    },
}

impl UiState for TransitionPhase {}

impl TransitionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Ticket whose completion advances this phase.
    pub fn awaiting(&self) -> Option<EffectTicket> {
        match self {
            Self::Idle => None,
            Self::Leaving { ticket, .. } | Self::Entering { ticket, .. } => Some(*ticket),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Leaving { .. } => "leaving",
            Self::Entering { .. } => "entering",
        }
    }
}
