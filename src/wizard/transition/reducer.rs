//! Reducer for the transition phase machine.

use crate::mvi::Reducer;

use super::intent::TransitionIntent;
use super::state::TransitionPhase;

/// Reducer for step transition phases.
///
/// Pure function: lifecycle signals and effect playback are performed by
/// the wizard around the dispatch call. Completions that do not match the
/// awaited ticket are stale and leave the phase unchanged.
pub struct TransitionReducer;

impl Reducer for TransitionReducer {
    type State = TransitionPhase;
    type Intent = TransitionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransitionIntent::Leave { from, to, ticket } => match state {
                TransitionPhase::Idle => TransitionPhase::Leaving { from, to, ticket },
                other => other,
            },

            TransitionIntent::Enter { step, ticket } => match state {
                // Initial activation: nothing to leave
                TransitionPhase::Idle => TransitionPhase::Entering { step, ticket },
                TransitionPhase::Leaving { to, .. } if to == step => {
                    TransitionPhase::Entering { step, ticket }
                }
                other => other,
            },

            TransitionIntent::Settle { ticket } => match state {
                TransitionPhase::Entering { ticket: awaited, .. } if awaited == ticket => {
                    TransitionPhase::Idle
                }
                other => other,
            },
        }
    }
}
