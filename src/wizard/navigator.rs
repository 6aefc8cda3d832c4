//! Navigation state: current index, target resolution and the transition phase.

use thiserror::Error;

use crate::mvi::Reducer;

use super::step::{StepId, StepRegistry};
use super::transition::{TransitionIntent, TransitionPhase, TransitionReducer};

/// Reasons a navigation request was refused. State is unchanged in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Index {index} out of range (wizard has {total} steps)")]
    IndexOutOfRange { index: i64, total: usize },

    #[error("Step '{id}' is not one of the wizard steps")]
    UnknownStep { id: StepId },

    #[error("A step transition is still {phase}")]
    TransitionInFlight { phase: &'static str },

    #[error("Wizard has been destroyed")]
    Destroyed,
}

/// Where to navigate: a position or a step identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Index(i64),
    Step(StepId),
}

impl From<i64> for NavTarget {
    fn from(index: i64) -> Self {
        NavTarget::Index(index)
    }
}

impl From<i32> for NavTarget {
    fn from(index: i32) -> Self {
        NavTarget::Index(index.into())
    }
}

impl From<usize> for NavTarget {
    fn from(index: usize) -> Self {
        NavTarget::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<StepId> for NavTarget {
    fn from(id: StepId) -> Self {
        NavTarget::Step(id)
    }
}

impl From<&StepId> for NavTarget {
    fn from(id: &StepId) -> Self {
        NavTarget::Step(id.clone())
    }
}

/// Result of an accepted navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The current index changed (or was re-entered).
    Moved { from: Option<usize>, to: usize },
    /// The validation gate kept the wizard on `step`.
    Vetoed { step: StepId },
}

impl NavigationOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// A committed index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub from: Option<usize>,
    pub to: usize,
    /// First activation since construction.
    pub initial: bool,
}

/// Snapshot of navigation counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub current_index: usize,
    pub total_steps: usize,
    /// Step count used for progress math.
    pub functional_step_count: usize,
}

/// Owns the current index and the transition phase.
#[derive(Debug)]
pub struct Navigator {
    current: Option<usize>,
    previous: Option<usize>,
    total: usize,
    phase: TransitionPhase,
}

impl Navigator {
    pub fn new(total: usize) -> Self {
        Self {
            current: None,
            previous: None,
            total,
            phase: TransitionPhase::default(),
        }
    }

    /// Index of the active step; 0 before the initial activation.
    pub fn current_index(&self) -> usize {
        self.current.unwrap_or(0)
    }

    /// Active step, `None` before the initial activation.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Step that was active before the last committed transition.
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn ensure_idle(&self) -> Result<(), NavigationError> {
        if self.phase.is_idle() {
            Ok(())
        } else {
            Err(NavigationError::TransitionInFlight {
                phase: self.phase.name(),
            })
        }
    }

    /// Resolve a target to an index without touching any state.
    pub fn resolve(
        &self,
        target: &NavTarget,
        registry: &StepRegistry,
    ) -> Result<usize, NavigationError> {
        match target {
            NavTarget::Index(index) => usize::try_from(*index)
                .ok()
                .filter(|i| *i < self.total)
                .ok_or(NavigationError::IndexOutOfRange {
                    index: *index,
                    total: self.total,
                }),
            NavTarget::Step(id) => {
                registry
                    .index_of(id)
                    .ok_or_else(|| NavigationError::UnknownStep { id: id.clone() })
            }
        }
    }

    /// Target of `next()`.
    pub fn next_target(&self) -> NavTarget {
        NavTarget::Index(self.current_index() as i64 + 1)
    }

    /// Target of `previous()`.
    pub fn previous_target(&self) -> NavTarget {
        NavTarget::Index(self.current_index() as i64 - 1)
    }

    /// Target of `last()`.
    pub fn last_target(&self) -> NavTarget {
        NavTarget::Index(self.total as i64 - 1)
    }

    /// Commit a resolved index.
    pub fn commit(&mut self, to: usize) -> Commit {
        let from = self.current;
        self.previous = from;
        self.current = Some(to);
        Commit {
            from,
            to,
            initial: from.is_none(),
        }
    }

    pub fn dispatch(&mut self, intent: TransitionIntent) {
        self.phase = TransitionReducer::reduce(self.phase, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::presenter::EffectTicket;
    use crate::wizard::step::StepDefinition;

    fn registry(n: usize) -> StepRegistry {
        StepRegistry::build(
            (0..n)
                .map(|i| StepDefinition::titled(format!("Step {i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn resolves_indices_in_range() {
        let nav = Navigator::new(3);
        let reg = registry(3);
        for i in 0..3i64 {
            assert_eq!(nav.resolve(&NavTarget::Index(i), &reg), Ok(i as usize));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        let nav = Navigator::new(3);
        let reg = registry(3);
        for i in [-1i64, 3, 100, i64::MIN] {
            assert_eq!(
                nav.resolve(&NavTarget::Index(i), &reg),
                Err(NavigationError::IndexOutOfRange { index: i, total: 3 })
            );
        }
    }

    #[test]
    fn resolves_step_ids() {
        let nav = Navigator::new(3);
        let reg = registry(3);
        assert_eq!(
            nav.resolve(&NavTarget::Step(StepId::from("step-2")), &reg),
            Ok(2)
        );
        assert_eq!(
            nav.resolve(&NavTarget::Step(StepId::from("nope")), &reg),
            Err(NavigationError::UnknownStep {
                id: StepId::from("nope")
            })
        );
    }

    #[test]
    fn first_commit_is_initial() {
        let mut nav = Navigator::new(3);
        assert!(nav.commit(0).initial);
        let commit = nav.commit(2);
        assert!(!commit.initial);
        assert_eq!(commit.from, Some(0));
        assert_eq!(nav.previous(), Some(0));
        assert_eq!(nav.current_index(), 2);
    }

    #[test]
    fn boundary_targets() {
        let mut nav = Navigator::new(4);
        nav.commit(0);
        assert_eq!(nav.previous_target(), NavTarget::Index(-1));
        assert_eq!(nav.last_target(), NavTarget::Index(3));
        nav.commit(3);
        assert_eq!(nav.next_target(), NavTarget::Index(4));
    }

    #[test]
    fn in_flight_phase_blocks() {
        let mut nav = Navigator::new(2);
        nav.dispatch(TransitionIntent::Enter {
            step: 0,
            ticket: EffectTicket::new(1),
        });
        assert_eq!(
            nav.ensure_idle(),
            Err(NavigationError::TransitionInFlight { phase: "entering" })
        );
        nav.dispatch(TransitionIntent::Settle {
            ticket: EffectTicket::new(1),
        });
        assert_eq!(nav.ensure_idle(), Ok(()));
    }
}
