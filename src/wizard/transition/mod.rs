//! Step transition phase machine.
//!
//! Chains the outgoing step's hide effect to the incoming step's
//! activation and show effect.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Phase enum (Idle → Leaving → Entering → Idle)
//! - `intent.rs` - Transition start and effect completion signals
//! - `reducer.rs` - Phase transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::TransitionIntent;
pub use reducer::TransitionReducer;
pub use state::TransitionPhase;
