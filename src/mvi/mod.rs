//! Model-View-Intent (MVI) primitives.
//!
//! State machines in this crate are written as pure reducers so that the
//! transition rules can be tested without a presenter attached.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Presenter
//!    ↑                                │
//!    └──── effect completion ─────────┘
//! ```
//!
//! - **State**: value describing where the machine is
//! - **Intent**: request or completion signal fed into the machine
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
