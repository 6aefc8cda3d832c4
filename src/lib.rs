//! Step-sequencer (wizard) state machine.
//!
//! A [`wizard::Wizard`] walks a fixed list of steps, consults an optional
//! validation gate before leaving a step and keeps title, menu, counter and
//! buttons in sync through a [`wizard::Presenter`]. The [`ui`] module ships a
//! terminal presenter built on ratatui.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod ui;
pub mod wizard;

pub use error::WizardError;
