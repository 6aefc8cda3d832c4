//! Terminal front end: a ratatui [`Presenter`](crate::wizard::Presenter)
//! and the event loop around it.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod presenter;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use app::{App, ExitReason};
pub use presenter::TerminalPresenter;
pub use runtime::run;
