//! Display synchronizers.
//!
//! Each synchronizer owns the view it renders and recomputes it from the
//! current index and the option tree. None of them know about navigation
//! rules; the wizard calls them after every committed transition.

mod buttons;
mod counter;
mod menu;
mod title;

pub use buttons::{ButtonView, ButtonsSync, ButtonsView};
pub use counter::{functional_step_count, CounterSync, CounterView};
pub use menu::{EntryStatus, MenuEntry, MenuSync, MenuView};
pub use title::{TitleSync, TitleView};
