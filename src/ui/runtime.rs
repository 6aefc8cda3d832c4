use crate::ui::app::{App, ExitReason};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;

/// Frame interval; effects advance once per tick.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Drive the app until it quits, then hand it back with the reason.
pub fn run(mut app: App) -> io::Result<(App, ExitReason)> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick(elapsed)) => app.on_tick(elapsed),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    let reason = app.exit_reason().unwrap_or(ExitReason::Quit);
    Ok((app, reason))
}
