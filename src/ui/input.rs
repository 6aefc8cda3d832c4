use crate::ui::app::{App, Focus};
use crate::wizard::Control;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if let Focus::Field(_) = app.focus() {
        match key.code {
            KeyCode::Esc => app.leave_field(),
            KeyCode::Tab => app.cycle_focus(),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter => app.press(Control::Next, "Enter"),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_char(ch)
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Right | KeyCode::Char('n') | KeyCode::Enter => {
            app.press(Control::Next, &describe(key))
        }
        KeyCode::Left | KeyCode::Char('p') => app.press(Control::Previous, &describe(key)),
        KeyCode::Home => app.first(),
        KeyCode::End => app.last(),
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Char('c') => app.press(Control::Cancel, &describe(key)),
        KeyCode::Char('f') => app.press(Control::Finish, &describe(key)),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            // Menu entries are numbered from 1.
            let number = ch.to_digit(10).unwrap_or(0) as usize;
            if number > 0 {
                app.press(Control::MenuEntry(number - 1), &describe(key));
            }
        }
        _ => {}
    }
}

fn describe(key: KeyEvent) -> String {
    match key.code {
        KeyCode::Char(ch) => format!("key '{ch}'"),
        other => format!("key {other:?}"),
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WizardOptions;
    use crate::ui::app::ExitReason;
    use crate::ui::presenter::TerminalPresenter;
    use crate::wizard::{InputField, StepDefinition, StepRegistry, Wizard};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let registry = StepRegistry::build(vec![
            StepDefinition::titled("One").with_field(InputField::new("name")),
            StepDefinition::titled("Two"),
            StepDefinition::titled("Three"),
        ])
        .unwrap();
        let options = WizardOptions {
            menu_enable: true,
            ..WizardOptions::default()
        };
        App::new(Wizard::new(registry, options, TerminalPresenter::new()))
    }

    #[test]
    fn arrows_and_home_end_navigate() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.wizard().state().current_index, 1);
        handle_key(&mut app, key(KeyCode::End));
        assert_eq!(app.wizard().state().current_index, 2);
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.wizard().state().current_index, 1);
        handle_key(&mut app, key(KeyCode::Home));
        assert_eq!(app.wizard().state().current_index, 0);
    }

    #[test]
    fn digits_click_menu_entries() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Char('3')));
        assert_eq!(app.wizard().state().current_index, 0, "future entries are inert");

        handle_key(&mut app, key(KeyCode::End));
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert_eq!(app.wizard().state().current_index, 0);
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::Tab));
        for ch in "nq".chars() {
            handle_key(&mut app, key(KeyCode::Char(ch)));
        }
        assert!(!app.should_quit());
        assert_eq!(app.current_step().unwrap().fields()[0].value, "nq");

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert_eq!(app.exit_reason(), Some(ExitReason::Quit));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.wizard().state().current_index, 0);
    }
}
