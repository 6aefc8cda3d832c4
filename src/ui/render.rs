use crate::ui::app::{App, Focus, Notice};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, INACTIVE_TEXT, STATUS_ERROR, STATUS_OK,
};
use crate::wizard::{EffectAction, EffectTarget, EntryStatus, MenuView, Step};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let presenter = app.presenter();
    let state = app.wizard().state();

    let title_effect = presenter.animation(EffectTarget::Title).map(|a| a.action);
    frame.render_widget(
        Header::new(presenter.title(), state.current_index, state.total_steps)
            .with_effect(title_effect)
            .widget(),
        header,
    );

    frame.render_widget(Clear, body);
    let (menu_area, panel_area) = split_body(body, presenter.menu().is_some());
    if let (Some(menu), Some(menu_area)) = (presenter.menu(), menu_area) {
        draw_menu(frame, app, menu, menu_area);
    }
    draw_panel(frame, app, panel_area);

    let counter_highlight = presenter.animation(EffectTarget::Counter).is_some();
    Footer::new(presenter.counter(), presenter.progress(), presenter.buttons())
        .highlighted(counter_highlight)
        .render(frame, footer);
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, menu: &MenuView, area: Rect) {
    let presenter = app.presenter();
    let items: Vec<ListItem> = menu
        .entries
        .iter()
        .map(|entry| {
            let mut style = match entry.status {
                EntryStatus::Active => Style::default().fg(HEADER_TEXT),
                EntryStatus::Current => Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
                EntryStatus::Inactive => Style::default().fg(INACTIVE_TEXT),
            };
            if presenter
                .animation(EffectTarget::MenuEntry(entry.index))
                .is_some()
            {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{:>2}. {}", entry.index + 1, entry.title),
                style,
            )))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn draw_panel(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let presenter = app.presenter();
    let registry = app.wizard().registry();

    // While a step effect runs two panels can be visible; draw the newest.
    let Some(step) = presenter
        .visible_steps()
        .filter_map(|index| registry.get(index).map(|step| (index, step)))
        .max_by_key(|(index, _)| {
            presenter
                .animation(EffectTarget::Step(*index))
                .map(|a| a.action == EffectAction::Show)
                .unwrap_or(true)
        })
    else {
        return;
    };

    let (index, step) = step;
    let fading = presenter
        .animation(EffectTarget::Step(index))
        .map(|a| (a.action, a.progress()));

    let mut lines = step_lines(step, app.focus());
    if let Some(notice) = app.notice() {
        lines.push(Line::from(""));
        lines.push(match notice {
            Notice::Info(text) => Line::from(Span::styled(text.clone(), Style::default().fg(STATUS_OK))),
            Notice::Error(text) => {
                Line::from(Span::styled(text.clone(), Style::default().fg(STATUS_ERROR)))
            }
        });
    }

    let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    if let Some((action, progress)) = fading {
        // Slide by scrolling the panel horizontally with the effect's progress.
        let offset = match action {
            EffectAction::Hide => progress,
            EffectAction::Show => 1.0 - progress,
            EffectAction::Highlight => 0.0,
        };
        let columns = (f64::from(area.width) * offset) as u16;
        paragraph = paragraph
            .scroll((0, columns))
            .style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(paragraph, inner_panel(area));
}

fn inner_panel(area: Rect) -> Rect {
    Rect {
        x: area.x + 2.min(area.width),
        y: area.y + 1.min(area.height),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(1),
    }
}

fn step_lines(step: &Step, focus: Focus) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = step
        .body()
        .lines()
        .map(|line| Line::from(line.to_string()))
        .collect();

    if !step.fields().is_empty() {
        lines.push(Line::from(""));
    }
    for (position, field) in step.fields().iter().enumerate() {
        let focused = focus == Focus::Field(position);
        let marker = if field.required { "*" } else { " " };
        let label_style = if focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {}: ", field.display_label()), label_style),
            Span::styled(
                format!("{}{cursor}", field.value),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }
    lines
}
