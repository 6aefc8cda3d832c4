use crate::config::TextOrient;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, INACTIVE_TEXT};
use crate::wizard::{ButtonView, ButtonsView, CounterView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

const HINTS: &str = "←/→ move │ Tab field │ c cancel │ f finish │ q quit";

/// Counter, progress bar and buttons.
pub struct Footer<'a> {
    counter: Option<&'a CounterView>,
    progress: Option<u8>,
    buttons: Option<&'a ButtonsView>,
    highlight: bool,
}

impl<'a> Footer<'a> {
    pub fn new(
        counter: Option<&'a CounterView>,
        progress: Option<u8>,
        buttons: Option<&'a ButtonsView>,
    ) -> Self {
        Self {
            counter,
            progress,
            buttons,
            highlight: false,
        }
    }

    /// Counter highlight effect in progress.
    pub fn highlighted(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let counter = self.counter.filter(|c| c.visible);
        match (counter, self.progress) {
            (Some(counter), Some(percent)) if counter.progressbar => {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(ACCENT))
                    .percent(u16::from(percent))
                    .label(counter.text.clone());
                frame.render_widget(gauge, rows[0]);
            }
            (Some(counter), _) => {
                let alignment = match counter.orient {
                    TextOrient::Left => Alignment::Left,
                    TextOrient::Right => Alignment::Right,
                };
                let mut style = Style::default().fg(HEADER_TEXT);
                if self.highlight {
                    style = style.fg(ACCENT).add_modifier(Modifier::BOLD);
                }
                frame.render_widget(
                    Paragraph::new(counter.text.clone())
                        .style(style)
                        .alignment(alignment),
                    rows[0],
                );
            }
            (None, _) => {
                frame.render_widget(
                    Paragraph::new(HINTS)
                        .style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM)),
                    rows[0],
                );
            }
        }

        if rows.len() > 1 && rows[1].height > 0 {
            if let Some(buttons) = self.buttons {
                frame.render_widget(
                    Paragraph::new(button_line(buttons)).alignment(Alignment::Right),
                    rows[1],
                );
            }
        }
    }
}

fn button_line(buttons: &ButtonsView) -> Line<'static> {
    let separator = Span::styled("  ", Style::default().fg(HEADER_SEPARATOR));
    let mut spans = Vec::new();
    for (button, key) in [
        (&buttons.cancel, "c"),
        (&buttons.previous, "←"),
        (&buttons.next, "→"),
        (&buttons.finish, "f"),
    ] {
        if let Some(span) = button_span(button, key) {
            if !spans.is_empty() {
                spans.push(separator.clone());
            }
            spans.push(span);
        }
    }
    Line::from(spans)
}

fn button_span(button: &ButtonView, key: &str) -> Option<Span<'static>> {
    if !button.visible {
        return None;
    }
    let style = if key == "f" {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else if key == "c" {
        Style::default().fg(INACTIVE_TEXT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Some(Span::styled(format!("[{key}] {}", button.label), style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ButtonOptions;

    #[test]
    fn hidden_buttons_are_left_out() {
        let view = ButtonsView::compute(0, 3, &ButtonOptions::default());
        let line = button_line(&view);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("[c] Cancel"));
        assert!(text.contains("[→] Next"));
        assert!(!text.contains("Previous"));
        assert!(!text.contains("Finish"));
    }
}
