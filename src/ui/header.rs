use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::wizard::{EffectAction, TitleView};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar: wizard title, step position.
pub struct Header<'a> {
    title: &'a TitleView,
    position: (usize, usize),
    effect: Option<EffectAction>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a TitleView, current: usize, total: usize) -> Self {
        Self {
            title,
            position: (current + 1, total),
            effect: None,
        }
    }

    /// Title effect in progress, if any.
    pub fn with_effect(mut self, effect: Option<EffectAction>) -> Self {
        self.effect = effect;
        self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let mut title_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
        if self.effect.is_some() {
            title_style = title_style.add_modifier(Modifier::DIM);
        }
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", title_style)];
        if !self.title.hidden {
            spans.push(Span::styled(self.title.text.clone(), title_style));
            spans.push(Span::styled("  │  ", separator_style));
        }
        let (current, total) = self.position;
        spans.push(Span::styled(
            format!("Step {current}/{total}"),
            Style::default().fg(ACCENT),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
