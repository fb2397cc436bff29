use crate::ui::catalog::CatalogScreenState;
use crate::ui::theme::{Theme, ACCENT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    theme: Theme,
}

impl Header {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn widget(&self, screen: &CatalogScreenState) -> Paragraph<'static> {
        let text_style = Style::default().fg(self.theme.text());
        let separator_style = Style::default().fg(self.theme.muted());
        let status = if screen.is_fetching() {
            "loading…".to_string()
        } else {
            match screen.items.len() {
                1 => "1 quiz".to_string(),
                count => format!("{count} quizzes"),
            }
        };
        let line = Line::from(vec![
            Span::styled(
                "  Quiz Catalog",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(screen.active_filter.label(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).style(self.theme.base()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(self.theme.border())),
        )
    }
}
