//! Item card renderer for one quiz.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::catalog::CatalogItem;
use crate::ui::motion::MotionFrame;
use crate::ui::theme::{blend, Theme, ACCENT, STATUS_LOCKED, STATUS_OK};

/// Motion units per terminal row.
const UNITS_PER_ROW: f32 = 10.0;
/// Below this opacity nothing is drawn.
const MIN_VISIBLE_OPACITY: f32 = 0.05;

pub const LOCK_GLYPH: &str = "🔒";
pub const OWNED_GLYPH: &str = "✓";

pub struct ItemCard<'a> {
    item: &'a CatalogItem,
    index: usize,
    focused: bool,
    show_lock_icon: bool,
    frame: MotionFrame,
    theme: Theme,
}

impl<'a> ItemCard<'a> {
    pub fn new(item: &'a CatalogItem, index: usize, show_lock_icon: bool, theme: Theme) -> Self {
        Self {
            item,
            index,
            focused: false,
            show_lock_icon,
            frame: MotionFrame::REST,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn frame(mut self, frame: MotionFrame) -> Self {
        self.frame = frame;
        self
    }

    /// Corner glyph: lock for paid quizzes not yet owned, check for owned ones.
    pub fn status_glyph(&self) -> Option<&'static str> {
        if self.item.purchased {
            Some(OWNED_GLYPH)
        } else if self.show_lock_icon && self.item.is_locked() {
            Some(LOCK_GLYPH)
        } else {
            None
        }
    }
}

/// Applies offset and scale of `frame` to the resting `area`.
pub fn animated_area(area: Rect, frame: MotionFrame) -> Rect {
    let shift = (frame.offset_y / UNITS_PER_ROW).round().max(0.0) as u16;
    let shrink = (1.0 - frame.scale).clamp(0.0, 1.0);
    let inset_x = (area.width as f32 * shrink / 2.0).round() as u16;
    let inset_y = (area.height as f32 * shrink / 2.0).round() as u16;

    let x = area.x + inset_x;
    let y = area.y + inset_y + shift;
    let width = area.width.saturating_sub(inset_x * 2);
    let height = area
        .height
        .saturating_sub(inset_y * 2)
        .min(area.bottom().saturating_sub(y));
    Rect::new(x, y.min(area.bottom()), width, height)
}

impl Widget for ItemCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let opacity = self.frame.opacity.clamp(0.0, 1.0);
        if opacity < MIN_VISIBLE_OPACITY {
            return;
        }
        let area = animated_area(area, self.frame);
        if area.width < 4 || area.height < 3 {
            return;
        }

        let theme = self.theme;
        let background = theme.background();
        let fade = |color| blend(background, color, opacity);

        let border_color = if self.focused { ACCENT } else { theme.border() };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(fade(border_color)))
            .style(Style::default().bg(blend(background, theme.surface(), opacity)))
            .title(Span::styled(
                format!(" {} ", self.index + 1),
                Style::default().fg(fade(theme.muted())),
            ));
        if let Some(glyph) = self.status_glyph() {
            let color = if self.item.purchased {
                STATUS_OK
            } else {
                STATUS_LOCKED
            };
            block = block.title(
                Line::from(Span::styled(format!(" {glyph} "), Style::default().fg(fade(color))))
                    .right_aligned(),
            );
        }

        let badge_color = if self.item.is_free() {
            STATUS_OK
        } else {
            STATUS_LOCKED
        };
        let mut title_style = Style::default().fg(fade(theme.text()));
        if self.focused {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let lines = vec![
            Line::from(Span::styled(self.item.title.clone(), title_style)),
            Line::from(vec![
                Span::styled(self.item.badge(), Style::default().fg(fade(badge_color))),
                Span::styled(
                    format!("  {} questions", self.item.questions),
                    Style::default().fg(fade(theme.muted())),
                ),
            ]),
            Line::from(Span::styled(
                self.item.description.clone(),
                Style::default().fg(fade(theme.muted())),
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
