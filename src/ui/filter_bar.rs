//! Category filter selector.
//!
//! Stateless: the active category belongs to the caller, and a click only
//! reports the chosen category back through the supplied callback.

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Widget};

use crate::catalog::FilterCategory;
use crate::ui::theme::Theme;

/// Glyph shown next to each filter label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconVariant {
    Grid,
    Gift,
    Coin,
    Check,
}

impl IconVariant {
    pub fn glyph(self) -> &'static str {
        match self {
            IconVariant::Grid => "▦",
            IconVariant::Gift => "✦",
            IconVariant::Coin => "¤",
            IconVariant::Check => "✓",
        }
    }
}

/// Icons indexed by [`FilterCategory::position`].
const ICONS: [IconVariant; 4] = [
    IconVariant::Grid,
    IconVariant::Gift,
    IconVariant::Coin,
    IconVariant::Check,
];

pub fn icon_for(category: FilterCategory) -> IconVariant {
    ICONS[category.position()]
}

/// One rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub category: FilterCategory,
    pub label: &'static str,
    pub icon: IconVariant,
    pub active: bool,
}

impl FilterControl {
    pub fn text(&self) -> String {
        format!(" {} {} ", self.icon.glyph(), self.label)
    }
}

/// Gap between two pills.
const PILL_GAP: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBar {
    active: FilterCategory,
    theme: Theme,
}

impl FilterBar {
    pub fn new(active: FilterCategory, theme: Theme) -> Self {
        Self { active, theme }
    }

    pub fn active(&self) -> FilterCategory {
        self.active
    }

    /// Controls in bar order; always all four categories.
    pub fn controls(&self) -> [FilterControl; 4] {
        FilterCategory::ALL.map(|category| FilterControl {
            category,
            label: category.label(),
            icon: icon_for(category),
            active: category == self.active,
        })
    }

    /// Reports `category` to the owner. Nothing changes here.
    pub fn click<F>(&self, category: FilterCategory, on_filter_change: F)
    where
        F: FnOnce(FilterCategory),
    {
        tracing::debug!(%category, active = %self.active, "filter clicked");
        on_filter_change(category);
    }

    fn style_for(&self, control: &FilterControl) -> Style {
        if control.active {
            self.theme.active_pill()
        } else {
            self.theme.inactive_pill()
        }
    }

    /// Screen rectangle of every pill inside the bordered `area`.
    pub fn pill_areas(&self, area: Rect) -> Vec<(FilterControl, Rect)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.height == 0 {
            return Vec::new();
        }
        let mut x = inner.x + 1;
        let mut areas = Vec::with_capacity(FilterCategory::ALL.len());
        for control in self.controls() {
            let width = Span::raw(control.text()).width() as u16;
            let available = inner.right().saturating_sub(x);
            if available == 0 {
                break;
            }
            areas.push((control, Rect::new(x, inner.y, width.min(available), 1)));
            x = x.saturating_add(width + PILL_GAP);
        }
        areas
    }

    /// The category whose pill covers the given screen cell.
    pub fn category_at(&self, area: Rect, column: u16, row: u16) -> Option<FilterCategory> {
        let position = Position::new(column, row);
        self.pill_areas(area)
            .into_iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(control, _)| control.category)
    }
}

impl Widget for FilterBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()))
            .style(self.theme.base());
        block.render(area, buf);

        for (control, rect) in self.pill_areas(area) {
            buf.set_stringn(
                rect.x,
                rect.y,
                control.text(),
                rect.width as usize,
                self.style_for(&control),
            );
        }
    }
}
