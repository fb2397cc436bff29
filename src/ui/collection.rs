//! Catalog collection view.
//!
//! Given `(items, loading)` it shows exactly one of: a pulsing skeleton, a
//! "no results" panel, or the card grid. Cards are keyed by item id; the
//! host's [`Presence`] remembers them between frames so unchanged cards are
//! never remounted.

use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::catalog::{CatalogItem, ItemId};
use crate::ui::card::{animated_area, ItemCard};
use crate::ui::layout::{
    centered_rect_by_size, columns_for_width, first_row_for, grid_cells, slot_at, visible_rows,
};
use crate::ui::motion::{self, pulse_opacity, Motion};
use crate::ui::presence::Presence;
use crate::ui::theme::{blend, Theme};
use crate::ui::view_state::{ViewKind, ViewState, PLACEHOLDER_COUNT};

pub const EMPTY_TITLE: &str = "No quizzes found";
pub const EMPTY_HINT: &str = "Try another filter.";

const EMPTY_PANEL_WIDTH: u16 = 36;
const EMPTY_PANEL_HEIGHT: u16 = 5;

/// A skeleton block, identified only by its position (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub position: usize,
}

/// A card in the populated grid with the motions it plays when mounted and unmounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSlot<'a> {
    pub key: ItemId,
    pub index: usize,
    pub item: &'a CatalogItem,
    pub enter: Motion,
    pub exit: Motion,
}

/// Pure description of what the view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionView<'a> {
    Loading { placeholders: Vec<Placeholder> },
    Empty { message: &'static str, enter: Motion },
    Populated { cards: Vec<CardSlot<'a>> },
}

impl CollectionView<'_> {
    pub fn kind(&self) -> ViewKind {
        match self {
            CollectionView::Loading { .. } => ViewKind::Loading,
            CollectionView::Empty { .. } => ViewKind::Empty,
            CollectionView::Populated { .. } => ViewKind::Populated,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CatalogCollection<'a> {
    items: &'a [CatalogItem],
    loading: bool,
    theme: Theme,
    focused: Option<usize>,
}

impl<'a> CatalogCollection<'a> {
    pub fn new(items: &'a [CatalogItem], loading: bool, theme: Theme) -> Self {
        Self {
            items,
            loading,
            theme,
            focused: None,
        }
    }

    /// Highlights the card at `index` (keyboard focus).
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    pub fn view_state(&self) -> ViewState<'a> {
        ViewState::derive(self.loading, self.items)
    }

    pub fn describe(&self) -> CollectionView<'a> {
        match self.view_state() {
            ViewState::Loading => CollectionView::Loading {
                placeholders: (1..=PLACEHOLDER_COUNT)
                    .map(|position| Placeholder { position })
                    .collect(),
            },
            ViewState::Empty => CollectionView::Empty {
                message: EMPTY_TITLE,
                enter: motion::empty_enter(),
            },
            ViewState::Populated(items) => CollectionView::Populated {
                cards: items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| CardSlot {
                        key: item.id,
                        index,
                        item,
                        enter: motion::card_enter(index),
                        exit: motion::card_exit(),
                    })
                    .collect(),
            },
        }
    }

    /// Calls `on_item_click` once with the item shown at `index`.
    ///
    /// Returns false, without calling, when no card is at that index.
    pub fn click<F>(&self, index: usize, on_item_click: F) -> bool
    where
        F: FnOnce(&'a CatalogItem),
    {
        let state = self.view_state();
        let Some(item) = state.items().get(index).copied() else {
            return false;
        };
        tracing::debug!(id = %item.id, index, "card clicked");
        on_item_click(item);
        true
    }

    /// Like [`click`](Self::click) but addressed by key. Exiting cards are not clickable.
    pub fn click_key<F>(&self, key: ItemId, on_item_click: F) -> bool
    where
        F: FnOnce(&'a CatalogItem),
    {
        let state = self.view_state();
        match state.items().iter().position(|item| item.id == key) {
            Some(index) => self.click(index, on_item_click),
            None => false,
        }
    }

    fn first_row(&self, area: Rect, columns: usize) -> usize {
        first_row_for(self.focused.unwrap_or(0), columns, visible_rows(area.height))
    }

    /// Key of the card drawn under a screen cell, given the same `presence` used to draw.
    pub fn key_at(&self, area: Rect, presence: &Presence, column: u16, row: u16) -> Option<ItemId> {
        if self.loading {
            return None;
        }
        let slots = presence.rendered();
        let columns = columns_for_width(area.width);
        let cells = grid_cells(area, slots.len(), columns, self.first_row(area, columns));
        slot_at(&cells, column, row).map(|index| slots[index].key)
    }

    /// Draws the current state; `presence` must already be synced for this render.
    pub fn render(&self, area: Rect, buf: &mut Buffer, presence: &Presence, now: Instant) {
        match self.view_state() {
            ViewState::Loading => self.render_loading(area, buf, presence, now),
            ViewState::Empty => self.render_empty(area, buf, presence, now),
            ViewState::Populated(items) => self.render_cards(area, buf, &items, presence, now),
        }
    }

    fn render_loading(&self, area: Rect, buf: &mut Buffer, presence: &Presence, now: Instant) {
        let opacity = pulse_opacity(presence.elapsed_in_view(now));
        let color = blend(self.theme.background(), self.theme.border(), opacity);
        let columns = columns_for_width(area.width);
        for (_, cell) in grid_cells(area, PLACEHOLDER_COUNT, columns, 0) {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(color))
                .render(cell, buf);
        }
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer, presence: &Presence, now: Instant) {
        let frame = presence.empty_frame(now);
        let rest = centered_rect_by_size(area, EMPTY_PANEL_WIDTH, EMPTY_PANEL_HEIGHT);
        let panel = animated_area(rest, frame);
        if panel.height == 0 {
            return;
        }
        let background = self.theme.background();
        let text = blend(background, self.theme.text(), frame.opacity);
        let muted = blend(background, self.theme.muted(), frame.opacity);
        let lines = vec![
            Line::styled(EMPTY_TITLE, Style::default().fg(text).add_modifier(Modifier::BOLD)),
            Line::from(""),
            Line::styled(EMPTY_HINT, Style::default().fg(muted)),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(muted)),
            )
            .render(panel, buf);
    }

    fn render_cards(
        &self,
        area: Rect,
        buf: &mut Buffer,
        items: &[&'a CatalogItem],
        presence: &Presence,
        now: Instant,
    ) {
        let slots = presence.rendered();
        let columns = columns_for_width(area.width);
        let cells = grid_cells(area, slots.len(), columns, self.first_row(area, columns));
        for (slot_index, cell) in cells {
            let slot = slots[slot_index];
            let index = items.iter().position(|item| item.id == slot.key);
            let focused = index.is_some() && index == self.focused;
            ItemCard::new(slot.item, index.unwrap_or(slot_index), true, self.theme)
                .focused(focused)
                .frame(presence.frame_for(slot.key, now))
                .render(cell, buf);
        }
    }
}
