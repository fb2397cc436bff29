use std::time::{Duration, Instant};

use crate::catalog::{CatalogItem, CatalogSource, FilterCategory};
use crate::config::Config;
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogScreenState};
use crate::ui::collection::CatalogCollection;
use crate::ui::filter_bar::FilterBar;
use crate::ui::layout::{columns_for_width, layout_regions, Regions};
use crate::ui::mvi::Reducer;
use crate::ui::presence::Presence;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Startup settings for [`App`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppOptions {
    pub theme: Theme,
    /// Simulated fetch latency.
    pub latency: Duration,
    pub initial_filter: FilterCategory,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            theme: Theme::from(config.ui.theme),
            latency: config.catalog.latency(),
            initial_filter: config.ui.initial_filter,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingFetch {
    request: u64,
    filter: FilterCategory,
    ready_at: Instant,
}

/// Owner of the catalog screen: feeds the filter bar and the collection view,
/// talks to the data source and keeps the presence timeline in step.
pub struct App {
    should_quit: bool,
    theme: Theme,
    size: Option<(u16, u16)>,
    /// Screen state (MVI pattern).
    screen: CatalogScreenState,
    presence: Presence,
    source: Box<dyn CatalogSource>,
    latency: Duration,
    pending: Option<PendingFetch>,
    /// Quiz opened from a card click.
    detail: Option<CatalogItem>,
}

impl App {
    /// Creates the app and starts fetching the initial filter.
    pub fn new(source: Box<dyn CatalogSource>, options: AppOptions, now: Instant) -> Self {
        let mut app = Self {
            should_quit: false,
            theme: options.theme,
            size: None,
            screen: CatalogScreenState::default(),
            presence: Presence::new(),
            source,
            latency: options.latency,
            pending: None,
            detail: None,
        };
        app.select_filter(options.initial_filter, now);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        tracing::debug!(is_dark = self.theme.is_dark, "theme toggled");
    }

    pub fn screen(&self) -> &CatalogScreenState {
        &self.screen
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    pub fn detail(&self) -> Option<&CatalogItem> {
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn filter_bar(&self) -> FilterBar {
        FilterBar::new(self.screen.active_filter, self.theme)
    }

    pub fn collection(&self) -> CatalogCollection<'_> {
        CatalogCollection::new(&self.screen.items, self.screen.loading, self.theme)
            .focused(self.screen.focused_card())
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Screen regions for the last known terminal size.
    pub fn regions(&self) -> Option<Regions> {
        self.size
            .map(|(cols, rows)| layout_regions(Rect::new(0, 0, cols, rows)))
    }

    /// True while a fetch is outstanding or something is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.pending.is_some() || self.presence.is_animating(now)
    }

    /// Handles a category change coming from the filter bar.
    pub fn select_filter(&mut self, filter: FilterCategory, now: Instant) {
        dispatch_mvi!(self, screen, CatalogReducer, CatalogIntent::SelectFilter(filter));
        self.pending = Some(PendingFetch {
            request: self.screen.request,
            filter,
            ready_at: now + self.latency,
        });
        tracing::info!(%filter, request = self.screen.request, "filter selected");
        self.sync_presence(now);
        if self.latency.is_zero() {
            self.complete_fetch(now);
        }
    }

    pub fn cycle_filter(&mut self, step: isize, now: Instant) {
        self.select_filter(self.screen.active_filter.cycle(step), now);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.complete_fetch(now);
        self.presence.prune(now);
    }

    fn complete_fetch(&mut self, now: Instant) {
        let Some(pending) = self.pending else {
            return;
        };
        if now < pending.ready_at {
            return;
        }
        self.pending = None;

        let intent = match self.source.fetch(pending.filter) {
            Ok(items) => {
                tracing::info!(
                    filter = %pending.filter,
                    request = pending.request,
                    count = items.len(),
                    "catalog loaded"
                );
                CatalogIntent::Loaded {
                    request: pending.request,
                    items,
                }
            }
            Err(err) => {
                tracing::error!(filter = %pending.filter, error = %err, "catalog fetch failed");
                CatalogIntent::LoadFailed {
                    request: pending.request,
                    error: err.to_string(),
                }
            }
        };
        dispatch_mvi!(self, screen, CatalogReducer, intent);
        self.sync_presence(now);
    }

    fn sync_presence(&mut self, now: Instant) {
        let view =
            CatalogCollection::new(&self.screen.items, self.screen.loading, self.theme).describe();
        self.presence.sync(&view, now);
    }

    pub fn move_focus(&mut self, delta: isize) {
        dispatch_mvi!(self, screen, CatalogReducer, CatalogIntent::MoveFocus { delta });
    }

    /// Moves focus by whole grid rows at the current width.
    pub fn move_focus_rows(&mut self, rows: isize) {
        let columns = self
            .regions()
            .map(|regions| columns_for_width(regions.body.width))
            .unwrap_or(1);
        self.move_focus(rows * columns as isize);
    }

    /// Clicks the keyboard-focused card.
    pub fn activate_focused(&mut self) {
        let Some(index) = self.screen.focused_card() else {
            return;
        };
        let mut clicked = None;
        self.collection()
            .click(index, |item| clicked = Some(item.clone()));
        if let Some(item) = clicked {
            self.open_detail(item);
        }
    }

    /// Left click at a screen cell: a filter pill, a card, or closing the detail popup.
    pub fn on_click(&mut self, column: u16, row: u16, now: Instant) {
        if self.detail.is_some() {
            self.close_detail();
            return;
        }
        let Some(regions) = self.regions() else {
            return;
        };

        let bar = self.filter_bar();
        if let Some(category) = bar.category_at(regions.filter, column, row) {
            let mut chosen = None;
            bar.click(category, |category| chosen = Some(category));
            if let Some(category) = chosen {
                self.select_filter(category, now);
            }
            return;
        }

        let collection = self.collection();
        let Some(key) = collection.key_at(regions.body, &self.presence, column, row) else {
            return;
        };
        let mut clicked = None;
        collection.click_key(key, |item| clicked = Some(item.clone()));
        let index = collection
            .view_state()
            .items()
            .iter()
            .position(|shown| shown.id == key);
        if let Some(item) = clicked {
            if let Some(index) = index {
                let delta = index as isize - self.screen.focused as isize;
                self.move_focus(delta);
            }
            self.open_detail(item);
        }
    }

    fn open_detail(&mut self, item: CatalogItem) {
        tracing::info!(id = %item.id, title = %item.title, "quiz opened");
        self.detail = Some(item);
    }
}
