mod common;

use std::time::{Duration, Instant};

use common::{buffer_text, free, owned, paid, CountingSource, FailingSource};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use quizshelf::catalog::{CatalogItem, FilterCategory, ItemId, StaticCatalog};
use quizshelf::ui::input::{handle_key, handle_mouse};
use quizshelf::ui::presence::Phase;
use quizshelf::ui::render::draw;
use quizshelf::ui::theme::Theme;
use quizshelf::ui::view_state::ViewKind;
use quizshelf::ui::{App, AppOptions};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn catalog() -> Vec<CatalogItem> {
    vec![
        free(1, "Algebra Basics"),
        paid(2, "Organic Chemistry"),
        owned(3, "Rust Ownership"),
        free(4, "World Capitals"),
    ]
}

fn options(latency_ms: u64) -> AppOptions {
    AppOptions {
        theme: Theme::dark(),
        latency: Duration::from_millis(latency_ms),
        initial_filter: FilterCategory::All,
    }
}

fn instant_app(now: Instant) -> App {
    let (source, _) = CountingSource::new(catalog());
    let mut app = App::new(Box::new(source), options(0), now);
    app.on_resize(100, 30);
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn item_ids(app: &App) -> Vec<u64> {
    app.screen().items.iter().map(|item| item.id.0).collect()
}

fn view_kind(app: &App) -> ViewKind {
    app.collection().view_state().kind()
}

#[test]
fn zero_latency_loads_immediately() {
    let app = instant_app(Instant::now());
    assert!(!app.screen().loading);
    assert_eq!(item_ids(&app), vec![1, 2, 3, 4]);
    assert_eq!(view_kind(&app), ViewKind::Populated);
}

#[test]
fn fetch_completes_after_latency() {
    let t0 = Instant::now();
    let (source, fetches) = CountingSource::new(catalog());
    let mut app = App::new(Box::new(source), options(350), t0);

    assert_eq!(view_kind(&app), ViewKind::Loading);
    assert!(app.presence().rendered().is_empty());
    assert!(app.is_animating(t0));

    app.on_tick(t0 + Duration::from_millis(349));
    assert_eq!(view_kind(&app), ViewKind::Loading);
    assert_eq!(fetches.get(), 0);

    app.on_tick(t0 + Duration::from_millis(350));
    assert_eq!(view_kind(&app), ViewKind::Populated);
    assert_eq!(fetches.get(), 1);
    assert_eq!(app.presence().phase(ItemId(1)), Some(Phase::Entering));
}

#[test]
fn newer_selection_supersedes_pending_fetch() {
    let t0 = Instant::now();
    let (source, fetches) = CountingSource::new(catalog());
    let mut app = App::new(Box::new(source), options(100), t0);

    app.select_filter(FilterCategory::Free, t0 + Duration::from_millis(50));
    app.on_tick(t0 + Duration::from_millis(120));
    assert!(app.screen().loading);

    app.on_tick(t0 + Duration::from_millis(150));
    assert_eq!(fetches.get(), 1);
    assert_eq!(app.screen().active_filter, FilterCategory::Free);
    assert_eq!(item_ids(&app), vec![1, 4]);
}

#[test]
fn filters_narrow_the_grid() {
    let now = Instant::now();
    let mut app = instant_app(now);

    app.select_filter(FilterCategory::Paid, now);
    assert_eq!(item_ids(&app), vec![2, 3]);
    app.select_filter(FilterCategory::Purchased, now);
    assert_eq!(item_ids(&app), vec![3]);
    app.select_filter(FilterCategory::Free, now);
    assert_eq!(item_ids(&app), vec![1, 4]);
}

#[test]
fn filter_change_keeps_shared_cards_and_exits_the_rest() {
    let t0 = Instant::now();
    let mut app = instant_app(t0);
    let t1 = t0 + Duration::from_secs(1);
    app.on_tick(t1);

    app.select_filter(FilterCategory::Free, t1);
    assert_eq!(view_kind(&app), ViewKind::Populated);
    for shared in [1, 4] {
        assert_eq!(app.presence().mounted_at(ItemId(shared)), Some(t0));
        assert_eq!(app.presence().phase(ItemId(shared)), Some(Phase::Present));
    }
    for gone in [2, 3] {
        assert_eq!(app.presence().phase(ItemId(gone)), Some(Phase::Exiting));
    }

    let end = app.presence().frame_for(ItemId(2), t1 + Duration::from_millis(300));
    assert_eq!(end.opacity, 0.0);
    assert!((end.scale - 0.9).abs() < 1e-6);

    app.on_tick(t1 + Duration::from_millis(300));
    let keys: Vec<u64> = app.presence().rendered().iter().map(|slot| slot.key.0).collect();
    assert_eq!(keys, vec![1, 4]);
}

#[test]
fn refresh_keeps_cards_until_the_result_arrives() {
    let t0 = Instant::now();
    let (source, _) = CountingSource::new(catalog());
    let mut app = App::new(Box::new(source), options(200), t0);
    let loaded_at = t0 + Duration::from_millis(200);
    app.on_tick(loaded_at);
    let t1 = t0 + Duration::from_secs(1);
    app.on_tick(t1);

    app.select_filter(FilterCategory::Paid, t1);
    assert!(app.screen().refreshing);
    assert_eq!(view_kind(&app), ViewKind::Populated);
    assert_eq!(item_ids(&app), vec![1, 2, 3, 4]);
    assert!(app.is_animating(t1));

    app.on_tick(t1 + Duration::from_millis(200));
    assert!(!app.screen().is_fetching());
    assert_eq!(item_ids(&app), vec![2, 3]);
    assert_eq!(app.presence().mounted_at(ItemId(2)), Some(loaded_at));
    assert_eq!(app.presence().phase(ItemId(1)), Some(Phase::Exiting));
}

#[test]
fn duplicate_ids_do_not_shift_focus() {
    let now = Instant::now();
    let (source, _) = CountingSource::new(vec![
        free(1, "Algebra"),
        free(1, "Algebra (copy)"),
        paid(2, "Chemistry"),
    ]);
    let mut app = App::new(Box::new(source), options(0), now);
    app.on_resize(100, 30);

    handle_key(&mut app, key(KeyCode::Right), now);
    handle_key(&mut app, key(KeyCode::Right), now);
    assert_eq!(app.screen().focused_card(), Some(1));

    handle_key(&mut app, key(KeyCode::Enter), now);
    assert_eq!(app.detail().map(|item| item.id), Some(ItemId(2)));
}

#[test]
fn failing_source_shows_empty_and_keeps_error() {
    let now = Instant::now();
    let app = App::new(Box::new(FailingSource), options(0), now);
    assert_eq!(view_kind(&app), ViewKind::Empty);
    assert_eq!(
        app.screen().last_error.as_deref(),
        Some("Catalog validation failed: catalog offline")
    );
    assert_eq!(app.presence().empty_since(), Some(now));
}

#[test]
fn filter_without_matches_is_empty() {
    let now = Instant::now();
    let source = StaticCatalog::new(vec![free(1, "Algebra")]).unwrap();
    let mut app = App::new(Box::new(source), options(0), now);
    app.select_filter(FilterCategory::Purchased, now);
    assert_eq!(view_kind(&app), ViewKind::Empty);
    assert_eq!(app.screen().last_error, None);
}

#[test]
fn number_keys_and_tab_select_filters() {
    let now = Instant::now();
    let mut app = instant_app(now);

    handle_key(&mut app, key(KeyCode::Char('3')), now);
    assert_eq!(app.screen().active_filter, FilterCategory::Paid);
    handle_key(&mut app, key(KeyCode::Tab), now);
    assert_eq!(app.screen().active_filter, FilterCategory::Purchased);
    handle_key(&mut app, key(KeyCode::Tab), now);
    assert_eq!(app.screen().active_filter, FilterCategory::All);
    handle_key(&mut app, key(KeyCode::BackTab), now);
    assert_eq!(app.screen().active_filter, FilterCategory::Purchased);
}

#[test]
fn arrows_move_focus_and_enter_opens_detail() {
    let now = Instant::now();
    let mut app = instant_app(now);

    handle_key(&mut app, key(KeyCode::Right), now);
    assert_eq!(app.screen().focused_card(), Some(1));
    // Three columns at width 100.
    handle_key(&mut app, key(KeyCode::Down), now);
    assert_eq!(app.screen().focused_card(), Some(3));
    handle_key(&mut app, key(KeyCode::Up), now);
    assert_eq!(app.screen().focused_card(), Some(0));

    handle_key(&mut app, key(KeyCode::Enter), now);
    assert_eq!(app.detail().map(|item| item.id), Some(ItemId(1)));

    // Keys other than Esc/Enter are swallowed while the popup is open.
    handle_key(&mut app, key(KeyCode::Char('2')), now);
    assert_eq!(app.screen().active_filter, FilterCategory::All);
    handle_key(&mut app, key(KeyCode::Esc), now);
    assert!(app.detail().is_none());
}

#[test]
fn quit_and_theme_keys() {
    let now = Instant::now();
    let mut app = instant_app(now);

    handle_key(&mut app, key(KeyCode::Char('t')), now);
    assert!(!app.theme().is_dark);
    assert!(!app.should_quit());

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        now,
    );
    assert!(app.should_quit());
}

#[test]
fn clicking_a_pill_selects_its_filter() {
    let now = Instant::now();
    let mut app = instant_app(now);
    let regions = app.regions().unwrap();

    let (_, rect) = app
        .filter_bar()
        .pill_areas(regions.filter)
        .into_iter()
        .find(|(control, _)| control.category == FilterCategory::Purchased)
        .unwrap();
    handle_mouse(&mut app, left_click(rect.x + 1, rect.y), now);

    assert_eq!(app.screen().active_filter, FilterCategory::Purchased);
    assert_eq!(item_ids(&app), vec![3]);
}

#[test]
fn clicking_a_card_opens_that_quiz() {
    let now = Instant::now();
    let mut app = instant_app(now);
    let body = app.regions().unwrap().body;

    // Second card of the first row.
    handle_mouse(&mut app, left_click(body.x + 40, body.y + 2), now);
    assert_eq!(app.detail().map(|item| item.title.as_str()), Some("Organic Chemistry"));
    assert_eq!(app.screen().focused_card(), Some(1));

    // Any click closes the popup first.
    handle_mouse(&mut app, left_click(0, 0), now);
    assert!(app.detail().is_none());
}

#[test]
fn clicks_outside_controls_do_nothing() {
    let now = Instant::now();
    let mut app = instant_app(now);
    let before = app.screen().clone();
    handle_mouse(&mut app, left_click(0, 0), now);
    handle_mouse(
        &mut app,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 40,
            row: 8,
            modifiers: KeyModifiers::NONE,
        },
        now,
    );
    assert_eq!(app.screen(), &before);
    assert!(app.detail().is_none());
}

#[test]
fn full_screen_draw_shows_header_bar_and_cards() {
    let now = Instant::now();
    let mut app = instant_app(now);
    let later = now + Duration::from_secs(1);
    app.on_tick(later);

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, &app, later)).unwrap();
    let text = buffer_text(terminal.backend().buffer());

    assert!(text.contains("Quiz Catalog"));
    assert!(text.contains("4 quizzes"));
    for category in FilterCategory::ALL {
        assert!(text.contains(category.label()));
    }
    assert!(text.contains("Algebra Basics"));
    assert!(text.contains("World Capitals"));
}

#[test]
fn detail_popup_is_drawn_over_the_grid() {
    let now = Instant::now();
    let mut app = instant_app(now);
    app.move_focus(2);
    app.activate_focused();

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal
        .draw(|frame| draw(frame, &app, now + Duration::from_secs(1)))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Quiz #3"));
    assert!(text.contains("Esc: Close"));
}
