mod common;

use common::quizzes;
use quizshelf::catalog::FilterCategory;
use quizshelf::ui::catalog::{CatalogIntent, CatalogReducer, CatalogScreenState};
use quizshelf::ui::mvi::Reducer;

fn loaded(ids: &[u64]) -> CatalogScreenState {
    let state = CatalogReducer::reduce(
        CatalogScreenState::default(),
        CatalogIntent::SelectFilter(FilterCategory::All),
    );
    let request = state.request;
    CatalogReducer::reduce(
        state,
        CatalogIntent::Loaded {
            request,
            items: quizzes(ids),
        },
    )
}

#[test]
fn first_select_filter_starts_loading() {
    let state = CatalogReducer::reduce(
        CatalogScreenState::default(),
        CatalogIntent::SelectFilter(FilterCategory::Paid),
    );
    assert_eq!(state.active_filter, FilterCategory::Paid);
    assert!(state.loading);
    assert!(!state.refreshing);
    assert!(state.is_fetching());
    assert_eq!(state.request, 1);
}

#[test]
fn later_select_filter_refreshes_without_loading() {
    let state = loaded(&[1, 2]);
    let state = CatalogReducer::reduce(state, CatalogIntent::SelectFilter(FilterCategory::Free));
    assert!(!state.loading);
    assert!(state.refreshing);
    assert!(state.is_fetching());
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.focused_card(), Some(0));
}

#[test]
fn select_filter_clears_error() {
    let mut state = loaded(&[1, 2]);
    state.last_error = Some("boom".to_string());
    let state = CatalogReducer::reduce(state, CatalogIntent::SelectFilter(FilterCategory::Free));
    assert_eq!(state.last_error, None);
}

#[test]
fn reselecting_the_same_filter_starts_a_new_request() {
    let state = loaded(&[1]);
    let before = state.request;
    let state = CatalogReducer::reduce(state, CatalogIntent::SelectFilter(FilterCategory::All));
    assert_eq!(state.request, before + 1);
    assert!(state.refreshing);
}

#[test]
fn refresh_result_clears_refreshing() {
    let state = CatalogReducer::reduce(
        loaded(&[1, 2]),
        CatalogIntent::SelectFilter(FilterCategory::Free),
    );
    let request = state.request;
    let state = CatalogReducer::reduce(
        state,
        CatalogIntent::Loaded {
            request,
            items: quizzes(&[1]),
        },
    );
    assert!(!state.is_fetching());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn loaded_replaces_items() {
    let state = loaded(&[3, 1, 2]);
    assert!(!state.loading);
    let ids: Vec<u64> = state.items.iter().map(|item| item.id.0).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(state.focused_card(), Some(0));
}

#[test]
fn stale_results_are_dropped() {
    let state = CatalogReducer::reduce(
        CatalogScreenState::default(),
        CatalogIntent::SelectFilter(FilterCategory::Free),
    );
    let stale = state.request;
    let state = CatalogReducer::reduce(state, CatalogIntent::SelectFilter(FilterCategory::Paid));

    let after_loaded = CatalogReducer::reduce(
        state.clone(),
        CatalogIntent::Loaded {
            request: stale,
            items: quizzes(&[1]),
        },
    );
    assert_eq!(after_loaded, state);

    let after_failed = CatalogReducer::reduce(
        state.clone(),
        CatalogIntent::LoadFailed {
            request: stale,
            error: "late".to_string(),
        },
    );
    assert_eq!(after_failed, state);
}

#[test]
fn load_failed_leaves_an_empty_result() {
    let state = CatalogReducer::reduce(
        loaded(&[1, 2]),
        CatalogIntent::SelectFilter(FilterCategory::Purchased),
    );
    let request = state.request;
    let state = CatalogReducer::reduce(
        state,
        CatalogIntent::LoadFailed {
            request,
            error: "catalog offline".to_string(),
        },
    );
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.last_error.as_deref(), Some("catalog offline"));
}

#[test]
fn move_focus_clamps_to_the_grid() {
    let state = loaded(&[1, 2, 3]);
    let state = CatalogReducer::reduce(state, CatalogIntent::MoveFocus { delta: 2 });
    assert_eq!(state.focused, 2);
    let state = CatalogReducer::reduce(state, CatalogIntent::MoveFocus { delta: 5 });
    assert_eq!(state.focused, 2);
    let state = CatalogReducer::reduce(state, CatalogIntent::MoveFocus { delta: -10 });
    assert_eq!(state.focused, 0);
}

#[test]
fn move_focus_is_noop_without_cards() {
    let state = CatalogScreenState::default();
    let new = CatalogReducer::reduce(state.clone(), CatalogIntent::MoveFocus { delta: 1 });
    assert_eq!(new, state);

    let mut loading = CatalogReducer::reduce(
        CatalogScreenState::default(),
        CatalogIntent::SelectFilter(FilterCategory::All),
    );
    loading.items = quizzes(&[1, 2]);
    let new = CatalogReducer::reduce(loading.clone(), CatalogIntent::MoveFocus { delta: 1 });
    assert_eq!(new, loading);
}

#[test]
fn move_focus_counts_duplicate_ids_once() {
    let mut state = loaded(&[1, 2]);
    let duplicate = state.items[0].clone();
    state.items.insert(1, duplicate);
    let state = CatalogReducer::reduce(state, CatalogIntent::MoveFocus { delta: 5 });
    assert_eq!(state.focused, 1);
    assert_eq!(state.focused_card(), Some(1));
}
