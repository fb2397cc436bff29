use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::CatalogScreenState;
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogScreenState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // The skeleton is for the first fetch only; later fetches keep
            // the current cards on screen until their result lands.
            CatalogIntent::SelectFilter(filter) => CatalogScreenState {
                active_filter: filter,
                loading: !state.loaded,
                refreshing: state.loaded,
                request: state.request.wrapping_add(1),
                last_error: None,
                ..state
            },
            CatalogIntent::Loaded { request, items } => {
                if request != state.request {
                    return state;
                }
                CatalogScreenState {
                    loading: false,
                    refreshing: false,
                    loaded: true,
                    items,
                    focused: 0,
                    last_error: None,
                    ..state
                }
            }
            CatalogIntent::LoadFailed { request, error } => {
                if request != state.request {
                    return state;
                }
                CatalogScreenState {
                    loading: false,
                    refreshing: false,
                    loaded: true,
                    items: Vec::new(),
                    focused: 0,
                    last_error: Some(error),
                    ..state
                }
            }
            CatalogIntent::MoveFocus { delta } => {
                let count = state.card_count();
                if state.loading || count == 0 {
                    return state;
                }
                let last = count as isize - 1;
                let focused = (state.focused as isize + delta).clamp(0, last) as usize;
                CatalogScreenState { focused, ..state }
            }
        }
    }
}
