use crate::state::LoadPhase;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            let generation = state.begin_fetch(LoadPhase::LoadingInitial);
            vec![Effect::FetchSearch {
                generation,
                query: String::new(),
            }]
        }
        Msg::QueryEdited(text) => {
            // Typing makes free text the active filter; the fetch itself
            // waits for the quiescence timer.
            state.set_query(text);
            state.clear_category();
            let token = state.next_debounce_token();
            vec![Effect::ScheduleDebounce { token }]
        }
        Msg::DebounceElapsed { token } => {
            if token != state.debounce_token() {
                // A later keystroke or category tap superseded this timer.
                return (state, Vec::new());
            }
            let query = state.query().trim().to_owned();
            let generation = state.begin_fetch(LoadPhase::LoadingInitial);
            vec![Effect::FetchSearch { generation, query }]
        }
        Msg::CategoryTapped(category) => {
            // A tap supersedes any pending search timer.
            state.next_debounce_token();
            if state.selected_category() == Some(category) {
                // Deselect and restore the stored free-text query.
                state.clear_category();
                let query = state.query().trim().to_owned();
                let generation = state.begin_fetch(LoadPhase::LoadingInitial);
                vec![Effect::FetchSearch { generation, query }]
            } else {
                state.select_category(category);
                let generation = state.begin_fetch(LoadPhase::LoadingCategory);
                vec![Effect::FetchCategory {
                    generation,
                    category,
                }]
            }
        }
        Msg::EndReached => {
            if state.phase().is_loading() || !state.has_more() {
                return (state, Vec::new());
            }
            state.begin_page_load();
            vec![Effect::LoadNextPage {
                generation: state.generation(),
            }]
        }
        Msg::ResultsLoaded { generation, meals } => {
            if generation != state.generation() {
                // Stale response from a fetch that has since been replaced.
                return (state, Vec::new());
            }
            state.commit_results(meals);
            Vec::new()
        }
        Msg::NextPageLoaded { generation } => {
            if generation == state.generation() && state.phase() == LoadPhase::LoadingMore {
                state.advance_page();
            }
            Vec::new()
        }
        Msg::FavoritesRestored(ids) => {
            state.restore_favorites(ids);
            Vec::new()
        }
        Msg::FavoriteToggled { id } => {
            state.toggle_favorite(&id);
            vec![Effect::PersistToggle { id }]
        }
        Msg::MealOpened { id } => {
            state.open_detail(id.clone());
            vec![Effect::FetchDetail { id }]
        }
        Msg::DetailLoaded { id, meal } => {
            state.finish_detail(&id, meal);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
    };

    (state, effects)
}
