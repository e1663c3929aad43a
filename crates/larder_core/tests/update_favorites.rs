use std::sync::Once;

use larder_core::{update, AppState, Effect, Meal, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(larder_logging::initialize_for_tests);
}

fn toggle(state: AppState, id: &str) -> (AppState, Vec<Effect>) {
    update(
        state,
        Msg::FavoriteToggled {
            id: id.to_string(),
        },
    )
}

#[test]
fn toggle_adds_then_removes() {
    init_logging();
    let state = AppState::new();
    assert!(state.favorites().is_empty());

    let (state, effects) = toggle(state, "52772");
    assert_eq!(
        effects,
        vec![Effect::PersistToggle {
            id: "52772".to_string(),
        }]
    );
    assert_eq!(state.favorites(), vec!["52772".to_string()]);

    let (state, effects) = toggle(state, "52772");
    assert_eq!(
        effects,
        vec![Effect::PersistToggle {
            id: "52772".to_string(),
        }]
    );
    assert!(state.favorites().is_empty());
}

#[test]
fn membership_keeps_insertion_order() {
    init_logging();
    let (state, _) = toggle(AppState::new(), "1");
    let (state, _) = toggle(state, "2");
    let (state, _) = toggle(state, "3");
    let (state, _) = toggle(state, "2");
    assert_eq!(state.favorites(), vec!["1".to_string(), "3".to_string()]);

    // Re-adding lands at the end, not the original slot.
    let (state, _) = toggle(state, "2");
    assert_eq!(
        state.favorites(),
        vec!["1".to_string(), "3".to_string(), "2".to_string()]
    );
}

#[test]
fn double_toggle_returns_to_original_membership() {
    init_logging();
    let (state, _) = toggle(AppState::new(), "a");
    let (state, _) = toggle(state, "b");
    let before = state.favorites().to_vec();

    let (state, _) = toggle(state, "c");
    let (state, _) = toggle(state, "c");
    assert_eq!(state.favorites(), before);
}

#[test]
fn restored_membership_dedupes_preserving_first() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::FavoritesRestored(vec![
            "10".to_string(),
            "11".to_string(),
            "10".to_string(),
        ]),
    );
    assert!(effects.is_empty());
    assert_eq!(state.favorites(), vec!["10".to_string(), "11".to_string()]);
    assert_eq!(state.view().favorite_count, 2);
}

#[test]
fn rows_carry_favorite_flags() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::ResultsLoaded {
            generation: 1,
            meals: vec![Meal::new("52772", "Teriyaki Chicken"), Meal::new("52773", "Honey Balsamic Chicken")],
        },
    );

    let (state, _) = toggle(state, "52772");
    let view = state.view();
    assert_eq!(view.favorite_count, 1);
    assert!(view.items[0].favorite);
    assert!(!view.items[1].favorite);
}
