use crate::{Category, Meal, MealId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App launch: issue the initial (empty-query) fetch.
    Started,
    /// User edited the search box (raw text, not yet committed).
    QueryEdited(String),
    /// A scheduled search quiescence timer fired.
    DebounceElapsed { token: u64 },
    /// User tapped a category chip.
    CategoryTapped(Category),
    /// Scroll reached the end of the visible list.
    EndReached,
    /// Full result set for a committed search or category fetch.
    ResultsLoaded { generation: u64, meals: Vec<Meal> },
    /// The next cached window is ready to show.
    NextPageLoaded { generation: u64 },
    /// Favorites membership restored from storage.
    FavoritesRestored(Vec<MealId>),
    /// User toggled the favorite mark on a meal.
    FavoriteToggled { id: MealId },
    /// User opened a meal's detail view.
    MealOpened { id: MealId },
    /// Full record for an opened meal; `None` when not found or the fetch
    /// failed.
    DetailLoaded { id: MealId, meal: Option<Meal> },
    /// User left the detail view.
    DetailClosed,
}
