use crate::{Category, Ingredient, MealId};

/// Render-ready snapshot of the controller state. The presentation layer
/// consumes this and emits [`crate::Msg`]s; it never touches
/// [`crate::AppState`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub selected_category: Option<Category>,
    pub loading_initial: bool,
    pub loading_category: bool,
    pub loading_more: bool,
    pub items: Vec<MealRowView>,
    pub has_more: bool,
    pub favorite_count: usize,
    pub detail: DetailView,
}

/// One row of the meal list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRowView {
    pub id: MealId,
    pub name: String,
    pub thumbnail: Option<String>,
    pub area: Option<String>,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Closed,
    Loading { id: MealId },
    Ready(Box<MealDetailView>),
    Missing { id: MealId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDetailView {
    pub id: MealId,
    pub name: String,
    pub area: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
    pub youtube: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub favorite: bool,
}
