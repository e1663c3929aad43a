//! Larder core: pure list-controller state machine and view-model helpers.
mod effect;
mod meal;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use meal::{Category, Ingredient, Meal, MealId, INGREDIENT_SLOTS};
pub use msg::Msg;
pub use state::{AppState, DetailState, LoadPhase, PAGE_SIZE, SEARCH_DEBOUNCE};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, MealDetailView, MealRowView};
