use std::time::Duration;

use crate::view_model::{AppViewModel, DetailView, MealDetailView, MealRowView};
use crate::{Category, Meal, MealId};

/// Number of meals shown per list window.
pub const PAGE_SIZE: usize = 20;

/// Quiescence delay before an edited query commits to a fetch.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    /// A committed search (or the initial fetch) is in flight.
    LoadingInitial,
    /// A category fetch is in flight.
    LoadingCategory,
    /// The next cached window is on its way to the list.
    LoadingMore,
    Ready,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        matches!(
            self,
            LoadPhase::LoadingInitial | LoadPhase::LoadingCategory | LoadPhase::LoadingMore
        )
    }
}

/// Detail-screen lifecycle. Every visit refetches; nothing is cached
/// across visits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Closed,
    Loading { id: MealId },
    Ready { meal: Box<Meal> },
    Missing { id: MealId },
}

/// Owned list-controller state. All transitions go through
/// [`crate::update`]; the shell renders [`AppState::view`] whenever
/// [`AppState::consume_dirty`] reports a change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    selected_category: Option<Category>,
    phase: LoadPhase,
    /// 1-based window index into `results`; 0 until the first commit.
    page: usize,
    /// Full result set of the latest committed fetch. Windows are sliced
    /// from here; no per-page network requests.
    results: Vec<Meal>,
    has_more: bool,
    /// Generation of the latest committed fetch. Responses carrying an
    /// older generation are dropped.
    generation: u64,
    /// Token of the newest quiescence timer; older timers are no-ops.
    debounce_token: u64,
    favorites: Vec<MealId>,
    detail: DetailState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            query: self.query.clone(),
            selected_category: self.selected_category,
            loading_initial: self.phase == LoadPhase::LoadingInitial,
            loading_category: self.phase == LoadPhase::LoadingCategory,
            loading_more: self.phase == LoadPhase::LoadingMore,
            items: self
                .visible()
                .iter()
                .map(|meal| MealRowView {
                    id: meal.id.clone(),
                    name: meal.name.clone(),
                    thumbnail: meal.thumbnail.clone(),
                    area: meal.area.clone(),
                    favorite: self.is_favorite(&meal.id),
                })
                .collect(),
            has_more: self.has_more,
            favorite_count: self.favorites.len(),
            detail: self.detail_view(),
        }
    }

    /// Reports and clears the render-dirty flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn favorites(&self) -> &[MealId] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// The currently visible slice of the cached result set.
    pub fn visible(&self) -> &[Meal] {
        let end = (self.page * PAGE_SIZE).min(self.results.len());
        &self.results[..end]
    }

    pub(crate) fn set_query(&mut self, text: String) {
        self.query = text;
        self.dirty = true;
    }

    pub(crate) fn select_category(&mut self, category: Category) {
        self.selected_category = Some(category);
        self.dirty = true;
    }

    pub(crate) fn clear_category(&mut self) {
        if self.selected_category.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn debounce_token(&self) -> u64 {
        self.debounce_token
    }

    /// Invalidates any pending quiescence timer and returns the new token.
    pub(crate) fn next_debounce_token(&mut self) -> u64 {
        self.debounce_token += 1;
        self.debounce_token
    }

    /// Commits a new fetch: resets paging, enters the given phase and
    /// returns the generation the response must carry.
    pub(crate) fn begin_fetch(&mut self, phase: LoadPhase) -> u64 {
        self.page = 1;
        self.phase = phase;
        self.generation += 1;
        self.dirty = true;
        self.generation
    }

    pub(crate) fn begin_page_load(&mut self) {
        self.phase = LoadPhase::LoadingMore;
        self.dirty = true;
    }

    /// Replaces the cached result set with a freshly fetched one.
    pub(crate) fn commit_results(&mut self, meals: Vec<Meal>) {
        self.results = meals;
        self.page = 1;
        self.has_more = self.page * PAGE_SIZE < self.results.len();
        self.phase = LoadPhase::Ready;
        self.dirty = true;
    }

    /// Reveals the next window of the cached result set.
    pub(crate) fn advance_page(&mut self) {
        self.page += 1;
        self.has_more = self.page * PAGE_SIZE < self.results.len();
        self.phase = LoadPhase::Ready;
        self.dirty = true;
    }

    pub(crate) fn restore_favorites(&mut self, ids: Vec<MealId>) {
        self.favorites.clear();
        for id in ids {
            if !self.favorites.contains(&id) {
                self.favorites.push(id);
            }
        }
        self.dirty = true;
    }

    /// Flips membership: removes the id when present, appends it otherwise.
    pub(crate) fn toggle_favorite(&mut self, id: &str) {
        match self.favorites.iter().position(|fav| fav == id) {
            Some(index) => {
                self.favorites.remove(index);
            }
            None => self.favorites.push(id.to_owned()),
        }
        self.dirty = true;
    }

    pub(crate) fn open_detail(&mut self, id: MealId) {
        self.detail = DetailState::Loading { id };
        self.dirty = true;
    }

    /// Applies a detail response if it matches the meal still being
    /// awaited; stale responses are dropped.
    pub(crate) fn finish_detail(&mut self, id: &str, meal: Option<Meal>) {
        let pending = matches!(&self.detail, DetailState::Loading { id: awaited } if awaited == id);
        if !pending {
            return;
        }
        self.detail = match meal {
            Some(meal) => DetailState::Ready {
                meal: Box::new(meal),
            },
            None => DetailState::Missing { id: id.to_owned() },
        };
        self.dirty = true;
    }

    pub(crate) fn close_detail(&mut self) {
        if !matches!(self.detail, DetailState::Closed) {
            self.detail = DetailState::Closed;
            self.dirty = true;
        }
    }

    fn detail_view(&self) -> DetailView {
        match &self.detail {
            DetailState::Closed => DetailView::Closed,
            DetailState::Loading { id } => DetailView::Loading { id: id.clone() },
            DetailState::Missing { id } => DetailView::Missing { id: id.clone() },
            DetailState::Ready { meal } => DetailView::Ready(Box::new(MealDetailView {
                id: meal.id.clone(),
                name: meal.name.clone(),
                area: meal.area.clone(),
                category: meal.category.clone(),
                thumbnail: meal.thumbnail.clone(),
                youtube: meal.youtube.clone(),
                instructions: meal.instructions.clone(),
                ingredients: meal.ingredients(),
                favorite: self.is_favorite(&meal.id),
            })),
        }
    }
}
