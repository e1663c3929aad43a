use larder_core::{Meal, MealId};
use serde::Deserialize;
use thiserror::Error;

/// Failures from the remote catalog, folded to a coarse taxonomy at the
/// client boundary. Callers log these and fall back to an empty result;
/// there are no retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Wire envelope shared by all catalog endpoints. `meals` is `null` when
/// nothing matched.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsResponse {
    pub(crate) meals: Option<Vec<Meal>>,
}

/// Completed work reported by the engine worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Result of a search or category fetch, tagged with the generation
    /// the caller supplied.
    ListFetched {
        generation: u64,
        result: Result<Vec<Meal>, CatalogError>,
    },
    /// Result of a detail lookup.
    DetailFetched {
        id: MealId,
        result: Result<Option<Meal>, CatalogError>,
    },
}
