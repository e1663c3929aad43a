//! Larder engine: remote catalog access and favorites persistence.
mod catalog;
mod engine;
mod favorites;
mod types;

pub use catalog::{CatalogClient, CatalogSettings, ReqwestCatalogClient, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use favorites::{FavoritesStore, StorageError};
pub use types::{CatalogError, EngineEvent};
