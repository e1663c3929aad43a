use std::time::Duration;

use larder_core::Meal;
use url::Url;

use crate::types::{CatalogError, MealsResponse};

/// Public endpoint of the meal catalog service.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    /// Base URL all endpoint paths are joined onto. Injectable so tests
    /// can point the client at a local server.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Read-only lookups against the meal catalog.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// All meals matching a free-text query. The provider returns the full
    /// set in one response; there is no server-side paging.
    async fn search(&self, query: &str) -> Result<Vec<Meal>, CatalogError>;

    /// All meals in a named category. Records are partial (id, name,
    /// thumbnail).
    async fn in_category(&self, category: &str) -> Result<Vec<Meal>, CatalogError>;

    /// The full record for one meal, or `None` when the id is unknown.
    async fn by_id(&self, id: &str) -> Result<Option<Meal>, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestCatalogClient {
    client: reqwest::Client,
    settings: CatalogSettings,
}

impl ReqwestCatalogClient {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CatalogError::Transport(err.to_string()))?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, file: &str, key: &str, value: &str) -> Result<Url, CatalogError> {
        let base = Url::parse(&self.settings.base_url)
            .map_err(|err| CatalogError::InvalidUrl(err.to_string()))?;
        let mut url = base
            .join(file)
            .map_err(|err| CatalogError::InvalidUrl(err.to_string()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn fetch_meals(&self, url: Url) -> Result<Vec<Meal>, CatalogError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let envelope: MealsResponse = response.json().await.map_err(map_reqwest_error)?;
        Ok(envelope.meals.unwrap_or_default())
    }
}

#[async_trait::async_trait]
impl CatalogClient for ReqwestCatalogClient {
    async fn search(&self, query: &str) -> Result<Vec<Meal>, CatalogError> {
        let url = self.endpoint("search.php", "s", query)?;
        self.fetch_meals(url).await
    }

    async fn in_category(&self, category: &str) -> Result<Vec<Meal>, CatalogError> {
        let url = self.endpoint("filter.php", "c", category)?;
        self.fetch_meals(url).await
    }

    async fn by_id(&self, id: &str) -> Result<Option<Meal>, CatalogError> {
        let url = self.endpoint("lookup.php", "i", id)?;
        let meals = self.fetch_meals(url).await?;
        Ok(meals.into_iter().next())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        return CatalogError::Timeout;
    }
    if err.is_decode() {
        return CatalogError::Decode(err.to_string());
    }
    CatalogError::Transport(err.to_string())
}
