//! Data-access hooks: one typed handle per entity over a shared client.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wayfarer_core::dashboard::DashboardSummary;
use wayfarer_core::schema::{TravelPriorityLevel, TravelStatus};
use wayfarer_core::types::{Date, DbId};
use wayfarer_core::validation::{validate_id, validate_input, IntoDbId};

use crate::cache::{QueryCache, QueryKey};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::resource::{Accommodations, Activities, Destinations, Resource, Trips};

const STATUSES_KEY: &str = "travel-statuses";
const PRIORITY_LEVELS_KEY: &str = "travel-priority-levels";

/// HTTP client for a Wayfarer API server.
///
/// Cheap to clone; clones share the connection pool and the query cache.
#[derive(Debug, Clone)]
pub struct WayfarerClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<QueryCache>,
}

impl WayfarerClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.api_url))
    }

    /// Reuse an existing [`reqwest::Client`] (connection pooling across
    /// several API clients).
    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache: Arc::new(QueryCache::new()),
        }
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Hooks for any [`Resource`].
    pub fn hooks<R: Resource>(&self) -> EntityHooks<'_, R> {
        EntityHooks {
            client: self,
            _resource: PhantomData,
        }
    }

    pub fn destinations(&self) -> EntityHooks<'_, Destinations> {
        self.hooks()
    }

    pub fn activities(&self) -> EntityHooks<'_, Activities> {
        self.hooks()
    }

    pub fn accommodations(&self) -> EntityHooks<'_, Accommodations> {
        self.hooks()
    }

    pub fn trips(&self) -> EntityHooks<'_, Trips> {
        self.hooks()
    }

    /// All travel statuses (cached).
    pub async fn statuses(&self) -> Result<Vec<TravelStatus>, ClientError> {
        self.cached_get(QueryKey::list(STATUSES_KEY), "/api/travel-statuses")
            .await
    }

    /// All priority levels (cached).
    pub async fn priority_levels(&self) -> Result<Vec<TravelPriorityLevel>, ClientError> {
        self.cached_get(
            QueryKey::list(PRIORITY_LEVELS_KEY),
            "/api/travel-priority-levels",
        )
        .await
    }

    /// Dashboard summary as of `today` (server date when `None`). Not cached.
    pub async fn dashboard(&self, today: Option<Date>) -> Result<DashboardSummary, ClientError> {
        let path = match today {
            Some(day) => format!("/api/dashboard?today={day}"),
            None => "/api/dashboard".to_string(),
        };
        self.fetch(self.http.get(self.url(&path))).await
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn cached_get<T>(&self, key: QueryKey, path: &str) -> Result<T, ClientError>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(hit) = self.cache.get::<T>(&key).await {
            tracing::trace!(entity = key.entity, id = ?key.id, "Cache hit");
            return Ok(hit);
        }
        let value: T = self.fetch(self.http.get(self.url(path))).await?;
        self.cache.insert(key, &value).await;
        Ok(value)
    }

    /// Send a request and decode a JSON success body.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(self.send(request).await?).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let request = request.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "Sending request");
        Ok(self.http.execute(request).await?)
    }

    /// Return the response unchanged on 2xx, otherwise decode the error body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }
}

/// Typed operations on one entity.
///
/// Every operation validates locally first; a local failure returns
/// [`ClientError::Validation`] or [`ClientError::InvalidId`] without
/// touching the network or the cache.
pub struct EntityHooks<'a, R> {
    client: &'a WayfarerClient,
    _resource: PhantomData<R>,
}

impl<R> Clone for EntityHooks<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for EntityHooks<'_, R> {}

impl<R: Resource> EntityHooks<'_, R> {
    /// GET the collection, cached under the entity's list key.
    pub async fn list(&self) -> Result<Vec<R::Row>, ClientError> {
        self.client
            .cached_get(QueryKey::list(R::ENTITY), &R::collection_path())
            .await
    }

    /// GET one row, cached under its detail key. Invalid ids fail locally.
    pub async fn get<I: IntoDbId>(&self, id: I) -> Result<R::Row, ClientError> {
        let id = validate_id(id)?;
        self.client
            .cached_get(QueryKey::detail(R::ENTITY, id), &R::item_path(id))
            .await
    }

    /// Like [`get`](Self::get), but disabled while no id is selected:
    /// `None` returns `Ok(None)` and issues nothing.
    pub async fn get_optional<I: IntoDbId>(
        &self,
        id: Option<I>,
    ) -> Result<Option<R::Row>, ClientError> {
        match id {
            Some(id) => self.get(id).await.map(Some),
            None => Ok(None),
        }
    }

    /// Validate then POST. Invalidates the list key on success.
    pub async fn create(&self, input: R::Create) -> Result<R::Row, ClientError> {
        let input = validate_input(input)?;
        let client = self.client;
        let request = client
            .http
            .post(client.url(&R::collection_path()))
            .json(&input);
        let row: R::Row = client.fetch(request).await?;
        client.cache.invalidate_after_write(R::ENTITY, None).await;
        Ok(row)
    }

    /// Validate id and partial input, then PUT. Invalidates the list and
    /// detail keys on success.
    pub async fn update<I: IntoDbId>(&self, id: I, partial: R::Update) -> Result<R::Row, ClientError> {
        let id = validate_id(id)?;
        let partial = validate_input(partial)?;
        let client = self.client;
        let request = client.http.put(client.url(&R::item_path(id))).json(&partial);
        let row: R::Row = client.fetch(request).await?;
        client.cache.invalidate_after_write(R::ENTITY, Some(id)).await;
        Ok(row)
    }

    /// Validate id, then DELETE. Invalidates the list and detail keys on
    /// success.
    pub async fn delete<I: IntoDbId>(&self, id: I) -> Result<(), ClientError> {
        let id: DbId = validate_id(id)?;
        let client = self.client;
        let request = client.http.delete(client.url(&R::item_path(id)));
        WayfarerClient::ensure_success(client.send(request).await?).await?;
        client.cache.invalidate_after_write(R::ENTITY, Some(id)).await;
        Ok(())
    }
}
