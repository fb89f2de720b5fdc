//! Query cache shared by every hook of one [`WayfarerClient`](crate::WayfarerClient).
//!
//! Entries are stored as JSON values so one map can hold every entity type.
//! Keys are scoped by entity: invalidating `destinations` never touches
//! `trips`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use wayfarer_core::types::DbId;

/// Identifies a cached query: an entity collection or a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub entity: &'static str,
    pub id: Option<DbId>,
}

impl QueryKey {
    pub fn list(entity: &'static str) -> Self {
        Self { entity, id: None }
    }

    pub fn detail(entity: &'static str, id: DbId) -> Self {
        Self {
            entity,
            id: Some(id),
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached value for `key`, if present and still decodable as `T`.
    pub async fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().await;
        let value = entries.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }

    pub async fn insert<T: Serialize>(&self, key: QueryKey, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => {
                self.entries.write().await.insert(key, json);
            }
            Err(e) => {
                tracing::warn!(entity = key.entity, error = %e, "Skipping uncacheable value");
            }
        }
    }

    pub async fn contains(&self, key: &QueryKey) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop one key. Returns whether it was cached.
    pub async fn invalidate(&self, key: &QueryKey) -> bool {
        let removed = self.entries.write().await.remove(key).is_some();
        tracing::trace!(entity = key.entity, id = ?key.id, removed, "Cache key invalidated");
        removed
    }

    /// Drop the list key and, when given, the detail key of one entity.
    pub async fn invalidate_after_write(&self, entity: &'static str, id: Option<DbId>) {
        let mut entries = self.entries.write().await;
        entries.remove(&QueryKey::list(entity));
        if let Some(id) = id {
            entries.remove(&QueryKey::detail(entity, id));
        }
        tracing::trace!(entity, id = ?id, "Cache invalidated after write");
    }

    /// Drop every key of one entity.
    pub async fn invalidate_entity(&self, entity: &str) {
        self.entries.write().await.retain(|k, _| k.entity != entity);
        tracing::trace!(entity, "Cache entity invalidated");
    }
}
