//! Time-bounded memoizer for read-route response bodies.
//!
//! Entries are keyed by request path plus query string and hold the serialized JSON
//! body. Writes invalidate every key under a resource prefix. Every invalidation also
//! bumps a generation counter, and a body whose load overlapped an invalidation is not
//! kept, so a read racing a write cannot re-cache the pre-write rows. Rows changed
//! outside the API stay stale for up to the TTL.

use std::{
    future::Future,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use dashmap::DashMap;
use serde::Serialize;
use serde_json::Value;

use crate::server::error::{internal::InternalError, AppError};

#[derive(Debug, Clone)]
struct CachedResponse {
    body: Value,
    expires_at: Instant,
}

/// Shared response cache. Clones share the same map.
#[derive(Clone)]
pub struct ResponseCache {
    entries: Arc<DashMap<String, CachedResponse>>,
    generation: Arc<AtomicU64>,
    ttl: Duration,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            generation: Arc::new(AtomicU64::new(0)),
            ttl,
        }
    }

    /// Returns the cached body for `key` if it has not expired.
    ///
    /// Expired entries are evicted on lookup.
    pub fn get(&self, key: &str) -> Option<Value> {
        let now = Instant::now();

        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                return Some(entry.body.clone());
            }
        }

        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        None
    }

    /// Stores a body under `key` for the configured TTL.
    pub fn insert(&self, key: impl Into<String>, body: Value) {
        self.entries.insert(
            key.into(),
            CachedResponse {
                body,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Returns the cached body for `key`, or runs `loader`, caches its output and returns it.
    ///
    /// Errors from `loader` are returned as-is and nothing is cached. If any prefix is
    /// invalidated while `loader` runs, the body is returned but not kept.
    pub async fn get_or_try_insert_with<T, F, Fut>(
        &self,
        key: &str,
        loader: F,
    ) -> Result<Value, AppError>
    where
        T: Serialize,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        if let Some(body) = self.get(key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(body);
        }

        let generation = self.generation.load(Ordering::SeqCst);

        let body = serde_json::to_value(loader().await?).map_err(InternalError::Serialize)?;

        if self.generation.load(Ordering::SeqCst) == generation {
            self.insert(key, body.clone());

            // An invalidation between the check and the insert may have missed the entry.
            if self.generation.load(Ordering::SeqCst) != generation {
                self.entries.remove(key);
            }
        } else {
            tracing::debug!("Not caching {}: invalidated during load", key);
        }

        Ok(body)
    }

    /// Drops every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }
}
