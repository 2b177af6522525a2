//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by
//! request handlers. The state is initialized once during startup and then cloned for
//! each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token codec for issuing and verifying access tokens
//! - Response cache for read routes

use sea_orm::DatabaseConnection;

use crate::server::{cache::ResponseCache, util::token::TokenCodec};

/// Application state containing shared resources.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenCodec` holds the signing keys
/// - `ResponseCache` wraps its map in an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signs tokens at login and verifies them in the auth guard.
    pub tokens: TokenCodec,

    /// Memoized bodies of cached read routes.
    pub cache: ResponseCache,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Access token codec
    /// - `cache` - Response cache
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, tokens: TokenCodec, cache: ResponseCache) -> Self {
        Self { db, tokens, cache }
    }
}
