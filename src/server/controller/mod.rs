//! HTTP request handlers.
//!
//! Each handler runs the auth guard first, then unwraps and validates the payload,
//! calls a service and converts the returned domain model into a DTO. Cached read
//! handlers consult the response cache only after the guard has passed, and write
//! handlers invalidate the cache prefixes whose bodies they change.

pub mod customer_account;
pub mod health;
pub mod order;
pub mod param;
pub mod product;


/// Cache prefix for every product route.
pub const PRODUCTS_PREFIX: &str = "/products";
/// Cache prefix for every order route.
pub const ORDERS_PREFIX: &str = "/orders";
/// Cache prefix for every customer account route.
pub const CUSTOMER_ACCOUNTS_PREFIX: &str = "/customer-accounts";

/// Builds the cache key for a request from its path and query string.
pub fn cache_key(uri: &axum::http::Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
