use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, ensure_permissions, AuthGuard, Permission},
    model::customer_account::CustomerAccount,
    util::token::{Claims, TokenCodec},
};
use test_utils::{builder::TestBuilder, factory};

mod extract_bearer;
mod require;

fn codec() -> TokenCodec {
    TokenCodec::new("guard-test-secret", Duration::minutes(5))
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

/// Issues a token for an account entity and wraps it in request headers.
fn authorized(tokens: &TokenCodec, account: entity::customer_account::Model) -> HeaderMap {
    let issued = tokens.issue(&CustomerAccount::from_entity(account)).unwrap();
    headers_with(&format!("Bearer {}", issued.token))
}
