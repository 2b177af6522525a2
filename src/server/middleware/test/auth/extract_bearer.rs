use super::*;

/// Tests extracting a well-formed bearer token.
///
/// Expected: Some(token) regardless of scheme case
#[test]
fn extracts_token() {
    assert_eq!(bearer_token(&headers_with("Bearer abc.def")), Some("abc.def"));
    assert_eq!(bearer_token(&headers_with("bearer abc.def")), Some("abc.def"));
}

/// Tests rejecting missing and malformed headers.
///
/// Expected: None
#[test]
fn rejects_malformed_headers() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
    assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
    assert_eq!(bearer_token(&headers_with("Bearer")), None);
    assert_eq!(bearer_token(&headers_with("Bearer   ")), None);
}
