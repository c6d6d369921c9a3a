use super::*;
use axum::{extract::FromRequestParts, http::Request};

async fn extract(request: Request<()>) -> AuthToken {
    let (mut parts, _) = request.into_parts();
    AuthToken::from_request_parts(&mut parts, &()).await.unwrap()
}

/// Tests reading the token from a bearer header.
///
/// Expected: token from the header, taking precedence over the cookie
#[tokio::test]
async fn reads_bearer_header_first() {
    let request = Request::builder()
        .header("Authorization", "Bearer abc.def.ghi")
        .header("Cookie", "token=from-cookie")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await, AuthToken(Some("abc.def.ghi".to_string())));
}

/// Tests falling back to the token cookie.
///
/// Expected: token from the cookie
#[tokio::test]
async fn falls_back_to_cookie() {
    let request = Request::builder()
        .header("Cookie", "theme=dark; token=from-cookie")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await, AuthToken(Some("from-cookie".to_string())));
}

/// Tests that the logout placeholder cookie is not treated as a token.
///
/// Expected: no token
#[tokio::test]
async fn ignores_logged_out_cookie() {
    let request = Request::builder()
        .header("Cookie", "token=none")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await, AuthToken(None));
}

/// Tests a non-bearer authorization scheme.
///
/// Expected: no token
#[tokio::test]
async fn ignores_other_authorization_schemes() {
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(())
        .unwrap();

    assert_eq!(extract(request).await, AuthToken(None));
}
