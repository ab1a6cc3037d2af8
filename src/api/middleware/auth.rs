//! Admin gate - Session token extraction and verification for protected routes.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;

use crate::api::AppState;
use crate::config::TOKEN_COOKIE_NAME;
use crate::errors::AppError;
use crate::services::Claims;

/// Find a session token in the request headers.
///
/// The `Authorization` header wins: a two-part value is read as
/// `<scheme> <token>`, a single-part value as the bare token. The `token`
/// cookie is consulted only when the header yields nothing.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| match value.split_once(' ') {
            Some((_scheme, token)) => token.trim(),
            None => value.trim(),
        })
        .filter(|token| !token.is_empty());

    if let Some(token) = from_header {
        return Some(token.to_string());
    }

    CookieJar::from_headers(headers)
        .get(TOKEN_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Verified admin session.
///
/// Taking this extractor in a handler gates the handler: the request is
/// rejected with 401/403 before the body is read or any service is called.
#[derive(Debug, Clone)]
pub struct AdminSession(pub Claims);

#[axum::async_trait]
impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_token(&parts.headers);

        let claims = state
            .auth_service
            .authorize(token.as_deref())
            .map_err(|e| {
                tracing::debug!(method = %parts.method, path = %parts.uri.path(), "Admin gate rejected request: {}", e);
                AppError::from(e)
            })?;

        Ok(AdminSession(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::COOKIE, HeaderValue};

    fn headers(pairs: &[(axum::http::HeaderName, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(name.clone(), HeaderValue::from_str(value).unwrap());
        }
        map
    }

    #[test]
    fn test_bearer_header() {
        let map = headers(&[(AUTHORIZATION, "Bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_word_case_ignored() {
        let map = headers(&[(AUTHORIZATION, "bearer abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bare_header() {
        let map = headers(&[(AUTHORIZATION, "abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_cookie_fallback() {
        let map = headers(&[(COOKIE, "theme=dark; token=abc.def.ghi")]);
        assert_eq!(extract_token(&map).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_header_takes_precedence_over_cookie() {
        let map = headers(&[
            (AUTHORIZATION, "Bearer from.header.jwt"),
            (COOKIE, "token=from.cookie.jwt"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("from.header.jwt"));
    }

    #[test]
    fn test_empty_header_falls_back_to_cookie() {
        let map = headers(&[(AUTHORIZATION, "Bearer "), (COOKIE, "token=from.cookie.jwt")]);
        assert_eq!(extract_token(&map).as_deref(), Some("from.cookie.jwt"));
    }

    #[test]
    fn test_absent() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        assert_eq!(extract_token(&headers(&[(COOKIE, "session=xyz")])), None);
    }
}
