//! Current-user lookup
//!
//! The site performs no authentication of its own; whatever the session
//! cookie carries is threaded through the page shell. Anything missing or
//! unreadable degrades to the anonymous user, never an error.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use serde::Serialize;

const SESSION_COOKIE: &str = "folio_user";

/// The user value threaded through the page shell
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub name: Option<String>,
}

impl CurrentUser {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_none()
    }
}

/// Derive the current user from the request headers
pub fn current_user(headers: &HeaderMap) -> CurrentUser {
    let Some(cookies) = headers.get(COOKIE).and_then(|v| v.to_str().ok()) else {
        return CurrentUser::anonymous();
    };

    for pair in cookies.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next() == Some(SESSION_COOKIE) {
            if let Some(value) = parts.next().filter(|v| !v.is_empty()) {
                return CurrentUser {
                    name: Some(value.to_string()),
                };
            }
        }
    }

    CurrentUser::anonymous()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_no_cookie_is_anonymous() {
        assert!(current_user(&HeaderMap::new()).is_anonymous());
    }

    #[test]
    fn test_session_cookie_names_the_user() {
        let headers = headers_with_cookie("theme=dark; folio_user=scott");
        let user = current_user(&headers);
        assert_eq!(user.name.as_deref(), Some("scott"));
    }

    #[test]
    fn test_empty_value_is_anonymous() {
        let headers = headers_with_cookie("folio_user=");
        assert!(current_user(&headers).is_anonymous());
    }

    #[test]
    fn test_unreadable_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_bytes(b"\xff\xfe").unwrap());
        assert!(current_user(&headers).is_anonymous());
    }
}
