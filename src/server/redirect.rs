//! Legacy dated-URL redirection
//!
//! The old blog lived at `/{year}/{month}/{day}/{slug}`; inbound links to
//! that shape are permanently redirected to the slug-based path.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Four positional segments. The date parts are consumed, not validated;
    /// the slug may be empty ("/2021/03/15/").
    static ref LEGACY_PATH: Regex =
        Regex::new(r"^/([^/]+)/([^/]+)/([^/]+)/([^/]*)$").unwrap();
}

/// A request for a post at its pre-migration URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRedirectRequest {
    pub slug: String,
}

/// Parse a request path of the legacy dated shape, if it is one
pub fn parse_legacy_path(path: &str) -> Option<LegacyRedirectRequest> {
    let caps = LEGACY_PATH.captures(path)?;
    Some(LegacyRedirectRequest {
        slug: caps[4].to_string(),
    })
}

/// The canonical location for a legacy request. An empty slug passes through
/// to the degenerate "/blog/" target rather than being rejected; the server
/// always pairs this with a 301.
pub fn redirect_target(request: &LegacyRedirectRequest) -> String {
    format!("/blog/{}", request.slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_path_redirects_to_slug() {
        let request = parse_legacy_path("/2021/03/15/my-post").unwrap();
        assert_eq!(request.slug, "my-post");
        assert_eq!(redirect_target(&request), "/blog/my-post");
    }

    #[test]
    fn test_date_segments_are_not_validated() {
        let request = parse_legacy_path("/year/month/day/my-post").unwrap();
        assert_eq!(redirect_target(&request), "/blog/my-post");
    }

    #[test]
    fn test_empty_slug_passes_through() {
        let request = parse_legacy_path("/2021/03/15/").unwrap();
        assert_eq!(request.slug, "");
        assert_eq!(redirect_target(&request), "/blog/");
    }

    #[test]
    fn test_other_shapes_do_not_match() {
        assert!(parse_legacy_path("/2021/03/15").is_none());
        assert!(parse_legacy_path("/blog/my-post").is_none());
        assert!(parse_legacy_path("/a/b/c/d/e").is_none());
        assert!(parse_legacy_path("/").is_none());
    }
}
