//! Site route tree
//!
//! Route definitions nest the way pages nest: an outer document layout, then
//! sections, then leaves. Matching a request path yields the ordered chain of
//! matched routes (outermost first), which is what presentation-metadata
//! resolution consumes.

mod handle;

pub use handle::{resolve_html_background_color, RouteHandle};

/// How a route definition matches path segments
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A fixed segment, e.g. "blog"
    Static(&'static str),
    /// Any single segment, captured under the given name
    Param(&'static str),
    /// Matches only when no segments remain
    Index,
}

/// One route definition in the site route tree
#[derive(Debug, Clone)]
pub struct RouteDef {
    /// Stable identifier, used in diagnostics and tests
    pub id: &'static str,
    /// None marks a pathless layout route that consumes no segments
    pub segment: Option<Segment>,
    /// Optional presentation metadata
    pub handle: Option<RouteHandle>,
    pub children: Vec<RouteDef>,
}

/// One entry in the chain of routes matched for a request, ordered from the
/// outermost layout to the innermost leaf
#[derive(Debug, Clone)]
pub struct MatchedRoute {
    pub id: &'static str,
    pub handle: Option<RouteHandle>,
    /// Captured parameter, when the definition had one
    pub param: Option<(&'static str, String)>,
}

impl RouteDef {
    /// Match a request path against this tree, returning the chain of
    /// matched routes or `None` when nothing matches
    pub fn match_chain(&self, path: &str) -> Option<Vec<MatchedRoute>> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut chain = Vec::new();
        if self.descend(&segments, &mut chain) {
            Some(chain)
        } else {
            None
        }
    }

    fn descend(&self, remaining: &[&str], chain: &mut Vec<MatchedRoute>) -> bool {
        let (consumed, param) = match &self.segment {
            None => (0, None),
            Some(Segment::Index) => {
                if !remaining.is_empty() {
                    return false;
                }
                (0, None)
            }
            Some(Segment::Static(s)) => {
                if remaining.first() != Some(s) {
                    return false;
                }
                (1, None)
            }
            Some(Segment::Param(name)) => match remaining.first() {
                Some(value) => (1, Some((*name, value.to_string()))),
                None => return false,
            },
        };

        chain.push(MatchedRoute {
            id: self.id,
            handle: self.handle.clone(),
            param,
        });

        let rest = &remaining[consumed..];

        if self.children.is_empty() {
            if rest.is_empty() {
                return true;
            }
            chain.pop();
            return false;
        }

        let depth = chain.len();
        for child in &self.children {
            if child.descend(rest, chain) {
                return true;
            }
            chain.truncate(depth);
        }
        chain.pop();
        false
    }
}

/// The site's route tree: home page, blog section with its index and the
/// slug leaf. The blog index declares the light background; post leaves get
/// their handle attached per-document at render time.
pub fn site_routes() -> RouteDef {
    RouteDef {
        id: "root",
        segment: None,
        handle: None,
        children: vec![
            RouteDef {
                id: "home",
                segment: Some(Segment::Index),
                handle: None,
                children: Vec::new(),
            },
            RouteDef {
                id: "blog",
                segment: Some(Segment::Static("blog")),
                handle: None,
                children: vec![
                    RouteDef {
                        id: "blog_index",
                        segment: Some(Segment::Index),
                        handle: Some(RouteHandle::background("#f9fafb")),
                        children: Vec::new(),
                    },
                    RouteDef {
                        id: "post",
                        segment: Some(Segment::Param("slug")),
                        handle: None,
                        children: Vec::new(),
                    },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(chain: &[MatchedRoute]) -> Vec<&'static str> {
        chain.iter().map(|m| m.id).collect()
    }

    #[test]
    fn test_home_chain() {
        let routes = site_routes();
        let chain = routes.match_chain("/").unwrap();
        assert_eq!(ids(&chain), vec!["root", "home"]);
    }

    #[test]
    fn test_blog_index_chain() {
        let routes = site_routes();
        let chain = routes.match_chain("/blog").unwrap();
        assert_eq!(ids(&chain), vec!["root", "blog", "blog_index"]);
        assert_eq!(
            resolve_html_background_color(&chain),
            Some("#f9fafb"),
            "blog index declares the light background"
        );
    }

    #[test]
    fn test_post_chain_captures_slug() {
        let routes = site_routes();
        let chain = routes.match_chain("/blog/my-post").unwrap();
        assert_eq!(ids(&chain), vec!["root", "blog", "post"]);
        assert_eq!(
            chain.last().unwrap().param,
            Some(("slug", "my-post".to_string()))
        );
    }

    #[test]
    fn test_unknown_path_does_not_match() {
        let routes = site_routes();
        assert!(routes.match_chain("/nope/extra").is_none());
        assert!(routes.match_chain("/blog/a/b/c").is_none());
    }

    #[test]
    fn test_trailing_slash_is_equivalent() {
        let routes = site_routes();
        let chain = routes.match_chain("/blog/").unwrap();
        assert_eq!(ids(&chain), vec!["root", "blog", "blog_index"]);
    }
}
