//! Per-route presentation metadata and its resolution

use serde::{Deserialize, Serialize};

use super::MatchedRoute;

/// Optional presentation hints a route may declare.
///
/// The single recognized property is `html_background_color`. The value is
/// kept loosely typed on purpose: only string declarations take part in
/// resolution, anything else is skipped as if it were absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteHandle {
    pub html_background_color: Option<serde_yaml::Value>,
}

impl RouteHandle {
    /// A handle declaring a background color
    pub fn background(color: &str) -> Self {
        Self {
            html_background_color: Some(serde_yaml::Value::String(color.to_string())),
        }
    }

    /// The declared background color, when it is a string
    pub fn background_color(&self) -> Option<&str> {
        self.html_background_color.as_ref().and_then(|v| v.as_str())
    }
}

/// Resolve the effective background color across a matched route chain.
///
/// The chain is ordered outermost to innermost and the last route declaring
/// a string value wins: a section can set a background and any descendant
/// can override it. Routes without a handle, handles without the property,
/// and non-string declarations are skipped alike. An empty chain resolves to
/// `None`; the page shell supplies the fallback.
pub fn resolve_html_background_color(matches: &[MatchedRoute]) -> Option<&str> {
    let mut effective = None;
    for matched in matches {
        if let Some(color) = matched
            .handle
            .as_ref()
            .and_then(RouteHandle::background_color)
        {
            effective = Some(color);
        }
    }
    effective
}
