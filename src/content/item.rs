//! Content item model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One compiled long-form document plus its extracted display attributes.
///
/// Items are created once when the registry loads and never mutated after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable key: the source filename with its extension stripped. Doubles
    /// as the URL path segment for the canonical post route.
    pub identifier: String,

    /// Source filename as found on disk (extension kept)
    pub filename: String,

    /// Rendered HTML body
    pub html: String,

    /// Extracted attributes (title, description, and any other string-valued
    /// front-matter fields)
    pub attributes: HashMap<String, String>,

    /// Publication date, when the front-matter declares one
    pub date: Option<DateTime<Local>>,
}

impl ContentItem {
    /// Display title, falling back to the identifier
    pub fn title(&self) -> &str {
        self.attributes
            .get("title")
            .map(String::as_str)
            .unwrap_or(&self.identifier)
    }

    /// Display description, empty when not declared
    pub fn description(&self) -> &str {
        self.attributes
            .get("description")
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with(attributes: &[(&str, &str)]) -> ContentItem {
        ContentItem {
            identifier: "my-post".to_string(),
            filename: "my-post.md".to_string(),
            html: String::new(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            date: None,
        }
    }

    #[test]
    fn test_title_from_attributes() {
        let item = item_with(&[("title", "My Post"), ("description", "About things")]);
        assert_eq!(item.title(), "My Post");
        assert_eq!(item.description(), "About things");
    }

    #[test]
    fn test_title_falls_back_to_identifier() {
        let item = item_with(&[]);
        assert_eq!(item.title(), "my-post");
        assert_eq!(item.description(), "");
    }
}
