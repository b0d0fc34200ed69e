//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,

    // Server
    pub ip: String,
    pub port: u16,

    // Presentation
    /// Background color used when no matched route declares one
    pub default_background: String,

    // Blog index curation
    #[serde(default)]
    pub listings: ListingsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            static_dir: "static".to_string(),

            ip: "localhost".to_string(),
            port: 4000,

            default_background: "#f9fafb".to_string(),

            listings: ListingsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Curated blog index membership: which content identifiers belong to which
/// listing. Ordering here is display ordering. An identifier may appear in
/// more than one listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingsConfig {
    pub recent: Vec<String>,
    pub highlighted: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.port, 4000);
        assert_eq!(config.default_background, "#f9fafb");
        assert!(config.listings.recent.is_empty());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
author: Test User
port: 8080
listings:
  recent:
    - setting-up-production-monitoring
  highlighted:
    - taking-the-d-out-of-crud
    - taking-the-d-out-of-crud-with-soft-updates
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.port, 8080);
        assert_eq!(config.listings.recent, vec!["setting-up-production-monitoring"]);
        assert_eq!(config.listings.highlighted.len(), 2);
    }

    #[test]
    fn test_unknown_fields_preserved() {
        let yaml = "title: My Site\ncustom_field: hello\n";
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.extra.get("custom_field").and_then(|v| v.as_str()),
            Some("hello")
        );
    }
}
