//! folio-rs: a personal website and blog server
//!
//! This crate serves a home page, a navigation shell, and a blog built from
//! statically-authored markdown documents. Blog listings are curated through
//! the site configuration rather than queried.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod routes;
pub mod server;
pub mod shell;

use anyhow::Result;
use std::path::Path;

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (markdown documents)
    pub content_dir: std::path::PathBuf,
    /// Static assets directory
    pub static_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            static_dir,
        })
    }

    /// Load the content registry from the content directory
    pub fn load_registry(&self) -> Result<content::ContentRegistry> {
        content::ContentRegistry::load(&self.content_dir)
    }
}
