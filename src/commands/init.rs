//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    // Default _config.yml
    let config_content = r#"# Site
title: Folio
description: ''
author: John Doe
language: en

# URL
url: http://example.com
root: /

# Directory
content_dir: content
static_dir: static

# Server
ip: localhost
port: 4000

# Presentation
default_background: '#f9fafb'

# Blog index curation. Order here is display order; a post may appear in
# both listings.
listings:
  recent:
    - hello-world
  highlighted: []
"#;

    let config_path = target_dir.join("_config.yml");
    if !config_path.exists() {
        fs::write(&config_path, config_content)?;
    }

    // A sample post so the blog index has something to show
    let sample_post = r#"---
title: Hello World
description: The first post on this site.
date: 2024-01-01
---

Welcome to your new site. Edit this file under `content/`, curate the blog
index through `listings` in `_config.yml`, and run `folio-rs serve`.
"#;

    let sample_path = target_dir.join("content").join("hello-world.md");
    if !sample_path.exists() {
        fs::write(&sample_path, sample_post)?;
    }

    Ok(())
}
