//! Content registry - compiles documents from the content directory
//!
//! The registry is populated once at startup and treated as read-only after,
//! so concurrent reads from request handlers need no locking.

use anyhow::Result;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

use super::{ContentItem, FrontMatter, MarkdownRenderer};

/// Errors from compiling a single content document
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("unreadable source file: {0}")]
    Io(#[from] std::io::Error),

    #[error("source file has no usable name: {0}")]
    BadFilename(String),
}

/// Identifier-keyed collection of content items, in load order
pub struct ContentRegistry {
    items: IndexMap<String, ContentItem>,
}

impl ContentRegistry {
    /// Load all content documents under a directory
    pub fn load(content_dir: &Path) -> Result<Self> {
        let mut items = IndexMap::new();

        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Self { items });
        }

        let renderer = MarkdownRenderer::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                match compile_document(&renderer, path) {
                    Ok(item) => {
                        if let Some(previous) =
                            items.insert(item.identifier.clone(), item)
                        {
                            tracing::warn!(
                                "Duplicate content identifier {:?}, keeping the later file",
                                previous.identifier
                            );
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Failed to compile {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Registry loaded with {} item(s)", items.len());
        Ok(Self { items })
    }

    /// Look up an item by identifier
    pub fn get(&self, identifier: &str) -> Option<&ContentItem> {
        self.items.get(identifier)
    }

    /// Iterate items in load order
    pub fn iter(&self) -> impl Iterator<Item = &ContentItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Compile one document into a content item
fn compile_document(
    renderer: &MarkdownRenderer,
    path: &Path,
) -> Result<ContentItem, ContentError> {
    let filename = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::BadFilename(path.display().to_string()))?
        .to_string();

    let identifier = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ContentError::BadFilename(path.display().to_string()))?
        .to_string();

    let source = fs::read_to_string(path)?;
    let (fm, body) = FrontMatter::parse(&source);

    let attributes = fm.attributes(&identifier);
    let date = fm.parse_date();
    let html = renderer.render(body);

    Ok(ContentItem {
        identifier,
        filename,
        html,
        attributes,
        date,
    })
}

/// Check if a file is a content document
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "mdx")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn test_load_registry() {
        let dir = tempfile::tempdir().unwrap();
        write_post(
            dir.path(),
            "first-post.md",
            "---\ntitle: First Post\ndescription: The first one\n---\n# Hi\n",
        );
        write_post(dir.path(), "second-post.mdx", "Plain body, no front-matter.\n");
        write_post(dir.path(), "notes.txt", "not content");

        let registry = ContentRegistry::load(dir.path()).unwrap();
        assert_eq!(registry.len(), 2);

        let first = registry.get("first-post").unwrap();
        assert_eq!(first.title(), "First Post");
        assert_eq!(first.description(), "The first one");
        assert_eq!(first.filename, "first-post.md");
        assert!(first.html.contains("<h1>Hi</h1>"));

        let second = registry.get("second-post").unwrap();
        assert_eq!(second.title(), "second-post");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_load_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let registry = ContentRegistry::load(&dir.path().join("nope")).unwrap();
        assert!(registry.is_empty());
    }
}
