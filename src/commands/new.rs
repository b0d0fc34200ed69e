//! Create a new content document

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Create a new document under the content directory
pub fn create_document(folio: &Folio, title: &str, path: Option<&str>) -> Result<()> {
    fs::create_dir_all(&folio.content_dir)?;

    let now = chrono::Local::now();

    let filename = match path {
        Some(p) => format!("{}.md", p),
        None => format!("{}.md", slug::slugify(title)),
    };

    let file_path = folio.content_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: {}
description: ''
date: {}
---
"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_document_slugifies_title() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_document(&folio, "Hello World", None).unwrap();
        let created = folio.content_dir.join("hello-world.md");
        assert!(created.exists());

        let body = fs::read_to_string(created).unwrap();
        assert!(body.contains("title: Hello World"));
    }

    #[test]
    fn test_create_document_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        create_document(&folio, "Hello World", None).unwrap();
        assert!(create_document(&folio, "Hello World", None).is_err());
    }
}
