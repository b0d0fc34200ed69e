//! Blog index listings
//!
//! Listings are an editorial decision, not a query: the site configuration
//! names which identifiers belong to which listing and in what order. The
//! build performs no sorting, filtering, or deduplication, so an item may
//! appear in more than one listing.

use serde::Serialize;

use super::{ContentItem, ContentRegistry};
use crate::config::ListingsConfig;

/// The named listings shown on the blog index
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSet {
    pub recent: Vec<ContentItem>,
    pub highlighted: Vec<ContentItem>,
}

/// Build the blog index listings from the registry and the configured
/// membership. Identifiers the registry does not know are skipped with a
/// warning; nothing validates that the derived links resolve.
pub fn build_listings(registry: &ContentRegistry, membership: &ListingsConfig) -> ListingSet {
    ListingSet {
        recent: collect(registry, &membership.recent),
        highlighted: collect(registry, &membership.highlighted),
    }
}

fn collect(registry: &ContentRegistry, identifiers: &[String]) -> Vec<ContentItem> {
    let mut items = Vec::with_capacity(identifiers.len());
    for identifier in identifiers {
        match registry.get(identifier) {
            Some(item) => items.push(item.clone()),
            None => {
                tracing::warn!("Listing references unknown content {:?}", identifier);
            }
        }
    }
    items
}

/// One link card on the blog index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingEntry {
    pub href: String,
    pub title: String,
    pub description: String,
}

impl ListingEntry {
    /// Derive the display entry for a content item. The href is the source
    /// filename with any content extension stripped, prefixed with `/` - a
    /// pure string transform with no existence check.
    pub fn from_item(item: &ContentItem) -> Self {
        Self {
            href: format!("/{}", strip_content_extension(&item.filename)),
            title: item.title().to_string(),
            description: item.description().to_string(),
        }
    }
}

/// Derive the display entries for a whole listing
pub fn listing_entries(items: &[ContentItem]) -> Vec<ListingEntry> {
    items.iter().map(ListingEntry::from_item).collect()
}

/// Strip a trailing content-file extension, if any
pub fn strip_content_extension(filename: &str) -> &str {
    for ext in [".md", ".markdown", ".mdx"] {
        if let Some(stem) = filename.strip_suffix(ext) {
            return stem;
        }
    }
    filename
}
