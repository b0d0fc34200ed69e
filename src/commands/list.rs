//! List site content

use anyhow::Result;

use crate::helpers::format_iso_date;
use crate::Folio;

/// Print the registry contents and the configured listings
pub fn run(folio: &Folio) -> Result<()> {
    let registry = folio.load_registry()?;

    println!("Content ({}):", registry.len());
    for item in registry.iter() {
        match &item.date {
            Some(date) => println!(
                "  {} - {} [{}]",
                format_iso_date(date),
                item.title(),
                item.filename
            ),
            None => println!("  {} [{}]", item.title(), item.filename),
        }
    }

    let listings = &folio.config.listings;
    println!("Listings:");
    println!("  recent: {}", listings.recent.join(", "));
    println!("  highlighted: {}", listings.highlighted.join(", "));

    Ok(())
}
