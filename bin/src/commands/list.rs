//! List command implementation.
//!
//! This module handles listing catalog indices with an optional region filter.

use crate::display::{parse_region, print_json};
use crate::settings::Settings;
use anyhow::Result;
use meridian_lib::MarketHours;
use meridian_lib::prelude::*;

/// List catalog indices, optionally restricted to one region.
///
/// With `json` the market-hours summary is printed instead of the table.
pub(crate) fn list_indices(settings: &Settings, region: Option<&str>, json: bool) -> Result<()> {
    let catalog = settings.load_catalog()?;
    let region = region.map(parse_region).transpose()?;

    if json {
        return print_json(&market_hours(&catalog, region), true);
    }

    let indices: Vec<&IndexDef> = match region {
        Some(r) => catalog.by_region(r).collect(),
        None => catalog.all().collect(),
    };

    if indices.is_empty() {
        println!("No indices found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<28} {:<10} {:<15} {:<6}",
        "CODE", "NAME", "REGION", "HOURS", "TZ"
    );
    println!("{}", "-".repeat(75));

    for index in &indices {
        println!(
            "{:<12} {:<28} {:<10} {:<15} {:<6}",
            index.code(),
            index.name(),
            index.region(),
            index.hours_label(),
            index.timezone()
        );
    }

    println!("\nTotal: {} indices", indices.len());
    Ok(())
}

/// Market-hours summary of the catalog, or of one region.
fn market_hours(catalog: &IndexCatalog, region: Option<Region>) -> Vec<MarketHours> {
    match region {
        Some(r) => catalog.by_region(r).map(MarketHours::from).collect(),
        None => catalog.market_hours(),
    }
}
