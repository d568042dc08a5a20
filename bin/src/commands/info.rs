//! Info command implementation.
//!
//! This module displays the details of one index and where its session falls
//! on the reference timeline for a given date.

use crate::display::parse_date;
use crate::settings::Settings;
use anyhow::{Context, Result};
use meridian_lib::format_axis_label;
use meridian_lib::prelude::*;

/// Show index details and its session on `date` (default today).
pub(crate) fn show_info(settings: &Settings, code: &str, date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let catalog = settings.load_catalog()?;
    let index = catalog
        .lookup(code)
        .with_context(|| format!("Unknown index: {code}"))?;

    println!("Index:    {}", index.name());
    println!("Code:     {}", index.code());
    println!("Region:   {}", index.region());
    println!("Hours:    {} ({})", index.hours_label(), index.timezone());
    println!("Colour:   {}", index.color());

    let session = Session::for_index(index, date);
    let window = TimeWindow::for_date(date);

    println!("\nSession on {date} (reference timeline):");
    println!(
        "  Opens:  {} ({})",
        session.open.format("%Y-%m-%d %H:%M"),
        format_axis_label(session.open)
    );
    println!(
        "  Closes: {} ({})",
        session.close.format("%Y-%m-%d %H:%M"),
        format_axis_label(session.close)
    );
    println!("  Length: {} min", session.duration().num_minutes());

    if session.crosses_midnight() {
        println!("  Runs past midnight into the next day's window.");
    }
    match window.clip(&session) {
        Some((start, end)) => println!(
            "  Visible in the {date} window: {} - {}",
            format_axis_label(start),
            format_axis_label(end)
        ),
        None => println!("  Not visible in the {date} window."),
    }

    Ok(())
}
