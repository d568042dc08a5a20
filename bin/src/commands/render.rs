//! Render command implementation.
//!
//! Maps CLI flags onto view parameters, runs one render and prints the
//! outcome JSON to stdout.

use crate::display::{
    JsonSink, parse_date, parse_interval, parse_mode, parse_provider, parse_region, spinner,
};
use crate::settings::Settings;
use anyhow::{Context, Result};
use meridian_lib::prelude::*;

/// Render flags as given on the command line.
pub(crate) struct RenderArgs<'a> {
    pub(crate) mode: &'a str,
    pub(crate) interval: &'a str,
    pub(crate) date: Option<&'a str>,
    pub(crate) provider: &'a str,
    pub(crate) select: Vec<String>,
    pub(crate) region: Option<&'a str>,
    pub(crate) all: bool,
    pub(crate) cycle: Option<usize>,
    pub(crate) index: Option<String>,
    pub(crate) market_hours: bool,
    pub(crate) pretty: bool,
}

/// Render one chart and print it.
pub(crate) async fn render(settings: &Settings, args: RenderArgs<'_>) -> Result<()> {
    let mode = parse_mode(args.mode)?;
    let interval = parse_interval(args.interval)?;
    let date = parse_date(args.date)?;
    let provider = parse_provider(args.provider)?;

    let catalog = settings.load_catalog()?;

    let region = args
        .region
        .map(parse_region)
        .transpose()
        .context("Invalid --region")?;
    let selection = build_selection(&catalog, args.all, region, args.cycle, &args.select);

    let mut params = ViewParams::new(date)
        .with_mode(mode)
        .with_interval(interval)
        .with_provider(provider)
        .with_selection(selection.into_codes())
        .with_market_hours(args.market_hours);
    if let Some(index) = args.index {
        params = params.with_candle_code(index);
    }

    let resolver = settings.resolver(&catalog, provider)?;
    let renderer = Renderer::new(resolver, catalog);

    let pb = spinner(
        settings.quiet,
        format!("Rendering {mode} chart for {date} ({interval}, {provider})"),
    );
    let mut sink = JsonSink::stdout(pb, args.pretty);
    renderer.render_into(&params, &mut sink).await;
    sink.finish()
}

/// Builds the overlay selection from the selection flags.
///
/// `--all` and `--region` add indices, `--cycle` presses the region button
/// and each `--select` code is toggled last.
fn build_selection(
    catalog: &IndexCatalog,
    all: bool,
    region: Option<Region>,
    cycle: Option<usize>,
    toggles: &[String],
) -> Selection {
    let mut selection = if all {
        Selection::all(catalog)
    } else {
        Selection::none()
    };
    if let Some(region) = region {
        selection.select_region(catalog, region);
    }
    for _ in 0..cycle.unwrap_or(0) {
        let region = selection.cycle_region(catalog);
        tracing::debug!(%region, next = %selection.cycle_label(), "cycled region");
    }
    for code in toggles {
        selection.toggle(code);
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(selection: &Selection) -> Vec<&str> {
        selection.codes().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_select_toggles_codes() {
        let catalog = IndexCatalog::global();
        let toggles = vec!["^N225".to_string(), "^HSI".to_string(), "^N225".to_string()];
        let selection = build_selection(catalog, false, None, None, &toggles);
        assert_eq!(codes(&selection), ["^HSI"]);

        let selection = build_selection(catalog, true, None, None, &["^HSI".to_string()]);
        assert_eq!(selection.codes().len(), catalog.len() - 1);
        assert!(!selection.codes().contains("^HSI"));
    }

    #[test]
    fn test_cycle_selects_last_region() {
        let catalog = IndexCatalog::global();
        let selection = build_selection(catalog, false, None, Some(2), &[]);
        let mut expected: Vec<&str> = catalog.by_region(Region::Asia).map(IndexDef::code).collect();
        expected.sort_unstable();
        assert_eq!(codes(&selection), expected);
        assert_eq!(selection.cycle_label(), "By Region (Europe)");
    }

    #[test]
    fn test_region_adds_to_toggles() {
        let catalog = IndexCatalog::global();
        let selection = build_selection(
            catalog,
            false,
            Some(Region::Oceania),
            None,
            &["^FTSE".to_string()],
        );
        assert!(selection.codes().contains("^AXJO"));
        assert!(selection.codes().contains("^FTSE"));
    }
}
