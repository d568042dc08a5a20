//! Series command implementation.
//!
//! Resolves the raw bars of one index and prints them as JSON, or as candle
//! tooltips with the change since the first close.

use crate::display::{parse_date, parse_interval, parse_provider, print_json, spinner};
use crate::settings::Settings;
use anyhow::Result;
use meridian_lib::prelude::*;
use meridian_lib::{format_candle_tooltip, format_percent, to_percent_series};

/// How the resolved bars are printed.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Output {
    Json { pretty: bool },
    Text,
}

/// Print the resolved bars of `code`.
pub(crate) async fn print_series(
    settings: &Settings,
    code: &str,
    interval: &str,
    date: Option<&str>,
    provider: &str,
    output: Output,
) -> Result<()> {
    let interval = parse_interval(interval)?;
    let date = parse_date(date)?;
    let provider = parse_provider(provider)?;

    let catalog = settings.load_catalog()?;
    if !catalog.contains(code) {
        tracing::warn!(code, "index not in catalog");
    }
    let resolver = settings.resolver(&catalog, provider)?;

    let pb = spinner(settings.quiet, format!("Resolving {code} for {date} ({interval})"));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    let bars = resolver.resolve(code, interval, date, provider).await;
    pb.finish_and_clear();

    match output {
        Output::Json { pretty } => print_json(&bars, pretty),
        Output::Text => {
            print!("{}", describe_bars(&bars));
            Ok(())
        }
    }
}

/// One tooltip block per bar, each followed by its change since the first
/// close. A change without a usable base prints empty.
fn describe_bars(bars: &[Bar]) -> String {
    let mut out = String::new();
    for (bar, point) in bars.iter().zip(to_percent_series(bars)) {
        let change = point.value.is_finite().then_some(point.value);
        out.push_str(&format_candle_tooltip(bar));
        out.push_str(&format!("\nChange: {}\n\n", format_percent(change)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_describe_bars() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let bars = vec![
            Bar::new(t, 100.0, 101.0, 99.0, 100.0),
            Bar::new(t + chrono::TimeDelta::hours(1), 100.0, 111.0, 99.5, 110.0),
        ];
        let text = describe_bars(&bars);
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("2024-01-15 10:00\nOpen: 100.00"));
        assert!(blocks[0].ends_with("Change: 0.00%"));
        assert!(blocks[1].contains("High: 111.00"));
        assert!(blocks[1].ends_with("Change: 10.00%"));
    }

    #[test]
    fn test_describe_bars_without_base() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let bars = vec![Bar::new(t, 0.0, 0.0, 0.0, 0.0)];
        assert!(describe_bars(&bars).ends_with("Change: \n\n"));
    }
}
