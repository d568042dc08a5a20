//! Display utilities and argument parsing for the meridian CLI.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use meridian_lib::prelude::*;
use meridian_lib::ChartError;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
/// `--quiet` always limits output to errors.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parses a `YYYY-MM-DD` date, defaulting to today (UTC).
pub(crate) fn parse_date(s: Option<&str>) -> Result<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {s}")),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

pub(crate) fn parse_interval(s: &str) -> Result<Interval> {
    s.parse::<Interval>().map_err(|e| anyhow!("{e}"))
}

pub(crate) fn parse_provider(s: &str) -> Result<Provider> {
    s.parse::<Provider>().map_err(|e| anyhow!("{e}"))
}

pub(crate) fn parse_mode(s: &str) -> Result<ChartMode> {
    s.parse::<ChartMode>().map_err(|e| anyhow!("{e}"))
}

pub(crate) fn parse_region(s: &str) -> Result<Region> {
    s.parse::<Region>().map_err(|e| anyhow!("{e}"))
}

/// Creates a stderr spinner, hidden in quiet mode.
pub(crate) fn spinner(quiet: bool, message: String) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message);
    pb
}

/// Writes `value` as JSON to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    JsonWriter::new()
        .with_pretty(pretty)
        .write(value, stdout.lock())
        .context("Failed to write JSON output")
}

/// Chart sink writing each outcome as one JSON document.
///
/// The spinner runs on stderr while a render is loading. The first write or
/// flush error is kept and reported by [`JsonSink::finish`].
pub(crate) struct JsonSink<W> {
    writer: JsonWriter,
    out: W,
    spinner: ProgressBar,
    error: Option<ChartError>,
}

impl JsonSink<io::Stdout> {
    /// Creates a sink printing to stdout.
    pub(crate) fn stdout(spinner: ProgressBar, pretty: bool) -> Self {
        Self::new(io::stdout(), spinner, pretty)
    }
}

impl<W: Write> JsonSink<W> {
    pub(crate) const fn new(out: W, spinner: ProgressBar, pretty: bool) -> Self {
        Self {
            writer: JsonWriter::new().with_pretty(pretty),
            out,
            spinner,
            error: None,
        }
    }

    /// Returns the first write error, if any.
    pub(crate) fn finish(self) -> Result<()> {
        match self.error {
            Some(e) => Err(e).context("Failed to write JSON output"),
            None => Ok(()),
        }
    }
}

impl<W: Write> ChartSink for JsonSink<W> {
    fn loading(&mut self, active: bool) {
        if active {
            self.spinner.enable_steady_tick(Duration::from_millis(100));
        } else {
            self.spinner.finish_and_clear();
        }
    }

    fn show(&mut self, outcome: RenderOutcome) {
        // The writer flushes after each document.
        if let Err(e) = self.writer.write(&outcome, &mut self.out) {
            self.error.get_or_insert(e);
        }
    }
}
