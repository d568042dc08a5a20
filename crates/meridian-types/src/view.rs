//! View parameters supplied by the UI boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::{Interval, UnknownVariant};

/// Chart display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Multi-index percentage-change overlay.
    #[default]
    Line,
    /// Single-index OHLC candles.
    Candle,
}

impl ChartMode {
    /// Returns the mode keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Candle => "candle",
        }
    }
}

impl std::fmt::Display for ChartMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartMode {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" | "overlay" => Ok(Self::Line),
            "candle" | "candlestick" | "ohlc" => Ok(Self::Candle),
            _ => Err(UnknownVariant::new("mode", s, "line, candle")),
        }
    }
}

/// Data provider preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Deterministic synthetic data.
    #[default]
    Demo,
    /// Remote quote service, falling back to synthetic data on failure.
    Remote,
}

impl Provider {
    /// Returns the provider keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Remote => "remote",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "demo" | "synthetic" => Ok(Self::Demo),
            "remote" | "yfinance" => Ok(Self::Remote),
            _ => Err(UnknownVariant::new("provider", s, "demo, remote")),
        }
    }
}

/// Parameters of a single render invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    /// Display mode.
    pub mode: ChartMode,
    /// Bar interval.
    pub interval: Interval,
    /// Calendar date of the reference timeline.
    pub date: NaiveDate,
    /// Provider preference.
    pub provider: Provider,
    /// Codes selected for the overlay view.
    pub selected_codes: BTreeSet<String>,
    /// Index shown in candle mode. Defaults to the first catalog entry.
    pub candle_code: Option<String>,
    /// Whether to draw the market-hours annotation layer.
    pub show_market_hours: bool,
}

impl ViewParams {
    /// Creates parameters for `date` with default mode, interval, and provider
    /// and an empty selection.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            mode: ChartMode::default(),
            interval: Interval::default(),
            date,
            provider: Provider::default(),
            selected_codes: BTreeSet::new(),
            candle_code: None,
            show_market_hours: false,
        }
    }

    /// Sets the display mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ChartMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the bar interval.
    #[must_use]
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the provider preference.
    #[must_use]
    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = provider;
        self
    }

    /// Replaces the overlay selection.
    #[must_use]
    pub fn with_selection<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_codes = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the index shown in candle mode.
    #[must_use]
    pub fn with_candle_code(mut self, code: impl Into<String>) -> Self {
        self.candle_code = Some(code.into());
        self
    }

    /// Enables or disables the market-hours annotation layer.
    #[must_use]
    pub fn with_market_hours(mut self, show: bool) -> Self {
        self.show_market_hours = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let params = ViewParams::new(date);
        assert_eq!(params.mode, ChartMode::Line);
        assert_eq!(params.interval, Interval::Day1);
        assert_eq!(params.provider, Provider::Demo);
        assert!(params.selected_codes.is_empty());
        assert!(!params.show_market_hours);
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let params = ViewParams::new(date)
            .with_mode(ChartMode::Candle)
            .with_provider(Provider::Remote)
            .with_selection(["^N225", "^FTSE", "^N225"])
            .with_candle_code("^HSI");
        assert_eq!(params.selected_codes.len(), 2);
        assert_eq!(params.candle_code.as_deref(), Some("^HSI"));
    }

    #[test]
    fn test_keyword_parsing() {
        assert_eq!("candlestick".parse::<ChartMode>().unwrap(), ChartMode::Candle);
        assert_eq!("yfinance".parse::<Provider>().unwrap(), Provider::Remote);
        assert!("bars".parse::<ChartMode>().is_err());
    }
}
