//! Chart configuration assembly.

use chrono::{DateTime, Utc};
use meridian_catalog::IndexCatalog;
use meridian_timeline::{CandleView, Overlay, TimeWindow};
use meridian_types::Session;
use thiserror::Error;

use crate::config::{
    Annotation, AxisLabel, CandleEntry, CandlestickSeries, ChartConfig, DataZoom, Grid, LinePoint,
    LineSeries, LineStyle, Series, TimeAxis, Tooltip, ValueAxis,
};
use crate::format::AXIS_LABEL_FORMAT;

/// Candlestick colour when the index is not in the catalog.
pub const CANDLE_FALLBACK_COLOR: &str = "#ef4444";

/// Colour of the close-price line drawn over candlesticks.
pub const CLOSE_LINE_COLOR: &str = "#64748b";

/// Errors that can occur while building a chart configuration.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A plotted value is NaN or infinite.
    #[error("Non-finite {field} in series '{series}' at {time}")]
    NonFinite {
        /// Series name.
        series: String,
        /// Offending field.
        field: &'static str,
        /// Instant of the offending point.
        time: DateTime<Utc>,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Assembles [`ChartConfig`] values from normalized timelines.
///
/// Names and colours come from the catalog; unknown codes are plotted under
/// their own code with the widget's default colour.
#[derive(Debug, Clone, Copy)]
pub struct ChartConfigBuilder<'a> {
    catalog: &'a IndexCatalog,
    show_market_hours: bool,
}

impl<'a> ChartConfigBuilder<'a> {
    /// Creates a builder backed by `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a IndexCatalog) -> Self {
        Self {
            catalog,
            show_market_hours: false,
        }
    }

    /// Enables or disables market-hours annotations.
    #[must_use]
    pub const fn with_market_hours(mut self, show: bool) -> Self {
        self.show_market_hours = show;
        self
    }

    /// Builds the percentage overlay configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NonFinite`] if any percentage is not finite.
    pub fn overlay(&self, overlay: &Overlay) -> Result<ChartConfig, ChartError> {
        let series = overlay
            .series
            .iter()
            .map(|s| {
                let index = self.catalog.get(&s.code);
                let name = index.map_or(s.code.as_str(), |i| i.name()).to_string();
                let data = s
                    .points
                    .iter()
                    .map(|p| Ok(LinePoint(p.time, finite(&name, "value", p.time, p.value)?)))
                    .collect::<Result<Vec<_>, ChartError>>()?;
                Ok(Series::Line(LineSeries {
                    name,
                    show_symbol: false,
                    smooth: true,
                    line_style: LineStyle {
                        width: 2,
                        color: index.map(|i| i.color().to_string()),
                    },
                    data,
                }))
            })
            .collect::<Result<Vec<_>, ChartError>>()?;

        let annotations = if self.show_market_hours {
            self.session_regions(&overlay.window)
        } else {
            Vec::new()
        };

        Ok(ChartConfig {
            tooltip: Tooltip::percent(),
            grid: Grid::default(),
            x_axis: time_axis(&overlay.window),
            y_axis: ValueAxis {
                kind: "value",
                scale: false,
                axis_label: AxisLabel {
                    time_format: None,
                    suffix: Some("%".to_string()),
                },
            },
            data_zoom: DataZoom::full_window(),
            series,
            annotations,
        })
    }

    /// Builds the candlestick configuration of one index.
    ///
    /// An empty view yields a configuration with no series.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NonFinite`] if any price is not finite.
    pub fn candles(&self, view: &CandleView) -> Result<ChartConfig, ChartError> {
        let index = self.catalog.get(&view.code);
        let mut series = Vec::new();

        if !view.bars.is_empty() {
            let entries = view
                .bars
                .iter()
                .map(|bar| {
                    Ok(CandleEntry(
                        bar.time,
                        finite("OHLC", "open", bar.time, bar.open)?,
                        finite("OHLC", "close", bar.time, bar.close)?,
                        finite("OHLC", "low", bar.time, bar.low)?,
                        finite("OHLC", "high", bar.time, bar.high)?,
                    ))
                })
                .collect::<Result<Vec<_>, ChartError>>()?;
            let close_line = entries.iter().map(|e| LinePoint(e.0, e.2)).collect();

            series.push(Series::Candlestick(CandlestickSeries {
                name: "OHLC".to_string(),
                color: index.map_or(CANDLE_FALLBACK_COLOR, |i| i.color()).to_string(),
                data: entries,
            }));
            series.push(Series::Line(LineSeries {
                name: "Close".to_string(),
                show_symbol: false,
                smooth: true,
                line_style: LineStyle {
                    width: 1,
                    color: Some(CLOSE_LINE_COLOR.to_string()),
                },
                data: close_line,
            }));
        }

        let annotations = match index {
            Some(index) if self.show_market_hours => vec![Annotation::Text {
                text: format!(
                    "Market Hours: {} Australian Time ({})",
                    index.hours_label(),
                    index.timezone()
                ),
                color: index.color().to_string(),
            }],
            _ => Vec::new(),
        };

        Ok(ChartConfig {
            tooltip: Tooltip::ohlc(),
            grid: Grid::default(),
            x_axis: time_axis(&view.window),
            y_axis: ValueAxis {
                kind: "value",
                scale: true,
                axis_label: AxisLabel::default(),
            },
            data_zoom: DataZoom::full_window(),
            series,
            annotations,
        })
    }

    /// One labelled region per catalog index, in catalog order.
    fn session_regions(&self, window: &TimeWindow) -> Vec<Annotation> {
        let date = window.start.date_naive();
        self.catalog
            .all()
            .map(|index| {
                let session = Session::for_index(index, date);
                Annotation::Region {
                    label: index.short_name().to_string(),
                    color: index.color().to_string(),
                    start: session.open,
                    end: session.close,
                }
            })
            .collect()
    }
}

fn time_axis(window: &TimeWindow) -> TimeAxis {
    TimeAxis {
        kind: "time",
        min: window.start,
        max: window.end,
        axis_label: AxisLabel {
            time_format: Some(AXIS_LABEL_FORMAT.to_string()),
            suffix: None,
        },
        split_line: true,
    }
}

fn finite(series: &str, field: &'static str, time: DateTime<Utc>, value: f64) -> Result<f64, ChartError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::NonFinite {
            series: series.to_string(),
            field,
            time,
        })
    }
}
