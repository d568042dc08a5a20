//! Serializable chart configuration.
//!
//! The layout follows the option objects of common JavaScript charting
//! widgets: camelCase keys, a `type` tag on axes and series, and timestamps
//! in epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Complete description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    /// Hover tooltip.
    pub tooltip: Tooltip,
    /// Plot area margins in pixels.
    pub grid: Grid,
    /// Shared 24-hour time axis.
    pub x_axis: TimeAxis,
    /// Value axis.
    pub y_axis: ValueAxis,
    /// Zoom controls.
    pub data_zoom: Vec<DataZoom>,
    /// Plotted series.
    pub series: Vec<Series>,
    /// Market-hours annotations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

/// How the sink formats tooltip values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormat {
    /// Two-decimal percentage.
    Percent,
    /// Open, high, low and close of the hovered bar.
    Ohlc,
}

/// Axis-triggered tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Always `"axis"`.
    pub trigger: &'static str,
    /// Value formatting.
    pub format: TooltipFormat,
    /// Cross-hair pointer.
    pub cross_pointer: bool,
}

impl Tooltip {
    /// Tooltip for percentage overlays.
    #[must_use]
    pub const fn percent() -> Self {
        Self {
            trigger: "axis",
            format: TooltipFormat::Percent,
            cross_pointer: true,
        }
    }

    /// Tooltip for candlestick charts.
    #[must_use]
    pub const fn ohlc() -> Self {
        Self {
            trigger: "axis",
            format: TooltipFormat::Ohlc,
            cross_pointer: false,
        }
    }
}

/// Plot area margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    /// Left margin.
    pub left: u32,
    /// Right margin.
    pub right: u32,
    /// Top margin.
    pub top: u32,
    /// Bottom margin, leaving room for the zoom slider.
    pub bottom: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            left: 60,
            right: 30,
            top: 40,
            bottom: 80,
        }
    }
}

/// Axis label formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    /// `strftime` pattern applied to UTC timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
    /// Text appended to numeric values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// Time axis fixed to a display window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxis {
    /// Always `"time"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Window start.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub min: DateTime<Utc>,
    /// Window end.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub max: DateTime<Utc>,
    /// Tick label formatting.
    pub axis_label: AxisLabel,
    /// Dashed vertical grid lines.
    pub split_line: bool,
}

/// Numeric value axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueAxis {
    /// Always `"value"`.
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Fit the axis to the data instead of starting at zero.
    pub scale: bool,
    /// Tick label formatting.
    pub axis_label: AxisLabel,
}

/// Zoom control covering a percentage range of the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DataZoom {
    /// Mouse wheel and drag zoom.
    Inside {
        /// Start percentage.
        start: f64,
        /// End percentage.
        end: f64,
    },
    /// Slider below the plot.
    Slider {
        /// Start percentage.
        start: f64,
        /// End percentage.
        end: f64,
        /// Slider height in pixels.
        height: u32,
    },
}

impl DataZoom {
    /// Inside and slider zoom over the whole window.
    #[must_use]
    pub fn full_window() -> Vec<Self> {
        vec![
            Self::Inside {
                start: 0.0,
                end: 100.0,
            },
            Self::Slider {
                start: 0.0,
                end: 100.0,
                height: 30,
            },
        ]
    }
}

/// Line stroke.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    /// Stroke width in pixels.
    pub width: u32,
    /// Stroke colour; the widget palette applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One `[time, value]` point of a line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinePoint(
    #[serde(with = "chrono::serde::ts_milliseconds")] pub DateTime<Utc>,
    pub f64,
);

/// One `[time, open, close, low, high]` entry of a candlestick series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandleEntry(
    #[serde(with = "chrono::serde::ts_milliseconds")] pub DateTime<Utc>,
    pub f64,
    pub f64,
    pub f64,
    pub f64,
);

/// Line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    /// Display name.
    pub name: String,
    /// Point markers.
    pub show_symbol: bool,
    /// Curve smoothing.
    pub smooth: bool,
    /// Stroke.
    pub line_style: LineStyle,
    /// Points in time order.
    pub data: Vec<LinePoint>,
}

/// Candlestick series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickSeries {
    /// Display name.
    pub name: String,
    /// Body and border colour for rising and falling bars.
    pub color: String,
    /// Entries in time order.
    pub data: Vec<CandleEntry>,
}

/// A plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    /// Line series.
    Line(LineSeries),
    /// Candlestick series.
    Candlestick(CandlestickSeries),
}

impl Series {
    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Line(s) => &s.name,
            Self::Candlestick(s) => &s.name,
        }
    }

    /// Returns the number of data entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(s) => s.data.len(),
            Self::Candlestick(s) => s.data.len(),
        }
    }

    /// Returns true if the series has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Market-hours annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Annotation {
    /// Labelled span of the time axis.
    Region {
        /// Short label.
        label: String,
        /// Label colour.
        color: String,
        /// Span start.
        #[serde(with = "chrono::serde::ts_milliseconds")]
        start: DateTime<Utc>,
        /// Span end.
        #[serde(with = "chrono::serde::ts_milliseconds")]
        end: DateTime<Utc>,
    },
    /// Free text above the plot.
    Text {
        /// Text content.
        text: String,
        /// Text colour.
        color: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_candle_entry_layout() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let entry = CandleEntry(t, 10.0, 11.0, 9.0, 12.0);
        let value = serde_json::to_value(entry).unwrap();
        assert_eq!(value, json!([t.timestamp_millis(), 10.0, 11.0, 9.0, 12.0]));
    }

    #[test]
    fn test_series_tagging() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let series = Series::Line(LineSeries {
            name: "Close".into(),
            show_symbol: false,
            smooth: true,
            line_style: LineStyle {
                width: 1,
                color: None,
            },
            data: vec![LinePoint(t, 1.5)],
        });
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["showSymbol"], false);
        assert!(value["lineStyle"].get("color").is_none());
        assert_eq!(value["data"][0], json!([t.timestamp_millis(), 1.5]));
    }

    #[test]
    fn test_data_zoom_covers_window() {
        let value = serde_json::to_value(DataZoom::full_window()).unwrap();
        assert_eq!(
            value,
            json!([
                {"type": "inside", "start": 0.0, "end": 100.0},
                {"type": "slider", "start": 0.0, "end": 100.0, "height": 30}
            ])
        );
    }
}
