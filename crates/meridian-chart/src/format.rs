//! Label formatting for chart sinks.

use chrono::{DateTime, Utc};
use meridian_types::Bar;

/// `strftime` pattern of time-axis labels.
pub const AXIS_LABEL_FORMAT: &str = "%H:%M";

/// Formats a time-axis label as `HH:MM` on the reference timeline.
#[must_use]
pub fn format_axis_label(time: DateTime<Utc>) -> String {
    time.format(AXIS_LABEL_FORMAT).to_string()
}

/// Formats a percentage tooltip value; missing values render empty.
#[must_use]
pub fn format_percent(value: Option<f64>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.2}%"))
}

/// Formats the tooltip of a hovered candle, one field per line.
#[must_use]
pub fn format_candle_tooltip(bar: &Bar) -> String {
    format!(
        "{}\nOpen: {:.2}\nHigh: {:.2}\nLow: {:.2}\nClose: {:.2}",
        bar.time.format("%Y-%m-%d %H:%M"),
        bar.open,
        bar.high,
        bar.low,
        bar.close
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_axis_label() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 59).unwrap();
        assert_eq!(format_axis_label(t), "09:05");
        let midnight = Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).unwrap();
        assert_eq!(format_axis_label(midnight), "00:00");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(Some(1.234_5)), "1.23%");
        assert_eq!(format_percent(Some(-10.0)), "-10.00%");
        assert_eq!(format_percent(None), "");
    }

    #[test]
    fn test_candle_tooltip() {
        let t = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let bar = Bar::new(t, 10.0, 12.0, 9.0, 11.0);
        assert_eq!(
            format_candle_tooltip(&bar),
            "2024-01-15 10:30\nOpen: 10.00\nHigh: 12.00\nLow: 9.00\nClose: 11.00"
        );
    }
}
