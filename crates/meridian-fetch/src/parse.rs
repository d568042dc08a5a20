//! Quote API payload parsing.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use meridian_types::{Bar, QuoteError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope of `GET /api/stock/{symbol}`.
#[derive(Debug, Deserialize)]
struct StockPayload {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Vec<RawRow>>,
}

/// One OHLC row as sent by the API. Any numeric field may be null.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    time: Value,
    #[serde(default)]
    open: Option<f64>,
    #[serde(default)]
    high: Option<f64>,
    #[serde(default)]
    low: Option<f64>,
    #[serde(default)]
    close: Option<f64>,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Service status (`healthy` when up).
    pub status: String,
    /// Server timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Free-form status message.
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Returns true if the service reports itself healthy.
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Response of `GET /api/symbols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolList {
    /// Symbol to name mapping.
    pub symbols: BTreeMap<String, String>,
    /// Number of symbols reported by the server.
    #[serde(default)]
    pub count: usize,
}

/// Parses a quote payload into bars.
///
/// Missing or null prices default to zero and `value` is always set to
/// `close`.
///
/// # Errors
///
/// Returns [`QuoteError::Data`] if the payload is not JSON, carries an
/// `error` field, lacks the `data` array, has a row with an unreadable time,
/// or contains a negative price.
pub fn parse_stock_payload(body: &str) -> Result<Vec<Bar>, QuoteError> {
    let payload: StockPayload = serde_json::from_str(body)
        .map_err(|e| QuoteError::Data(format!("malformed payload: {e}")))?;

    if let Some(error) = payload.error {
        let detail = payload.message.map(|m| format!(" ({m})")).unwrap_or_default();
        return Err(QuoteError::Data(format!("{error}{detail}")));
    }

    let rows = payload
        .data
        .ok_or_else(|| QuoteError::Data("payload has no data array".to_string()))?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            let time = parse_time(&row.time)
                .ok_or_else(|| QuoteError::Data(format!("row {i}: unreadable time {}", row.time)))?;
            let bar = Bar::new(
                time,
                row.open.unwrap_or(0.0),
                row.high.unwrap_or(0.0),
                row.low.unwrap_or(0.0),
                row.close.unwrap_or(0.0),
            );
            if !bar.is_non_negative() {
                return Err(QuoteError::Data(format!("row {i}: negative price")));
            }
            Ok(bar)
        })
        .collect()
}

/// Extracts the `error` message from an API error body, if any.
#[must_use]
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?.as_str()?;
    match value.get("message").and_then(Value::as_str) {
        Some(message) => Some(format!("{error} ({message})")),
        None => Some(error.to_string()),
    }
}

/// Parses a row time: RFC 3339, naive ISO date-time (taken as UTC), plain
/// date, or epoch milliseconds.
fn parse_time(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Some(Utc.from_utc_datetime(&naive));
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
                return Some(Utc.from_utc_datetime(&naive));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .map(|d| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)))
        }
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
