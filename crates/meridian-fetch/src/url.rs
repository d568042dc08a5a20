//! Quote API URL construction.

use chrono::NaiveDate;
use meridian_types::{Interval, QuoteError};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::Url;

/// Default base URL of the quote API (local development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Characters escaped in a path segment: everything except the URI
/// component unreserved set, so `^AXJO` is sent as `%5EAXJO`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Interval keyword used when the API has no equivalent.
pub const FALLBACK_INTERVAL: &str = "5m";

/// Translates an interval into the quote API vocabulary.
///
/// Intervals the API does not offer fall back to the finest granularity.
#[must_use]
pub const fn remote_interval(interval: Interval) -> &'static str {
    match interval {
        Interval::Minute5 => "5m",
        Interval::Minute15 => "15m",
        Interval::Minute30 => "30m",
        Interval::Hour1 => "1h",
        Interval::Hour4 => "4h",
        Interval::Day1 => "1d",
        Interval::Week1 | Interval::Month1 => FALLBACK_INTERVAL,
    }
}

/// Builds the URL of an API endpoint below `base`.
///
/// Segments are percent-encoded individually as URI components, so symbols
/// such as `^AXJO` or `a/b` stay a single path segment.
///
/// # Errors
///
/// Returns a transport error if `base` cannot carry a path.
pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, QuoteError> {
    if base.cannot_be_a_base() {
        return Err(QuoteError::Transport(format!("invalid base URL: {base}")));
    }
    let mut path = base.path().trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment, SEGMENT));
    }
    let mut url = base.clone();
    url.set_path(&path);
    Ok(url)
}

/// Builds the quote URL for one symbol and date.
///
/// URL format: `{base}/api/stock/{symbol}?interval={code}&date={YYYY-MM-DD}`
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use meridian_fetch::url::stock_url;
/// use meridian_types::Interval;
/// use reqwest::Url;
///
/// let base = Url::parse("http://localhost:5000").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let url = stock_url(&base, "000001.SS", Interval::Minute5, date).unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://localhost:5000/api/stock/000001.SS?interval=5m&date=2024-01-15"
/// );
/// ```
///
/// # Errors
///
/// Returns a transport error if `base` cannot carry a path.
pub fn stock_url(
    base: &Url,
    symbol: &str,
    interval: Interval,
    date: NaiveDate,
) -> Result<Url, QuoteError> {
    let mut url = endpoint_url(base, &["api", "stock", symbol])?;
    url.query_pairs_mut()
        .append_pair("interval", remote_interval(interval))
        .append_pair("date", &date.format("%Y-%m-%d").to_string());
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_interval_table() {
        assert_eq!(remote_interval(Interval::Minute5), "5m");
        assert_eq!(remote_interval(Interval::Minute15), "15m");
        assert_eq!(remote_interval(Interval::Minute30), "30m");
        assert_eq!(remote_interval(Interval::Hour1), "1h");
        assert_eq!(remote_interval(Interval::Hour4), "4h");
        assert_eq!(remote_interval(Interval::Day1), "1d");
    }

    #[test]
    fn test_unmapped_intervals_use_finest() {
        assert_eq!(remote_interval(Interval::Week1), "5m");
        assert_eq!(remote_interval(Interval::Month1), "5m");
    }

    #[test]
    fn test_stock_url_with_base_path() {
        let base = Url::parse("https://quotes.example.com/v2/").unwrap();
        let url = stock_url(&base, "^GDAXI", Interval::Day1, date()).unwrap();
        assert_eq!(url.path(), "/v2/api/stock/%5EGDAXI");
        assert_eq!(url.query(), Some("interval=1d&date=2024-01-15"));
    }

    #[test]
    fn test_symbol_is_single_segment() {
        let base = Url::parse("http://localhost:5000").unwrap();
        let url = stock_url(&base, "a/b", Interval::Hour1, date()).unwrap();
        assert_eq!(url.path(), "/api/stock/a%2Fb");
    }

    #[test]
    fn test_symbol_is_component_encoded() {
        let base = Url::parse("http://localhost:5000").unwrap();
        let url = stock_url(&base, "^AXJO", Interval::Minute5, date()).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/stock/%5EAXJO?interval=5m&date=2024-01-15"
        );

        let url = stock_url(&base, "BRK-B (x)", Interval::Minute5, date()).unwrap();
        assert_eq!(url.path(), "/api/stock/BRK-B%20(x)");

        let url = endpoint_url(&base, &["api", "health"]).unwrap();
        assert_eq!(url.path(), "/api/health");
    }

    #[test]
    fn test_invalid_base() {
        let base = Url::parse("mailto:quotes@example.com").unwrap();
        let err = stock_url(&base, "^AXJO", Interval::Hour1, date()).unwrap_err();
        assert!(err.is_transport());
    }
}
