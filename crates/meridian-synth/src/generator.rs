//! Session-bounded random-walk bar generation.

use std::sync::Arc;

use chrono::NaiveDate;
use meridian_catalog::IndexCatalog;
use meridian_types::{Bar, Interval, Session};
use tracing::debug;

use crate::Xorshift32;

/// Parameters of the log-normal random walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkParams {
    /// Per-step drift of the log return.
    pub drift: f64,
    /// Per-step volatility of the log return.
    pub volatility: f64,
    /// Maximum relative deviation of open/close from the walk price.
    pub body_jitter: f64,
    /// Maximum relative wick extension beyond the body.
    pub wick_jitter: f64,
}

impl WalkParams {
    /// Parameters used by the demo provider.
    pub const DEFAULT: Self = Self {
        drift: 0.0002,
        volatility: 0.01,
        body_jitter: 0.01,
        wick_jitter: 0.01,
    };
}

impl Default for WalkParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns the walk seed of a symbol: the sum of its UTF-16 code units.
#[must_use]
pub fn symbol_seed(code: &str) -> u32 {
    code.encode_utf16().map(u32::from).sum()
}

/// Returns the starting price for a seed, in `[500, 2500)`.
#[must_use]
pub const fn base_price(seed: u32) -> u32 {
    seed % 2000 + 500
}

/// Generates bars for `code` across `session`, one every `interval`.
///
/// Bars start at the session open and include the close instant when it
/// falls on a step. A session that ends before it opens yields no bars.
#[must_use]
pub fn generate_session(
    code: &str,
    session: Session,
    interval: Interval,
    params: WalkParams,
) -> Vec<Bar> {
    let base = base_price(symbol_seed(code));
    let step = interval.duration();
    let mut rng = Xorshift32::new(base as i32);
    let mut price = f64::from(base);

    let capacity = if session.is_degenerate() {
        0
    } else {
        (session.duration().num_seconds() / interval.seconds()) as usize + 1
    };
    let mut bars = Vec::with_capacity(capacity);

    let log_drift = params.drift - 0.5 * params.volatility * params.volatility;
    let mut time = session.open;

    while time <= session.close {
        let r = log_drift + params.volatility * (rng.next_f64() * 2.0 - 1.0);
        price *= r.exp();

        let open = price * (1.0 + (rng.next_f64() - 0.5) * params.body_jitter);
        let close = price * (1.0 + (rng.next_f64() - 0.5) * params.body_jitter);
        let high = open.max(close) * (1.0 + rng.next_f64() * params.wick_jitter);
        let low = open.min(close) * (1.0 - rng.next_f64() * params.wick_jitter);

        bars.push(Bar::new(time, open, high, low, close));
        time += step;
    }

    bars
}

/// Deterministic synthetic OHLC series producer.
///
/// Output depends only on the symbol, interval, date, and catalog entry:
/// no clock, no external entropy.
#[derive(Debug, Clone)]
pub struct SeriesGenerator {
    catalog: Arc<IndexCatalog>,
    params: WalkParams,
}

impl SeriesGenerator {
    /// Creates a generator over the given catalog.
    #[must_use]
    pub const fn new(catalog: Arc<IndexCatalog>) -> Self {
        Self {
            catalog,
            params: WalkParams::DEFAULT,
        }
    }

    /// Overrides the walk parameters.
    #[must_use]
    pub const fn with_params(mut self, params: WalkParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the catalog used for session lookup.
    #[must_use]
    pub fn catalog(&self) -> &IndexCatalog {
        &self.catalog
    }

    /// Generates the bars of `code` on `date`.
    ///
    /// Returns an empty series for codes not in the catalog.
    #[must_use]
    pub fn generate(&self, code: &str, interval: Interval, date: NaiveDate) -> Vec<Bar> {
        let Some(index) = self.catalog.get(code) else {
            debug!(code, "no catalog entry, generating empty series");
            return Vec::new();
        };

        let session = Session::for_index(index, date);
        let bars = generate_session(code, session, interval, self.params);
        debug!(code, %interval, %date, bars = bars.len(), "generated synthetic series");
        bars
    }
}

impl Default for SeriesGenerator {
    fn default() -> Self {
        Self::new(Arc::new(IndexCatalog::global().clone()))
    }
}
