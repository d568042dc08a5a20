//! Deterministic synthetic OHLC series for the meridian session timeline engine.
//!
//! - [`SeriesGenerator`] - Session-bounded random-walk bar generator
//! - [`SyntheticQuoteSource`] - [`QuoteSource`](meridian_types::QuoteSource) backed by the generator
//! - [`Xorshift32`] - The pseudo-random generator driving the walk

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod generator;
mod rng;
mod source;

pub use generator::{SeriesGenerator, WalkParams, base_price, generate_session, symbol_seed};
pub use rng::Xorshift32;
pub use source::SyntheticQuoteSource;
