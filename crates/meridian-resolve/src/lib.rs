//! Provider resolution with remote-to-synthetic fallback.
//!
//! - [`ProviderResolver`] - Composes a synthetic and an optional remote
//!   [`QuoteSource`](meridian_types::QuoteSource) behind an explicit fallback

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod resolver;

pub use resolver::{DEFAULT_CONCURRENCY, ProviderResolver};
