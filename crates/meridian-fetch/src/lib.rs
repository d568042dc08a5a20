//! Remote quote API client for the meridian session timeline engine.
//!
//! This crate provides the remote data path:
//!
//! - [`url::stock_url`] - Constructs quote API URLs
//! - [`url::remote_interval`] - Translates intervals to the API vocabulary
//! - [`RemoteQuoteClient`] - HTTP client with a bounded request timeout
//! - [`parse::parse_stock_payload`] - Payload validation into bars
//! - [`RemoteQuoteSource`] - [`QuoteSource`](meridian_types::QuoteSource) backed by the client

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/meridian-markets/meridian/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod parse;
mod source;
pub mod url;

pub use client::{ClientBuildError, ClientConfig, RemoteQuoteClient};
pub use parse::{HealthStatus, SymbolList, parse_stock_payload};
pub use source::RemoteQuoteSource;
