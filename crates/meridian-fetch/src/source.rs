//! Remote quote source.

use async_trait::async_trait;
use chrono::NaiveDate;
use meridian_types::{Bar, Interval, QuoteError, QuoteSource};

use crate::RemoteQuoteClient;

/// [`QuoteSource`] backed by the remote quote API.
#[derive(Debug, Clone)]
pub struct RemoteQuoteSource {
    client: RemoteQuoteClient,
}

impl RemoteQuoteSource {
    /// Creates a source around the given client.
    #[must_use]
    pub const fn new(client: RemoteQuoteClient) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub const fn client(&self) -> &RemoteQuoteClient {
        &self.client
    }
}

#[async_trait]
impl QuoteSource for RemoteQuoteSource {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn fetch(
        &self,
        code: &str,
        interval: Interval,
        date: NaiveDate,
    ) -> Result<Vec<Bar>, QuoteError> {
        self.client.fetch(code, interval, date).await
    }
}
