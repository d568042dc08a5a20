//! HTTP client for the remote quote API.

use chrono::NaiveDate;
use meridian_types::{Bar, Interval, QuoteError};
use reqwest::{Client, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::parse::{self, HealthStatus, SymbolList};
use crate::url::{DEFAULT_BASE_URL, endpoint_url, stock_url};

/// Configuration for the quote client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the quote API.
    pub base_url: String,
    /// Bound on a whole request, body included. Expiry is a transport failure.
    pub timeout: Duration,
    /// Connection timeout (separate from request timeout).
    pub connect_timeout: Duration,
    /// Maximum concurrent requests when fanning out over symbols.
    pub concurrency: usize,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
            concurrency: 8,
            user_agent: format!("meridian/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while building the client.
#[derive(Error, Debug)]
pub enum ClientBuildError {
    /// The HTTP client could not be created.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL is not a usable HTTP base.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// HTTP client for the quote API.
#[derive(Debug, Clone)]
pub struct RemoteQuoteClient {
    client: Client,
    base: Url,
    config: ClientConfig,
}

impl RemoteQuoteClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientBuildError> {
        let base = Url::parse(&config.base_url).map_err(|e| ClientBuildError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientBuildError::InvalidBaseUrl {
                url: config.base_url,
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let client = Client::builder()
            .pool_max_idle_per_host(config.concurrency)
            .tcp_nodelay(true)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self {
            client,
            base,
            config,
        })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientBuildError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the parsed base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Fetches the bars of `symbol` on `date`.
    ///
    /// Makes exactly one request; there are no retries.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Transport`] on network failure, timeout, or a
    /// non-success status, and [`QuoteError::Data`] if the payload is invalid.
    pub async fn fetch(
        &self,
        symbol: &str,
        interval: Interval,
        date: NaiveDate,
    ) -> Result<Vec<Bar>, QuoteError> {
        let url = stock_url(&self.base, symbol, interval, date)?;
        debug!(%url, "requesting quotes");
        let body = self.get_text(url).await?;
        let bars = parse::parse_stock_payload(&body)?;
        debug!(symbol, bars = bars.len(), "received quotes");
        Ok(bars)
    }

    /// Queries the service health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn health(&self) -> Result<HealthStatus, QuoteError> {
        let url = endpoint_url(&self.base, &["api", "health"])?;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| QuoteError::Data(format!("malformed health response: {e}")))
    }

    /// Lists the symbols the service knows about.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response is malformed.
    pub async fn symbols(&self) -> Result<SymbolList, QuoteError> {
        let url = endpoint_url(&self.base, &["api", "symbols"])?;
        let body = self.get_text(url).await?;
        serde_json::from_str(&body).map_err(|e| QuoteError::Data(format!("malformed symbol list: {e}")))
    }

    /// Performs a GET request and returns the body of a successful response.
    async fn get_text(&self, url: Url) -> Result<String, QuoteError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(&e))?;

        if !status.is_success() {
            let detail = parse::error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(QuoteError::Transport(format!("HTTP {}: {detail}", status.as_u16())));
        }

        Ok(body)
    }

    /// Maps a request error onto the transport failure variant.
    fn transport_error(&self, error: &reqwest::Error) -> QuoteError {
        if error.is_timeout() {
            QuoteError::Transport(format!("request timed out after {:?}", self.config.timeout))
        } else {
            QuoteError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Reads one request head and returns its request line.
    async fn read_request(stream: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let head = String::from_utf8_lossy(&buf);
        head.lines().next().unwrap_or_default().to_string()
    }

    /// Serves one canned response and yields the request line it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request_line = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            request_line
        });
        (base, handle)
    }

    fn client_for(base: String, timeout: Duration) -> RemoteQuoteClient {
        RemoteQuoteClient::new(ClientConfig {
            base_url: base,
            timeout,
            connect_timeout: Duration::from_secs(1),
            ..Default::default()
        })
        .unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.concurrency, 8);
        assert!(config.user_agent.starts_with("meridian/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = RemoteQuoteClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let err = RemoteQuoteClient::new(config).unwrap_err();
        assert!(matches!(err, ClientBuildError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout: Duration::from_secs(2),
            connect_timeout: Duration::from_secs(1),
            ..Default::default()
        };
        let client = RemoteQuoteClient::new(config).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let err = client.fetch("^AXJO", Interval::Hour1, date).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_fetch_parses_rows() {
        let (base, server) = serve_once(
            "200 OK",
            r#"{"symbol":"^AXJO","data":[{"time":"2024-01-15T10:00:00","open":1.0,"high":2.0,"low":0.5,"close":1.5}]}"#,
        )
        .await;
        let client = client_for(base, Duration::from_secs(5));

        let bars = client.fetch("^AXJO", Interval::Week1, date()).await.unwrap();
        assert_eq!(bars.len(), 1);
        assert_relative_eq!(bars[0].close, 1.5);
        assert_relative_eq!(bars[0].value, 1.5);

        let request_line = server.await.unwrap();
        assert_eq!(
            request_line,
            "GET /api/stock/%5EAXJO?interval=5m&date=2024-01-15 HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn test_server_error_status_is_transport_error() {
        let (base, server) = serve_once(
            "500 Internal Server Error",
            r#"{"error":"Internal server error","message":"boom"}"#,
        )
        .await;
        let client = client_for(base, Duration::from_secs(5));

        let err = client.fetch("^FTSE", Interval::Hour1, date()).await.unwrap_err();
        assert!(err.is_transport());
        let message = err.to_string();
        assert!(message.contains("HTTP 500"), "{message}");
        assert!(message.contains("boom"), "{message}");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_field_in_success_is_data_error() {
        let (base, server) =
            serve_once("200 OK", r#"{"error":"Invalid interval","message":"use 5m"}"#).await;
        let client = client_for(base, Duration::from_secs(5));

        let err = client.fetch("^N225", Interval::Hour1, date()).await.unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("Invalid interval"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            read_request(&mut stream).await;
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(stream);
        });
        let client = client_for(base, Duration::from_millis(200));

        let err = client.fetch("^GSPC", Interval::Hour1, date()).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("timed out"), "{err}");
        server.abort();
    }
}
