//! Global CLI settings shared by all commands.

use anyhow::{Context, Result};
use meridian_lib::prelude::*;
use meridian_lib::DEFAULT_CONCURRENCY;
use std::path::PathBuf;
use std::time::Duration;

/// Settings taken from global flags and their environment fallbacks.
pub(crate) struct Settings {
    pub(crate) api_base: Option<String>,
    pub(crate) timeout_secs: u64,
    pub(crate) concurrency: usize,
    pub(crate) catalog: Option<PathBuf>,
    pub(crate) quiet: bool,
}

impl Settings {
    /// Loads the index catalog, from `--catalog` when given.
    pub(crate) fn load_catalog(&self) -> Result<Arc<IndexCatalog>> {
        let catalog = match &self.catalog {
            Some(path) => IndexCatalog::from_path(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => IndexCatalog::global().clone(),
        };
        Ok(Arc::new(catalog))
    }

    /// Builds the remote client configuration.
    pub(crate) fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.api_base.clone().unwrap_or(defaults.base_url),
            timeout: Duration::from_secs(self.timeout_secs),
            concurrency: self.concurrency.max(1),
            ..defaults
        }
    }

    /// Creates the remote quote client.
    pub(crate) fn client(&self) -> Result<RemoteQuoteClient> {
        let config = self.client_config();
        let base = config.base_url.clone();
        RemoteQuoteClient::new(config).with_context(|| format!("Invalid API base URL: {base}"))
    }

    /// Builds a resolver over `catalog`, attaching the remote source only when
    /// `provider` asks for it.
    pub(crate) fn resolver(
        &self,
        catalog: &Arc<IndexCatalog>,
        provider: Provider,
    ) -> Result<ProviderResolver> {
        let synthetic = SyntheticQuoteSource::new(SeriesGenerator::new(Arc::clone(catalog)));
        let concurrency = if self.concurrency == 0 {
            DEFAULT_CONCURRENCY
        } else {
            self.concurrency
        };
        let mut resolver =
            ProviderResolver::new(Arc::new(synthetic)).with_concurrency(concurrency);
        if provider == Provider::Remote {
            resolver = resolver.with_remote(Arc::new(RemoteQuoteSource::new(self.client()?)));
        }
        Ok(resolver)
    }
}
