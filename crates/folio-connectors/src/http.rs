//! HTTP transport for published sheets.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use folio_core::{Error, Result};
use reqwest::Client;
use tracing::debug;

/// Boxed future returned by [`SheetFetcher::fetch_text`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// Fetches the raw text behind a sheet URL.
pub trait SheetFetcher: Send + Sync {
    /// Body of a successful GET. Non-success statuses and transport errors
    /// are `Error::SourceUnavailable`.
    fn fetch_text<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

/// reqwest-backed fetcher with a per-request timeout.
#[derive(Clone)]
pub struct HttpSheetFetcher {
    client: Client,
}

impl HttpSheetFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Use an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl SheetFetcher for HttpSheetFetcher {
    fn fetch_text<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            debug!("Fetching sheet {}", url);

            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| Error::SourceUnavailable(format!("{}: {}", url, e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::SourceUnavailable(format!("{}: HTTP {}", url, status)));
            }

            response
                .text()
                .await
                .map_err(|e| Error::SourceUnavailable(format!("{}: {}", url, e)))
        })
    }
}
