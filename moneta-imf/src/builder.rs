use std::time::Duration;

use moneta_core::{HttpClient, MonetaError, RetryPolicy};
use url::Url;

use crate::{DEFAULT_BASE_URL, ImfConnector};

/// Builder for [`ImfConnector`].
#[derive(Debug, Clone)]
pub struct ImfBuilder {
    base_url: String,
    retry: RetryPolicy,
    timeout: Duration,
}

impl Default for ImfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImfBuilder {
    /// Create a builder with the public endpoint and default retry policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(20),
        }
    }

    /// Override the API root (tests point this at a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the retry policy applied to every request.
    #[must_use]
    pub const fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<ImfConnector, MonetaError> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| MonetaError::InvalidArg(format!("base url: {e}")))?;
        Ok(ImfConnector {
            http: HttpClient::new(self.retry, self.timeout)?,
            base_url,
        })
    }
}
