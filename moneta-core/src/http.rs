use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::types::RetryPolicy;
use crate::MonetaError;

/// Shared HTTP helper applying a bounded retry policy to every request.
///
/// One retry budget covers the whole transient failure class: connect
/// errors, timed-out requests, HTTP error statuses, and undecodable bodies.
/// When the budget is exhausted the last failure is returned as a `Source`
/// error, which the routing layer treats as an absent value rather than a
/// fatal condition.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::Client,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Build a client with the given retry policy and per-request timeout.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the underlying client cannot be constructed.
    pub fn new(retry: RetryPolicy, timeout: Duration) -> Result<Self, MonetaError> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonetaError::InvalidArg(format!("http client: {e}")))?;
        Ok(Self { inner, retry })
    }

    /// Fetch `url` and decode the body as JSON.
    ///
    /// # Errors
    /// Returns the last `Source` failure once the retry budget is exhausted.
    pub async fn get_json(&self, name: &'static str, url: Url) -> Result<Value, MonetaError> {
        let mut last: Option<MonetaError> = None;
        let attempts = self.retry.attempts.max(1);
        for attempt in 1..=attempts {
            if attempt > 1 {
                tokio::time::sleep(self.retry.delay).await;
            }
            match self.try_get(name, url.clone()).await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    tracing::debug!(source = name, %url, attempt, error = %e, "request failed");
                    last = Some(e);
                }
            }
        }
        Err(last.unwrap_or_else(|| MonetaError::source_failure(name, "request never attempted")))
    }

    async fn try_get(&self, name: &'static str, url: Url) -> Result<Value, MonetaError> {
        let resp = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(|e| MonetaError::source_failure(name, e.to_string()))?
            .error_for_status()
            .map_err(|e| MonetaError::source_failure(name, e.to_string()))?;
        resp.json::<Value>()
            .await
            .map_err(|e| MonetaError::source_failure(name, e.to_string()))
    }
}
