//! moneta-ecb
//!
//! Public connector exposing the daily euro reference-rate snapshot as a
//! `ReferenceRateProvider`. One request fetches the whole snapshot; the
//! requested currency is looked up in it. The euro itself is never asked of
//! this connector (the orchestrator pins the reference-currency identity
//! rate without consulting any source).
#![warn(missing_docs)]

/// Builder for configuring the connector.
pub mod builder;
mod shapes;

use async_trait::async_trait;
use moneta_core::connector::{MonetaConnector, ReferenceRateProvider};
use moneta_core::{CountryRef, CurrencyCode, HttpClient, MonetaError, RateObservation};
use url::Url;

pub use builder::EcbBuilder;

pub(crate) const NAME: &str = "moneta-ecb";

/// Default API root for the daily reference-rate feed.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.frankfurter.dev/v1";

/// Connector backed by the daily euro reference-rate feed.
#[derive(Debug, Clone)]
pub struct EcbConnector {
    pub(crate) http: HttpClient,
    pub(crate) base_url: Url,
    pub(crate) base_currency: String,
}

impl EcbConnector {
    /// Start building a connector with default endpoint and retry policy.
    #[must_use]
    pub fn builder() -> EcbBuilder {
        EcbBuilder::new()
    }

    fn endpoint(&self) -> Result<Url, MonetaError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| MonetaError::InvalidArg("base url cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.push("latest");
        }
        url.query_pairs_mut().append_pair("base", &self.base_currency);
        Ok(url)
    }
}

impl MonetaConnector for EcbConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "European Central Bank reference rates"
    }

    fn as_reference_rate_provider(&self) -> Option<&dyn ReferenceRateProvider> {
        Some(self)
    }
}

#[async_trait]
impl ReferenceRateProvider for EcbConnector {
    async fn reference_rate(
        &self,
        currency: &CurrencyCode,
        _country: &CountryRef,
    ) -> Result<RateObservation, MonetaError> {
        let payload = self.http.get_json(NAME, self.endpoint()?).await?;
        let snapshot = shapes::snapshot(&payload).ok_or_else(|| {
            MonetaError::not_found(format!("reference rate snapshot from {NAME}"))
        })?;
        let rate = snapshot
            .rate(currency)
            .ok_or_else(|| MonetaError::not_found(format!("reference rate for {currency}")))?;
        Ok(RateObservation {
            rate,
            as_of: snapshot.as_of,
        })
    }
}
