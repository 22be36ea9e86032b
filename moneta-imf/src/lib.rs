//! moneta-imf
//!
//! Public connector exposing the IMF outlook feed as an
//! `IndicatorSeriesProvider`. Series are year-indexed, keyed by alpha-3
//! country codes upstream, and routinely extend past the current calendar
//! year; forecast handling is left to consumers.
#![warn(missing_docs)]

/// Builder for configuring the connector.
pub mod builder;
mod shapes;

use async_trait::async_trait;
use moneta_core::connector::{IndicatorSeriesProvider, MonetaConnector};
use moneta_core::{CountryRef, HttpClient, Indicator, MonetaError, YearSeries, normalize};
use url::Url;

pub use builder::ImfBuilder;

pub(crate) const NAME: &str = "moneta-imf";

/// Default API root.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.imf.org/external/datamapper/api/v1";

/// Connector backed by the IMF outlook feed.
#[derive(Debug, Clone)]
pub struct ImfConnector {
    pub(crate) http: HttpClient,
    pub(crate) base_url: Url,
}

impl ImfConnector {
    /// Start building a connector with default endpoint and retry policy.
    #[must_use]
    pub fn builder() -> ImfBuilder {
        ImfBuilder::new()
    }

    /// Outlook indicator code for a logical indicator.
    const fn indicator_code(indicator: Indicator) -> Option<&'static str> {
        match indicator {
            Indicator::ConsumerPriceInflation => Some("PCPIPCH"),
            Indicator::PurchasingPowerParity => Some("PPPEX"),
            Indicator::OfficialExchangeRate => None,
        }
    }

    fn endpoint(&self, code: &str, country_id: &str) -> Result<Url, MonetaError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| MonetaError::InvalidArg("base url cannot be a base".to_string()))?;
            path.pop_if_empty();
            path.push(code);
            path.push(country_id);
        }
        Ok(url)
    }
}

impl MonetaConnector for ImfConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "International Monetary Fund outlook"
    }

    fn as_indicator_series_provider(&self) -> Option<&dyn IndicatorSeriesProvider> {
        Some(self)
    }
}

#[async_trait]
impl IndicatorSeriesProvider for ImfConnector {
    async fn series(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<YearSeries, MonetaError> {
        let Some(code) = Self::indicator_code(indicator) else {
            return Err(MonetaError::unsupported("indicator-series/exchange-rate"));
        };
        let country_id = country.alpha3_or_2().to_ascii_uppercase();
        let payload = self.http.get_json(NAME, self.endpoint(code, &country_id)?).await?;
        let series = shapes::year_map(&payload, code, &country_id).map_or_else(YearSeries::new, normalize);
        if series.is_empty() {
            return Err(MonetaError::not_found(format!(
                "{code} series for {country_id}"
            )));
        }
        Ok(series)
    }
}
