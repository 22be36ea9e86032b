//! moneta-worldbank
//!
//! Public connector that implements `MonetaConnector` on top of the World
//! Bank Open Data API. Exposes country metadata (currency, alpha-3 code),
//! the latest dated observation for an indicator, the full historical year
//! series, and the annual official exchange rate as a reference-rate
//! fallback.
#![warn(missing_docs)]

/// Builder for configuring the connector.
pub mod builder;
mod shapes;

use async_trait::async_trait;
use chrono::NaiveDate;
use moneta_core::connector::{
    CountryMetaProvider, IndicatorSeriesProvider, LatestObservationProvider,
    MonetaConnector, ReferenceRateProvider,
};
use moneta_core::{
    CountryMeta, CountryRef, CurrencyCode, HttpClient, Indicator, MonetaError, Observation,
    RateObservation, YearSeries, normalize,
};
use serde_json::Value;
use url::Url;

pub use builder::WorldBankBuilder;

pub(crate) const NAME: &str = "moneta-worldbank";

/// Default API root.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Rows requested per page; large enough to cover a full annual history in
/// one response.
const PER_PAGE: &str = "200";

/// Connector backed by the World Bank Open Data API.
#[derive(Debug, Clone)]
pub struct WorldBankConnector {
    pub(crate) http: HttpClient,
    pub(crate) base_url: Url,
}

impl WorldBankConnector {
    /// Start building a connector with default endpoint and retry policy.
    #[must_use]
    pub fn builder() -> WorldBankBuilder {
        WorldBankBuilder::new()
    }

    /// World Bank indicator code for a logical indicator.
    const fn indicator_code(indicator: Indicator) -> &'static str {
        match indicator {
            Indicator::ConsumerPriceInflation => "FP.CPI.TOTL.ZG",
            Indicator::PurchasingPowerParity => "PA.NUS.PPP",
            Indicator::OfficialExchangeRate => "PA.NUS.FCRF",
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, MonetaError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| MonetaError::InvalidArg("base url cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url.query_pairs_mut().append_pair("format", "json");
        Ok(url)
    }

    async fn indicator_rows(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<Value, MonetaError> {
        let mut url = self.endpoint(&[
            "country",
            country.alpha2.as_str(),
            "indicator",
            Self::indicator_code(indicator),
        ])?;
        url.query_pairs_mut().append_pair("per_page", PER_PAGE);
        self.http.get_json(NAME, url).await
    }
}

impl MonetaConnector for WorldBankConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "World Bank Open Data"
    }

    fn as_country_meta_provider(&self) -> Option<&dyn CountryMetaProvider> {
        Some(self)
    }

    fn as_latest_observation_provider(&self) -> Option<&dyn LatestObservationProvider> {
        Some(self)
    }

    fn as_indicator_series_provider(&self) -> Option<&dyn IndicatorSeriesProvider> {
        Some(self)
    }

    fn as_reference_rate_provider(&self) -> Option<&dyn ReferenceRateProvider> {
        Some(self)
    }
}

#[async_trait]
impl CountryMetaProvider for WorldBankConnector {
    async fn country_meta(&self, country: &CountryRef) -> Result<CountryMeta, MonetaError> {
        let url = self.endpoint(&["country", country.alpha2.as_str()])?;
        let payload = self.http.get_json(NAME, url).await?;
        let meta = shapes::country_meta(&payload);
        match meta {
            Some(meta) if meta.currency.is_some() || meta.alpha3.is_some() => Ok(meta),
            _ => Err(MonetaError::not_found(format!(
                "country metadata for {}",
                country.alpha2
            ))),
        }
    }
}

#[async_trait]
impl LatestObservationProvider for WorldBankConnector {
    async fn latest(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<Observation, MonetaError> {
        let payload = self.indicator_rows(country, indicator).await?;
        shapes::latest_observation(&payload).ok_or_else(|| {
            MonetaError::not_found(format!(
                "{} for {}",
                Self::indicator_code(indicator),
                country.alpha2
            ))
        })
    }
}

#[async_trait]
impl IndicatorSeriesProvider for WorldBankConnector {
    async fn series(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<YearSeries, MonetaError> {
        let payload = self.indicator_rows(country, indicator).await?;
        let series = shapes::rows(&payload).map_or_else(YearSeries::new, normalize);
        if series.is_empty() {
            return Err(MonetaError::not_found(format!(
                "{} series for {}",
                Self::indicator_code(indicator),
                country.alpha2
            )));
        }
        Ok(series)
    }
}

#[async_trait]
impl ReferenceRateProvider for WorldBankConnector {
    /// The World Bank only carries the annual official rate; its as-of date
    /// is pinned to January 1 of the reference year.
    async fn reference_rate(
        &self,
        _currency: &CurrencyCode,
        country: &CountryRef,
    ) -> Result<RateObservation, MonetaError> {
        let obs = self
            .latest(country, Indicator::OfficialExchangeRate)
            .await?;
        Ok(RateObservation {
            rate: obs.value,
            as_of: obs.year.and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1)),
        })
    }
}
