use async_trait::async_trait;

use crate::types::{ConnectorKey, CountryMeta, CountryRef, CurrencyCode, Indicator, Observation, RateObservation};
use crate::{MonetaError, YearSeries};

/// Focused role trait for sources that expose country metadata.
#[async_trait]
pub trait CountryMetaProvider: Send + Sync {
    /// Fetch currency and alternate identifiers for the given country.
    async fn country_meta(&self, country: &CountryRef) -> Result<CountryMeta, MonetaError>;
}

/// Focused role trait for sources that expose the latest dated scalar for an
/// indicator.
#[async_trait]
pub trait LatestObservationProvider: Send + Sync {
    /// Fetch the most recent dated observation for the given indicator.
    async fn latest(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<Observation, MonetaError>;
}

/// Focused role trait for sources that expose a year-indexed indicator series.
#[async_trait]
pub trait IndicatorSeriesProvider: Send + Sync {
    /// Fetch the full year-indexed history for the given indicator.
    ///
    /// The returned series is already normalized (ascending, numeric) and may
    /// include forecast years; consumers decide how to treat those.
    async fn series(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<YearSeries, MonetaError>;
}

/// Focused role trait for sources that expose a current spot rate against the
/// reference currency.
#[async_trait]
pub trait ReferenceRateProvider: Send + Sync {
    /// Fetch the current rate for `currency`, quoted per one unit of the
    /// reference currency.
    ///
    /// `country` is carried alongside because some sources key rates by
    /// country rather than by currency; each source uses the identifier its
    /// upstream expects.
    async fn reference_rate(
        &self,
        currency: &CurrencyCode,
        country: &CountryRef,
    ) -> Result<RateObservation, MonetaError>;
}

/// Main connector trait implemented by source crates. Exposes capability
/// discovery.
///
/// A connector must never panic on upstream misbehavior: network failures,
/// malformed payloads, and unexpected schemas all map into `MonetaError`
/// variants that the routing layer treats as "try the next source".
pub trait MonetaConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "moneta-worldbank").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring routing priorities.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise country-metadata capability by returning a usable trait
    /// object reference when supported.
    fn as_country_meta_provider(&self) -> Option<&dyn CountryMetaProvider> {
        None
    }

    /// If implemented, returns a trait object for latest dated observations.
    fn as_latest_observation_provider(&self) -> Option<&dyn LatestObservationProvider> {
        None
    }

    /// If implemented, returns a trait object for year-indexed series.
    fn as_indicator_series_provider(&self) -> Option<&dyn IndicatorSeriesProvider> {
        None
    }

    /// If implemented, returns a trait object for reference rates.
    fn as_reference_rate_provider(&self) -> Option<&dyn ReferenceRateProvider> {
        None
    }
}
