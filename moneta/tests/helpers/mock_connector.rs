#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use moneta_core::connector::{
    CountryMetaProvider, IndicatorSeriesProvider, LatestObservationProvider, MonetaConnector,
    ReferenceRateProvider,
};
use moneta_core::{
    CountryMeta, CountryRef, CurrencyCode, Indicator, MonetaError, Observation, RateObservation,
    YearSeries,
};
use tokio::time::{Duration, sleep};

type MetaFn = Arc<dyn Fn(&CountryRef) -> Result<CountryMeta, MonetaError> + Send + Sync>;
type LatestFn =
    Arc<dyn Fn(&CountryRef, Indicator) -> Result<Observation, MonetaError> + Send + Sync>;
type SeriesFn =
    Arc<dyn Fn(&CountryRef, Indicator) -> Result<YearSeries, MonetaError> + Send + Sync>;
type RateFn =
    Arc<dyn Fn(&CurrencyCode, &CountryRef) -> Result<RateObservation, MonetaError> + Send + Sync>;

/// Simple in-memory connector used by integration tests.
///
/// A capability is advertised only when its closure is installed, so a bare
/// mock supports nothing and the router treats it as ineligible.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub meta_fn: Option<MetaFn>,
    pub latest_fn: Option<LatestFn>,
    pub series_fn: Option<SeriesFn>,
    pub rate_fn: Option<RateFn>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder {
            inner: Self {
                name: "default_mock",
                delay_ms: 0,
                meta_fn: None,
                latest_fn: None,
                series_fn: None,
                rate_fn: None,
            },
        }
    }

    async fn pause(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.inner.delay_ms = ms;
        self
    }

    pub fn meta_fn(
        mut self,
        f: impl Fn(&CountryRef) -> Result<CountryMeta, MonetaError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.meta_fn = Some(Arc::new(f));
        self
    }

    pub fn latest_fn(
        mut self,
        f: impl Fn(&CountryRef, Indicator) -> Result<Observation, MonetaError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.latest_fn = Some(Arc::new(f));
        self
    }

    pub fn series_fn(
        mut self,
        f: impl Fn(&CountryRef, Indicator) -> Result<YearSeries, MonetaError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.series_fn = Some(Arc::new(f));
        self
    }

    pub fn rate_fn(
        mut self,
        f: impl Fn(&CurrencyCode, &CountryRef) -> Result<RateObservation, MonetaError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.inner.rate_fn = Some(Arc::new(f));
        self
    }

    /// Install a metadata closure returning fixed currency/alpha-3 values.
    pub fn returns_meta(self, currency: &'static str, alpha3: &'static str) -> Self {
        self.meta_fn(move |_| {
            Ok(CountryMeta {
                currency: CurrencyCode::parse(currency).ok(),
                alpha3: Some(alpha3.to_string()),
            })
        })
    }

    /// Install a latest-observation closure returning a fixed value.
    pub fn returns_latest(self, value: f64, year: i32) -> Self {
        self.latest_fn(move |_, _| {
            Ok(Observation {
                value,
                year: Some(year),
            })
        })
    }

    /// Install a series closure returning fixed entries.
    pub fn returns_series(self, entries: &'static [(i32, f64)]) -> Self {
        self.series_fn(move |_, _| Ok(entries.iter().copied().collect()))
    }

    /// Install a rate closure returning a fixed rate without a date.
    pub fn returns_rate(self, rate: f64) -> Self {
        self.rate_fn(move |_, _| Ok(RateObservation { rate, as_of: None }))
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(self.inner)
    }
}

impl MonetaConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_country_meta_provider(&self) -> Option<&dyn CountryMetaProvider> {
        self.meta_fn.as_ref().map(|_| self as &dyn CountryMetaProvider)
    }

    fn as_latest_observation_provider(&self) -> Option<&dyn LatestObservationProvider> {
        self.latest_fn
            .as_ref()
            .map(|_| self as &dyn LatestObservationProvider)
    }

    fn as_indicator_series_provider(&self) -> Option<&dyn IndicatorSeriesProvider> {
        self.series_fn
            .as_ref()
            .map(|_| self as &dyn IndicatorSeriesProvider)
    }

    fn as_reference_rate_provider(&self) -> Option<&dyn ReferenceRateProvider> {
        self.rate_fn
            .as_ref()
            .map(|_| self as &dyn ReferenceRateProvider)
    }
}

#[async_trait]
impl CountryMetaProvider for MockConnector {
    async fn country_meta(&self, country: &CountryRef) -> Result<CountryMeta, MonetaError> {
        self.pause().await;
        match &self.meta_fn {
            Some(f) => f(country),
            None => Err(MonetaError::unsupported("country-meta")),
        }
    }
}

#[async_trait]
impl LatestObservationProvider for MockConnector {
    async fn latest(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<Observation, MonetaError> {
        self.pause().await;
        match &self.latest_fn {
            Some(f) => f(country, indicator),
            None => Err(MonetaError::unsupported("latest-observation")),
        }
    }
}

#[async_trait]
impl IndicatorSeriesProvider for MockConnector {
    async fn series(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<YearSeries, MonetaError> {
        self.pause().await;
        match &self.series_fn {
            Some(f) => f(country, indicator),
            None => Err(MonetaError::unsupported("indicator-series")),
        }
    }
}

#[async_trait]
impl ReferenceRateProvider for MockConnector {
    async fn reference_rate(
        &self,
        currency: &CurrencyCode,
        country: &CountryRef,
    ) -> Result<RateObservation, MonetaError> {
        self.pause().await;
        match &self.rate_fn {
            Some(f) => f(currency, country),
            None => Err(MonetaError::unsupported("reference-rate")),
        }
    }
}
