use moneta_core::{CountryRef, Indicator, MonetaError, Observation, Quantity, YearSeries};

use crate::Moneta;

impl Moneta {
    /// Fetch the most recent dated observation for an indicator.
    ///
    /// Sources are tried strictly in priority order; once one yields a value,
    /// later sources are not consulted for a "more complete" answer.
    ///
    /// # Errors
    /// Returns `NotFound` when every attempted source lacked the data, an
    /// aggregate failure when at least one source errored, or `Unsupported`
    /// when no registered source exposes the capability.
    pub async fn latest_observation(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<Observation, MonetaError> {
        self.fetch_first(
            Quantity::for_indicator(indicator),
            "latest-observation",
            format!("{} for {}", indicator.label(), country.alpha2),
            move |c| {
                c.as_latest_observation_provider()?;
                let country = country.clone();
                Some(async move {
                    match c.as_latest_observation_provider() {
                        Some(p) => p.latest(&country, indicator).await,
                        None => Err(MonetaError::source_failure(
                            c.name(),
                            "missing latest-observation capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }

    /// Fetch the year-indexed history for an indicator.
    ///
    /// The returned series is normalized (ascending, numeric) and may include
    /// forecast years; the estimator decides how to treat those.
    ///
    /// # Errors
    /// Same contract as [`latest_observation`](Self::latest_observation).
    pub async fn indicator_series(
        &self,
        country: &CountryRef,
        indicator: Indicator,
    ) -> Result<YearSeries, MonetaError> {
        self.fetch_first(
            Quantity::for_indicator(indicator),
            "indicator-series",
            format!("{} series for {}", indicator.label(), country.alpha2),
            move |c| {
                c.as_indicator_series_provider()?;
                let country = country.clone();
                Some(async move {
                    match c.as_indicator_series_provider() {
                        Some(p) => p.series(&country, indicator).await,
                        None => Err(MonetaError::source_failure(
                            c.name(),
                            "missing indicator-series capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }
}
