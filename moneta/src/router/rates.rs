use moneta_core::{CountryRef, CurrencyCode, MonetaError, Quantity, RateObservation};

use crate::Moneta;

impl Moneta {
    /// Fetch the current spot rate for `currency` against the reference
    /// currency.
    ///
    /// The priority order encodes source freshness (a daily reference feed
    /// before a once-a-year official statistic); the first usable rate wins.
    /// Callers are expected to pin the reference currency itself to 1.0
    /// without calling this method.
    ///
    /// # Errors
    /// Returns `NotFound` when every attempted source lacked the data, an
    /// aggregate failure when at least one source errored, or `Unsupported`
    /// when no registered source exposes the capability.
    pub async fn reference_rate(
        &self,
        currency: &CurrencyCode,
        country: &CountryRef,
    ) -> Result<RateObservation, MonetaError> {
        self.fetch_first(
            Quantity::FxRate,
            "reference-rate",
            format!("reference rate for {currency}"),
            move |c| {
                c.as_reference_rate_provider()?;
                let currency = currency.clone();
                let country = country.clone();
                Some(async move {
                    match c.as_reference_rate_provider() {
                        Some(p) => p.reference_rate(&currency, &country).await,
                        None => Err(MonetaError::source_failure(
                            c.name(),
                            "missing reference-rate capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }
}
