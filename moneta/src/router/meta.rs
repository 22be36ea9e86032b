use moneta_core::{CountryMeta, CountryRef, MonetaError, Quantity};

use crate::Moneta;

impl Moneta {
    /// Resolve currency and alternate identifiers for a country.
    ///
    /// Sources are tried strictly in priority order; the first usable answer
    /// wins.
    ///
    /// # Errors
    /// Returns `NotFound` when every attempted source lacked the data, an
    /// aggregate failure when at least one source errored, or `Unsupported`
    /// when no registered source exposes the capability.
    pub async fn country_meta(&self, country: &CountryRef) -> Result<CountryMeta, MonetaError> {
        self.fetch_first(
            Quantity::CountryMeta,
            "country-meta",
            format!("country metadata for {}", country.alpha2),
            move |c| {
                c.as_country_meta_provider()?;
                let country = country.clone();
                Some(async move {
                    match c.as_country_meta_provider() {
                        Some(p) => p.country_meta(&country).await,
                        None => Err(MonetaError::source_failure(
                            c.name(),
                            "missing country-meta capability during call",
                        )),
                    }
                })
            },
        )
        .await
    }
}
