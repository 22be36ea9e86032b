use chrono::{Datelike, NaiveDate};
use moneta_core::{
    CountryCode, CountryRecord, CountryRef, CurrencyCode, Indicator, Observation, RateObservation,
    estimate,
};

use crate::Moneta;

impl Moneta {
    /// Assemble one country's reconciled record, invoking each quantity
    /// sequentially.
    ///
    /// `authoritative_currency` (typically read from the target document's
    /// locale section) wins over any provider-derived code; the document is
    /// the source of truth for what currency a country uses. A country whose
    /// resolved currency equals the reference currency is assigned an
    /// exchange rate of exactly 1.0, dated `today`, without consulting any
    /// source.
    ///
    /// Every quantity degrades independently: a failed lookup logs a warning
    /// and leaves its field absent, and a fully sparse record is still
    /// returned.
    pub async fn country_record(
        &self,
        country: &CountryCode,
        authoritative_currency: Option<CurrencyCode>,
        today: NaiveDate,
    ) -> CountryRecord {
        let current_year = today.year();
        let mut country_ref = CountryRef::new(country.clone());

        let meta = match self.country_meta(&country_ref).await {
            Ok(meta) => Some(meta),
            Err(e) => {
                tracing::warn!(country = %country, error = %e, "country metadata unavailable");
                None
            }
        };
        if let Some(meta) = &meta {
            country_ref.alpha3 = meta.alpha3.clone();
        }
        let currency = authoritative_currency.or_else(|| meta.and_then(|m| m.currency));

        let inflation_series = match self
            .indicator_series(&country_ref, Indicator::ConsumerPriceInflation)
            .await
        {
            Ok(series) => Some(series),
            Err(e) => {
                tracing::warn!(country = %country, error = %e, "inflation series unavailable");
                None
            }
        };
        let estimated = inflation_series
            .as_ref()
            .and_then(|series| estimate(series, self.cfg.estimate_window, current_year));
        let inflation = match estimated {
            Some(est) => Some(Observation {
                value: est.value,
                year: Some(est.reference_year),
            }),
            None => match self
                .latest_observation(&country_ref, Indicator::ConsumerPriceInflation)
                .await
            {
                Ok(obs) => Some(obs),
                Err(e) => {
                    tracing::warn!(country = %country, error = %e, "inflation observation unavailable");
                    None
                }
            },
        };

        let ppp = match self
            .latest_observation(&country_ref, Indicator::PurchasingPowerParity)
            .await
        {
            Ok(obs) => Some(obs),
            Err(e) => {
                tracing::warn!(country = %country, error = %e, "purchasing power parity unavailable");
                None
            }
        };

        let fx = match &currency {
            Some(code) if *code == self.cfg.reference_currency => Some(RateObservation {
                rate: 1.0,
                as_of: Some(today),
            }),
            Some(code) => match self.reference_rate(code, &country_ref).await {
                Ok(rate) => Some(rate),
                Err(e) => {
                    tracing::warn!(country = %country, error = %e, "reference rate unavailable");
                    None
                }
            },
            None => {
                tracing::warn!(country = %country, "no currency resolved; skipping exchange rate");
                None
            }
        };

        CountryRecord {
            country: country.clone(),
            currency,
            inflation,
            ppp,
            fx,
            inflation_series,
            ppp_series: None,
            fx_series: None,
        }
    }
}
