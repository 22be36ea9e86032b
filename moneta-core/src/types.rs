//! Common data structures shared across the moneta ecosystem.

use core::fmt;
use std::collections::HashMap;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MonetaError;

/// Typed key for identifying sources in priority configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectorKey(pub &'static str);

impl ConnectorKey {
    /// Construct a new typed connector key from a static name.
    ///
    /// This is useful when configuring per-quantity priorities.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ConnectorKey> for &'static str {
    fn from(k: ConnectorKey) -> Self {
        k.0
    }
}

/// ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a two-letter country code; case-insensitive input is uppercased.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is not two ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, MonetaError> {
        let raw = raw.trim();
        if raw.len() == 2 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(MonetaError::InvalidArg(format!(
                "not an ISO 3166-1 alpha-2 code: {raw:?}"
            )))
        }
    }

    /// The uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form, used by the document naming convention.
    #[must_use]
    pub fn lower(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// ISO 4217 alpha-3 currency code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse a three-letter currency code; case-insensitive input is uppercased.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the input is not three ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, MonetaError> {
        let raw = raw.trim();
        if raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(MonetaError::InvalidArg(format!(
                "not an ISO 4217 alpha-3 code: {raw:?}"
            )))
        }
    }

    /// The uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Country identifier pair handed to connectors.
///
/// Upstream providers disagree on the encoding they key by (alpha-2 vs.
/// alpha-3), so both are carried; the alpha-3 is discovered from country
/// metadata and may be absent early in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRef {
    /// The ISO 3166-1 alpha-2 code the run was invoked with.
    pub alpha2: CountryCode,
    /// The ISO 3166-1 alpha-3 code, when known.
    pub alpha3: Option<String>,
}

impl CountryRef {
    /// Build a reference carrying only the alpha-2 code.
    #[must_use]
    pub const fn new(alpha2: CountryCode) -> Self {
        Self {
            alpha2,
            alpha3: None,
        }
    }

    /// The alpha-3 code when known, otherwise the alpha-2 code.
    #[must_use]
    pub fn alpha3_or_2(&self) -> &str {
        self.alpha3.as_deref().unwrap_or_else(|| self.alpha2.as_str())
    }
}

/// Country metadata discovered from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryMeta {
    /// The country's currency, when the source knows it.
    pub currency: Option<CurrencyCode>,
    /// The country's alpha-3 code, when the source exposes it.
    pub alpha3: Option<String>,
}

/// Logical macroeconomic indicator, mapped to provider-specific codes by each
/// connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    /// Consumer price inflation, annual percent change.
    ConsumerPriceInflation,
    /// Purchasing power parity conversion factor, local currency units per
    /// reference-currency unit at equal purchasing power.
    PurchasingPowerParity,
    /// Official exchange rate, period average.
    OfficialExchangeRate,
}

impl Indicator {
    /// Human-readable label used in diagnostics and not-found messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConsumerPriceInflation => "consumer price inflation",
            Self::PurchasingPowerParity => "purchasing power parity",
            Self::OfficialExchangeRate => "official exchange rate",
        }
    }
}

/// Logical quantity resolved by the orchestrator via priority-with-fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Quantity {
    /// Currency and alternate identifiers for a country.
    CountryMeta,
    /// Headline inflation (scalar or series).
    Inflation,
    /// Purchasing power parity conversion factor.
    Ppp,
    /// Spot exchange rate against the reference currency.
    FxRate,
}

impl Quantity {
    /// The quantity an indicator resolves under.
    #[must_use]
    pub const fn for_indicator(indicator: Indicator) -> Self {
        match indicator {
            Indicator::ConsumerPriceInflation => Self::Inflation,
            Indicator::PurchasingPowerParity => Self::Ppp,
            Indicator::OfficialExchangeRate => Self::FxRate,
        }
    }
}

/// A dated scalar observation.
///
/// The reference year is attempted independently of the value; its absence
/// never suppresses the value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// The observed value.
    pub value: f64,
    /// Calendar year the value refers to, when the source dates it.
    pub year: Option<i32>,
}

/// A spot exchange rate against the reference currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateObservation {
    /// Quote-currency units per one unit of the reference currency.
    pub rate: f64,
    /// Date the rate was observed, when the source dates it.
    pub as_of: Option<NaiveDate>,
}

/// One country's reconciled economic record, assembled fresh per run.
///
/// Every field is individually optional: a source failure degrades to fewer
/// populated fields, and a fully sparse record is still representable and
/// mergeable.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    /// The country the record describes.
    pub country: CountryCode,
    /// Resolved currency context.
    pub currency: Option<CurrencyCode>,
    /// Headline inflation (percent) with its reference year.
    pub inflation: Option<Observation>,
    /// Purchasing power parity conversion factor with its reference year.
    pub ppp: Option<Observation>,
    /// Spot rate against the reference currency with its as-of date.
    pub fx: Option<RateObservation>,
    /// The normalized inflation series the headline figure was derived from.
    pub inflation_series: Option<crate::YearSeries>,
    /// Purchasing-power-parity history, when a caller requested it.
    pub ppp_series: Option<crate::YearSeries>,
    /// Exchange-rate history, when a caller requested it.
    pub fx_series: Option<crate::YearSeries>,
}

impl CountryRecord {
    /// An empty record for a country.
    #[must_use]
    pub const fn new(country: CountryCode) -> Self {
        Self {
            country,
            currency: None,
            inflation: None,
            ppp: None,
            fx: None,
            inflation_series: None,
            ppp_series: None,
            fx_series: None,
        }
    }
}

/// Bounded retry applied to every source request.
///
/// `attempts` counts total tries (not re-tries); a value of zero behaves as
/// one attempt. Exhausting the budget degrades the request to an absent
/// value at the routing layer rather than failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts per request.
    pub attempts: u32,
    /// Fixed delay between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay: Duration::from_millis(500),
        }
    }
}

/// Global configuration for the `Moneta` orchestrator.
#[derive(Debug, Clone)]
pub struct MonetaConfig {
    /// Explicit source ordering per logical quantity; quantities without an
    /// entry use registration order. Unknown keys are dropped at build time.
    pub per_quantity_priority: HashMap<Quantity, Vec<ConnectorKey>>,
    /// Timeout for individual source requests.
    pub source_timeout: Duration,
    /// Window (in years) the inflation estimator restricts itself to; zero
    /// disables windowing.
    pub estimate_window: u32,
    /// The currency FX rates are quoted against. A country whose currency
    /// equals it is assigned a rate of exactly 1.0 without consulting any
    /// source.
    pub reference_currency: CurrencyCode,
}

impl Default for MonetaConfig {
    fn default() -> Self {
        Self {
            per_quantity_priority: HashMap::new(),
            source_timeout: Duration::from_secs(20),
            estimate_window: 5,
            reference_currency: CurrencyCode(String::from("EUR")),
        }
    }
}
