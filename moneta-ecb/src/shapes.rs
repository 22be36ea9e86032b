//! Response shape probes for the daily reference-rate feed.

use chrono::NaiveDate;
use moneta_core::CurrencyCode;
use moneta_core::timeseries::parse_numeric;
use serde_json::{Map, Value};

/// Key names under which the per-currency rate map has been observed.
const RATES_KEYS: &[&str] = &["rates", "conversion_rates"];

/// Key names carrying the snapshot date.
const DATE_KEYS: &[&str] = &["date", "as_of", "time"];

/// One day's worth of rates, as extracted from a payload.
pub(crate) struct Snapshot<'a> {
    rates: &'a Map<String, Value>,
    pub(crate) as_of: Option<NaiveDate>,
}

impl Snapshot<'_> {
    /// Rate for a currency, when the snapshot carries it.
    pub(crate) fn rate(&self, currency: &CurrencyCode) -> Option<f64> {
        self.rates.get(currency.as_str()).and_then(parse_numeric)
    }
}

/// Locate the rate map and snapshot date, probing current and legacy key
/// names in a fixed order. The date is attempted independently; its absence
/// does not suppress the rates.
pub(crate) fn snapshot(payload: &Value) -> Option<Snapshot<'_>> {
    let root = payload.as_object()?;
    let rates = RATES_KEYS
        .iter()
        .find_map(|k| root.get(*k))
        .and_then(Value::as_object)?;
    let as_of = DATE_KEYS
        .iter()
        .find_map(|k| root.get(*k))
        .and_then(Value::as_str)
        .and_then(parse_date);
    Some(Snapshot { rates, as_of })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
