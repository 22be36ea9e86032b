//! Response shape probes for the World Bank API.
//!
//! The current v2 layout is a two-element envelope `[meta, rows]`; older and
//! mirrored deployments have been seen returning the rows bare or wrapped in
//! an object. Probes are tried in a fixed order and the first match wins; a
//! payload matching no probe is treated as an absent value, never an error.

use moneta_core::timeseries::{parse_numeric, parse_year};
use moneta_core::{CountryMeta, CurrencyCode, Observation};
use serde_json::Value;

/// Locate the row array inside a payload.
pub(crate) fn rows(payload: &Value) -> Option<&Value> {
    if let Value::Array(parts) = payload {
        // current layout: [meta, [row, ...]]
        if parts.len() == 2 && parts[1].is_array() {
            return Some(&parts[1]);
        }
        // bare row array, no meta envelope
        if !parts.is_empty() && parts.iter().all(Value::is_object) {
            return Some(payload);
        }
        return None;
    }
    // object wrapper
    if let Value::Object(map) = payload
        && let Some(rows @ Value::Array(_)) = map.get("data")
    {
        return Some(rows);
    }
    None
}

/// First row (newest first) carrying a usable value; the year is attempted
/// independently and its absence does not suppress the value.
pub(crate) fn latest_observation(payload: &Value) -> Option<Observation> {
    let rows = rows(payload)?.as_array()?;
    for row in rows {
        let Value::Object(fields) = row else { continue };
        if let Some(value) = fields.get("value").and_then(parse_numeric) {
            let year = fields
                .get("date")
                .or_else(|| fields.get("year"))
                .and_then(parse_year);
            return Some(Observation { value, year });
        }
    }
    None
}

/// Currency and alpha-3 code from a country listing row.
pub(crate) fn country_meta(payload: &Value) -> Option<CountryMeta> {
    let row = rows(payload)?.as_array()?.iter().find_map(Value::as_object)?;
    let currency = [
        row.get("currencyIso3Code"),
        row.get("currency").and_then(|c| c.get("id")),
        row.get("currency").and_then(|c| c.get("code")),
    ]
    .into_iter()
    .flatten()
    .find_map(Value::as_str)
    .and_then(|s| CurrencyCode::parse(s).ok());
    let alpha3 = [row.get("id"), row.get("iso3Code")]
        .into_iter()
        .flatten()
        .find_map(Value::as_str)
        .filter(|s| s.len() == 3 && s.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_ascii_uppercase);
    Some(CountryMeta { currency, alpha3 })
}
