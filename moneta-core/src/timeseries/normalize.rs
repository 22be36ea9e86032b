use serde_json::Value;

use super::YearSeries;

/// Alternate key names under which providers nest the scalar of a year entry.
const VALUE_KEYS: &[&str] = &["value", "val", "obs", "cpi", "infl"];

/// Alternate key names carrying the calendar year in row-shaped entries.
const YEAR_KEYS: &[&str] = &["date", "year"];

/// Convert a raw provider payload into a canonical ascending year series.
///
/// Probes, in order:
/// 1. flat maps: `{"2020": 1.2, ...}`
/// 2. wrapped maps: `{"2020": {"value": 1.2}, ...}` with alternate inner keys
/// 3. row arrays: `[{"date": "2020", "value": 1.2}, ...]`
///
/// Entries whose year does not parse as an integer or whose value is not a
/// finite number are dropped; normalization itself never fails. A payload
/// matching none of the shapes yields an empty series.
#[must_use]
pub fn normalize(raw: &Value) -> YearSeries {
    let mut series = YearSeries::new();
    match raw {
        Value::Object(map) => {
            for (key, entry) in map {
                let Some(year) = parse_year_key(key) else {
                    continue;
                };
                let Some(value) = parse_entry(entry) else {
                    continue;
                };
                series.insert(year, value);
            }
        }
        Value::Array(rows) => {
            for row in rows {
                let Value::Object(fields) = row else { continue };
                let year = YEAR_KEYS.iter().find_map(|k| fields.get(*k)).and_then(parse_year);
                let value = VALUE_KEYS
                    .iter()
                    .find_map(|k| fields.get(*k))
                    .and_then(parse_numeric);
                if let (Some(year), Some(value)) = (year, value) {
                    series.insert(year, value);
                }
            }
        }
        _ => {}
    }
    series
}

fn parse_year_key(key: &str) -> Option<i32> {
    key.trim().parse().ok()
}

/// Parse a calendar year from a JSON integer or integer string.
#[must_use]
pub fn parse_year(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => parse_year_key(s),
        _ => None,
    }
}

/// A year entry is either the scalar itself or an object carrying the scalar
/// under a known alternate key; one level of unwrapping only.
fn parse_entry(v: &Value) -> Option<f64> {
    match v {
        Value::Object(inner) => VALUE_KEYS
            .iter()
            .find_map(|k| inner.get(*k))
            .and_then(parse_numeric),
        other => parse_numeric(other),
    }
}

/// Parse a finite numeric scalar from a JSON number or numeric string.
#[must_use]
pub fn parse_numeric(v: &Value) -> Option<f64> {
    let value = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}
