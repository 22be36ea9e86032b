use serde_json::{Map, Number, Value};

use crate::types::CountryRecord;

/// Key of the economic sub-section managed by this crate.
pub const ECONOMIC_DATA_KEY: &str = "economicData";

/// Anchor key; the economic sub-section is placed immediately after it when
/// present, otherwise appended at the end of the document.
pub const ANCHOR_KEY: &str = "locale";

/// Deprecated top-level key removed on every merge.
const DEPRECATED_TOP_LEVEL: &str = "inflationRate";

/// Deprecated keys removed from inside the economic sub-section on every merge.
const DEPRECATED_NESTED: &[&str] = &["timeSeries", "projectionWindowYears"];

/// Build the `economicData` sub-tree for a record.
///
/// Sub-objects that would otherwise be empty are omitted entirely; no empty
/// containers are ever persisted. Values are rounded for stable output:
/// `cpi` to 4 decimals, PPP and FX to 6.
#[must_use]
pub fn economic_block(record: &CountryRecord) -> Map<String, Value> {
    let mut block = Map::new();
    if let Some(obs) = &record.inflation {
        let mut inflation = Map::new();
        insert_number(&mut inflation, "cpi", round_to(obs.value, 4));
        if let Some(year) = obs.year {
            inflation.insert("year".to_string(), Value::from(year));
        }
        if !inflation.is_empty() {
            block.insert("inflation".to_string(), Value::Object(inflation));
        }
    }
    if let Some(obs) = &record.ppp {
        let mut ppp = Map::new();
        insert_number(&mut ppp, "value", round_to(obs.value, 6));
        if let Some(year) = obs.year {
            ppp.insert("year".to_string(), Value::from(year));
        }
        if !ppp.is_empty() {
            block.insert("purchasingPowerParity".to_string(), Value::Object(ppp));
        }
    }
    if let Some(rate) = &record.fx {
        let mut fx = Map::new();
        insert_number(&mut fx, "perEur", round_to(rate.rate, 6));
        if let Some(date) = rate.as_of {
            fx.insert(
                "asOf".to_string(),
                Value::String(date.format("%Y-%m-%d").to_string()),
            );
        }
        if !fx.is_empty() {
            block.insert("exchangeRate".to_string(), Value::Object(fx));
        }
    }
    block
}

/// Merge an economic block into an existing document, returning a new map.
///
/// Rules:
/// - the deprecated top-level `inflationRate` is always removed;
/// - an empty `block` removes any existing economic sub-section instead of
///   persisting an empty container;
/// - otherwise the block is field-merged into the existing sub-section (new
///   values win per key, unknown existing keys survive) and the deprecated
///   nested keys are stripped from the result;
/// - the sub-section is placed immediately after [`ANCHOR_KEY`] when that
///   anchor exists, else appended; every other key keeps its original
///   relative order and value.
///
/// Re-running the merge on its own output with identical data is a
/// structural no-op.
#[must_use]
pub fn merge_economic_block(
    doc: &Map<String, Value>,
    block: Map<String, Value>,
) -> Map<String, Value> {
    let mut section = merged_section(doc, block);
    let mut out = Map::new();
    for (key, value) in doc {
        if key == DEPRECATED_TOP_LEVEL || key == ECONOMIC_DATA_KEY {
            continue;
        }
        out.insert(key.clone(), value.clone());
        if key == ANCHOR_KEY
            && let Some(s) = section.take()
        {
            out.insert(ECONOMIC_DATA_KEY.to_string(), Value::Object(s));
        }
    }
    if let Some(s) = section.take() {
        out.insert(ECONOMIC_DATA_KEY.to_string(), Value::Object(s));
    }
    out
}

fn merged_section(
    doc: &Map<String, Value>,
    block: Map<String, Value>,
) -> Option<Map<String, Value>> {
    if block.is_empty() {
        return None;
    }
    let mut merged = Map::new();
    if let Some(Value::Object(existing)) = doc.get(ECONOMIC_DATA_KEY) {
        for (k, v) in existing {
            merged.insert(k.clone(), v.clone());
        }
    }
    for (k, v) in block {
        merged.insert(k, v);
    }
    for k in DEPRECATED_NESTED {
        merged.remove(*k);
    }
    Some(merged)
}

fn insert_number(map: &mut Map<String, Value>, key: &str, value: f64) {
    if let Some(n) = Number::from_f64(value) {
        map.insert(key.to_string(), Value::Number(n));
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
