//! Response shape probes for the outlook feed.

use serde_json::Value;

/// Locate the year→value map for an (indicator, country) pair.
///
/// Probes, in order:
/// 1. current layout: `{"values": {CODE: {ID: {year: value}}}}`
/// 2. legacy, no envelope: `{CODE: {ID: {year: value}}}`
/// 3. country-keyed-first: `{ID: {year: value}}`
/// 4. a bare year map
///
/// The first probe resolving to something that looks like a year map wins; a
/// payload matching no probe is treated as an absent value.
pub(crate) fn year_map<'a>(payload: &'a Value, code: &str, country_id: &str) -> Option<&'a Value> {
    let probes: [&[&str]; 4] = [&["values", code, country_id], &[code, country_id], &[country_id], &[]];
    for probe in probes {
        if let Some(candidate) = dig(payload, probe)
            && looks_like_year_map(candidate)
        {
            return Some(candidate);
        }
    }
    None
}

fn dig<'a>(mut v: &'a Value, path: &[&str]) -> Option<&'a Value> {
    for key in path {
        v = v.get(key)?;
    }
    Some(v)
}

fn looks_like_year_map(v: &Value) -> bool {
    matches!(v, Value::Object(m) if m.keys().any(|k| k.trim().parse::<i32>().is_ok()))
}
