use serde_json::{Map, Value};

/// Render a document to its canonical textual form.
///
/// A mapping is inlined on a single line (`{ "k": v, ... }`) only when none
/// of its own immediate values are containers; otherwise it expands to one
/// key per line with two-space indentation, applying the same rule per
/// nested value. Sequences follow the analogous rule. At the top level only,
/// a blank line is inserted before any entry whose value is an expanded
/// container, and before any entry immediately following one, separating
/// structured sections from flat entries.
///
/// Identical trees (same keys, same order, same values) always produce
/// byte-identical output, so re-merges are diff-checkable.
#[must_use]
pub fn render(doc: &Map<String, Value>) -> String {
    if doc.is_empty() {
        return String::from("{}");
    }
    let mut out = String::from("{\n");
    let mut after_section = false;
    for (i, (key, value)) in doc.iter().enumerate() {
        let section = is_expanded(value);
        if i > 0 && (section || after_section) {
            out.push('\n');
        }
        out.push_str("  ");
        out.push_str(&render_key(key));
        out.push_str(": ");
        render_value(value, 1, &mut out);
        if i + 1 < doc.len() {
            out.push(',');
        }
        out.push('\n');
        after_section = section;
    }
    out.push('}');
    out
}

/// Whether a value renders in expanded (multi-line) form.
fn is_expanded(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.values().any(is_container),
        Value::Array(items) => items.iter().any(is_container),
        _ => false,
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn render_value(value: &Value, depth: usize, out: &mut String) {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
            } else if map.values().any(is_container) {
                out.push_str("{\n");
                let inner = "  ".repeat(depth + 1);
                for (i, (k, v)) in map.iter().enumerate() {
                    out.push_str(&inner);
                    out.push_str(&render_key(k));
                    out.push_str(": ");
                    render_value(v, depth + 1, out);
                    if i + 1 < map.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&"  ".repeat(depth));
                out.push('}');
            } else {
                out.push_str("{ ");
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&render_key(k));
                    out.push_str(": ");
                    out.push_str(&render_scalar(v));
                }
                out.push_str(" }");
            }
        }
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
            } else if items.iter().any(is_container) {
                out.push_str("[\n");
                let inner = "  ".repeat(depth + 1);
                for (i, v) in items.iter().enumerate() {
                    out.push_str(&inner);
                    render_value(v, depth + 1, out);
                    if i + 1 < items.len() {
                        out.push(',');
                    }
                    out.push('\n');
                }
                out.push_str(&"  ".repeat(depth));
                out.push(']');
            } else {
                out.push('[');
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&render_scalar(v));
                }
                out.push(']');
            }
        }
        other => out.push_str(&render_scalar(other)),
    }
}

fn render_key(key: &str) -> String {
    render_scalar(&Value::String(key.to_string()))
}

// Serializing a scalar `Value` cannot fail; the fallback is unreachable.
fn render_scalar(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("null"))
}
