//! Lenient field readers for upstream records
//!
//! Upstream shapes drift between revisions (different names, numbers sent
//! as strings, missing fields). Each reader takes a list of candidate keys
//! and returns the first usable value, falling back to the type's default.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

fn first<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| raw.get(*key))
        .find(|value| !value.is_null())
}

/// String field; numbers are rendered, anything else is ""
pub fn text(raw: &Value, keys: &[&str]) -> String {
    match first(raw, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Optional string field; empty strings count as absent
pub fn opt_text(raw: &Value, keys: &[&str]) -> Option<String> {
    let value = text(raw, keys);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Integer field; numeric strings are coerced, anything else is 0
pub fn int(raw: &Value, keys: &[&str]) -> i64 {
    match first(raw, keys) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Boolean field; accepts `true`, `"true"`, `1` and `"1"`
pub fn flag(raw: &Value, keys: &[&str]) -> bool {
    match first(raw, keys) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_i64() == Some(1),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.eq_ignore_ascii_case("true") || s == "1"
        }
        _ => false,
    }
}

/// Timestamp field; RFC 3339 or a naive "YYYY-MM-DD HH:MM:SS" read as UTC
pub fn timestamp(raw: &Value, keys: &[&str]) -> Option<DateTime<Utc>> {
    let value = opt_text(raw, keys)?;
    parse_timestamp(&value)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}
