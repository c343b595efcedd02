//! Serde helpers for loosely typed CRM JSON.
//!
//! Responsibilities:
//! - Accept record ids as either JSON strings or numbers.
//! - Accept property values of any JSON type.
//!
//! Explicitly does NOT handle:
//! - Interpreting property values (dates, enumerations, currency).
//!
//! Invariants / assumptions:
//! - The v3 objects API returns property values as strings or null. Any other
//!   value is kept as its JSON text so one odd value never fails a page.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

pub fn string_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = StringOrNumber::deserialize(deserializer)?;
    match value {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::U64(v) => Ok(v.to_string()),
        StringOrNumber::I64(v) => Ok(v.to_string()),
        StringOrNumber::F64(v) => Ok(v.to_string()),
    }
}

pub fn property_map<'de, D>(deserializer: D) -> Result<HashMap<String, Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<HashMap<String, serde_json::Value>>::deserialize(deserializer)?;
    let raw = raw.unwrap_or_default();
    let mut out = HashMap::with_capacity(raw.len());
    for (k, v) in raw {
        let parsed = match v {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Number(n) => Some(n.to_string()),
            serde_json::Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        };
        out.insert(k, parsed);
    }
    Ok(out)
}
