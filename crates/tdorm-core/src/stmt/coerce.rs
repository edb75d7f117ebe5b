//! Best-effort conversion of dynamic values into statically typed fields.
//!
//! Every function here is total: input that cannot be converted yields the
//! destination's zero value (`false`, `0`, `""`, the Unix epoch, JSON `null`)
//! instead of an error. Degradations are reported at `trace` level.

use super::Value;

use chrono::{DateTime, NaiveDateTime, Utc};

/// Text accepted as `true` / `false` when loading a `bool` from a string.
const TRUE_SPELLINGS: [&str; 6] = ["1", "t", "T", "TRUE", "true", "True"];
const FALSE_SPELLINGS: [&str; 6] = ["0", "f", "F", "FALSE", "false", "False"];

/// Formats tried, in order, when a timestamp arrives as text without an
/// offset.
const NAIVE_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn degraded(value: &Value, to_type: &'static str) {
    tracing::trace!(
        from = value.kind_name(),
        to = to_type,
        "value could not be converted; using zero value"
    );
}

pub fn to_bool(value: Value) -> bool {
    match value {
        Value::Bool(v) => v,
        Value::I8(v) => v != 0,
        Value::I16(v) => v != 0,
        Value::I32(v) => v != 0,
        Value::I64(v) => v != 0,
        Value::U8(v) => v != 0,
        Value::U16(v) => v != 0,
        Value::U32(v) => v != 0,
        Value::U64(v) => v != 0,
        Value::F32(v) => v != 0.0,
        Value::F64(v) => v != 0.0,
        Value::String(ref v) if TRUE_SPELLINGS.contains(&v.as_str()) => true,
        Value::String(ref v) if FALSE_SPELLINGS.contains(&v.as_str()) => false,
        Value::Null => false,
        other => {
            degraded(&other, "bool");
            false
        }
    }
}

pub fn to_i64(value: Value) -> i64 {
    match value {
        Value::Bool(v) => v as i64,
        Value::I8(v) => v as i64,
        Value::I16(v) => v as i64,
        Value::I32(v) => v as i64,
        Value::I64(v) => v,
        Value::U8(v) => v as i64,
        Value::U16(v) => v as i64,
        Value::U32(v) => v as i64,
        Value::U64(v) => v as i64,
        Value::F32(v) => v as i64,
        Value::F64(v) => v as i64,
        Value::Timestamp(v) => v.timestamp_millis(),
        Value::String(ref v) => match v.parse::<i64>() {
            Ok(v) => v,
            Err(_) => {
                degraded(&value, "i64");
                0
            }
        },
        Value::Null => 0,
        other => {
            degraded(&other, "i64");
            0
        }
    }
}

pub fn to_u64(value: Value) -> u64 {
    match value {
        Value::Bool(v) => v as u64,
        Value::I8(v) => v as u64,
        Value::I16(v) => v as u64,
        Value::I32(v) => v as u64,
        Value::I64(v) => v as u64,
        Value::U8(v) => v as u64,
        Value::U16(v) => v as u64,
        Value::U32(v) => v as u64,
        Value::U64(v) => v,
        Value::F32(v) => v as u64,
        Value::F64(v) => v as u64,
        Value::Timestamp(v) => v.timestamp_millis() as u64,
        Value::String(ref v) => match v.parse::<u64>() {
            Ok(v) => v,
            Err(_) => {
                degraded(&value, "u64");
                0
            }
        },
        Value::Null => 0,
        other => {
            degraded(&other, "u64");
            0
        }
    }
}

pub fn to_f64(value: Value) -> f64 {
    match value {
        Value::Bool(v) => {
            if v {
                1.0
            } else {
                0.0
            }
        }
        Value::I8(v) => v as f64,
        Value::I16(v) => v as f64,
        Value::I32(v) => v as f64,
        Value::I64(v) => v as f64,
        Value::U8(v) => v as f64,
        Value::U16(v) => v as f64,
        Value::U32(v) => v as f64,
        Value::U64(v) => v as f64,
        Value::F32(v) => v as f64,
        Value::F64(v) => v,
        Value::String(ref v) => match v.parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                degraded(&value, "f64");
                0.0
            }
        },
        Value::Null => 0.0,
        other => {
            degraded(&other, "f64");
            0.0
        }
    }
}

pub fn to_string(value: Value) -> String {
    match value {
        Value::String(v) => v,
        Value::Json(v) => v.to_string(),
        Value::Null => String::new(),
        other => {
            degraded(&other, "String");
            String::new()
        }
    }
}

/// Loads a timestamp. Integers are read as milliseconds since the Unix epoch.
pub fn to_timestamp(value: Value) -> DateTime<Utc> {
    let millis = match value {
        Value::Timestamp(v) => return v,
        Value::I8(v) => Some(v as i64),
        Value::I16(v) => Some(v as i64),
        Value::I32(v) => Some(v as i64),
        Value::I64(v) => Some(v),
        Value::U8(v) => Some(v as i64),
        Value::U16(v) => Some(v as i64),
        Value::U32(v) => Some(v as i64),
        Value::U64(v) => i64::try_from(v).ok(),
        Value::String(ref v) => {
            if let Some(ts) = parse_timestamp(v) {
                return ts;
            }
            None
        }
        Value::Null => return DateTime::<Utc>::default(),
        _ => None,
    };

    match millis.and_then(DateTime::<Utc>::from_timestamp_millis) {
        Some(ts) => ts,
        None => {
            degraded(&value, "DateTime<Utc>");
            DateTime::<Utc>::default()
        }
    }
}

/// Parses the textual timestamp forms the database emits: RFC 3339, or a
/// naive `YYYY-MM-DD HH:MM:SS[.fff]` read as UTC.
pub fn parse_timestamp(src: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(src) {
        return Some(ts.with_timezone(&Utc));
    }

    NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(src, fmt).ok())
        .map(|ts| ts.and_utc())
}

pub fn to_json(value: Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Json(v) => v,
        Value::Bool(v) => Json::Bool(v),
        Value::I8(v) => Json::from(v),
        Value::I16(v) => Json::from(v),
        Value::I32(v) => Json::from(v),
        Value::I64(v) => Json::from(v),
        Value::U8(v) => Json::from(v),
        Value::U16(v) => Json::from(v),
        Value::U32(v) => Json::from(v),
        Value::U64(v) => Json::from(v),
        Value::F32(v) => Json::from(v as f64),
        Value::F64(v) => Json::from(v),
        Value::Timestamp(v) => Json::from(v.timestamp_millis()),
        Value::String(ref v) => match serde_json::from_str(v) {
            Ok(v) => v,
            Err(_) => {
                degraded(&value, "serde_json::Value");
                Json::Null
            }
        },
        Value::Null => Json::Null,
    }
}
