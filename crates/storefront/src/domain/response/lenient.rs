//! Number fields the backend sends as JSON numbers, numeric strings or `null`.
//!
//! Anything that does not read as a number decodes to zero, so one odd record
//! never fails a whole listing.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

pub fn number_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(as_f64(&value).unwrap_or_else(|| {
        if !value.is_null() {
            warn!("Treating non-numeric value {value} as 0");
        }
        0.0
    }))
}

pub fn number_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    };

    Ok(number.unwrap_or_else(|| {
        if !value.is_null() {
            warn!("Treating non-numeric value {value} as 0");
        }
        0
    }))
}

fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
