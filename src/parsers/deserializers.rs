use std::time::SystemTime;

use chrono::{DateTime, Utc};
use plist::Value;

/// Seconds between the Unix epoch and the Apple reference date (2001-01-01T00:00:00Z)
pub const APPLE_REFERENCE_EPOCH_SECS: i64 = 978_307_200;

/// Decode a `createdAt` value into a UTC timestamp.
///
/// Accepts a native plist `<date>`, or a real/integer holding seconds since the
/// Apple reference date (how Foundation writes dates as plain numbers). Any other
/// value type yields `None`.
pub fn timestamp_from_value(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Date(date) => Some(DateTime::<Utc>::from(SystemTime::from(*date))),
        Value::Real(secs) => from_reference_seconds(*secs),
        Value::Integer(int) => from_reference_seconds(int.as_signed()? as f64),
        _ => None,
    }
}

fn from_reference_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let unix_ms = (secs + APPLE_REFERENCE_EPOCH_SECS as f64) * 1000.0;
    DateTime::from_timestamp_millis(unix_ms.round() as i64)
}
