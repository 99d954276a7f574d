//! Host-style value formatting.

use crate::host::NetworkInfo;
use serde::{Serialize, Serializer};

/// Render a number the way the host's `String(number)` does.
pub(crate) fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        // -0 prints as 0
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

#[derive(Serialize)]
struct ConnectionJson<'a> {
    #[serde(rename = "effectiveType", skip_serializing_if = "Option::is_none")]
    effective_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "js_json_number")]
    downlink: Option<f64>,
}

/// Integral values lose their fractional part, non-finite ones become null.
fn js_json_number<S: Serializer>(value: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15 => s.serialize_i64(*n as i64),
        Some(n) if n.is_finite() => s.serialize_f64(*n),
        _ => s.serialize_none(),
    }
}

/// Compact single-line JSON with `effectiveType` and `downlink`.
pub(crate) fn connection_json(info: &NetworkInfo) -> Option<String> {
    let json = ConnectionJson {
        effective_type: info.effective_type.as_deref(),
        downlink: info.downlink,
    };
    serde_json::to_string(&json).ok()
}
