//! Capability probes over raw JS objects.
//!
//! Properties are read reflectively so a missing API, a `null`, or a
//! throwing getter all read as `None`.

use fos_devinfo::HostError;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Read `name` from `target`.
pub(crate) fn get(target: &JsValue, name: &str) -> Option<JsValue> {
    match Reflect::get(target, &JsValue::from_str(name)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
        _ => None,
    }
}

pub(crate) fn number(target: &JsValue, name: &str) -> Option<f64> {
    get(target, name).and_then(|v| v.as_f64())
}

pub(crate) fn string(target: &JsValue, name: &str) -> Option<String> {
    get(target, name).and_then(|v| v.as_string())
}

pub(crate) fn method(target: &JsValue, name: &str) -> Option<Function> {
    get(target, name).and_then(|v| v.dyn_into::<Function>().ok())
}

/// Convert a thrown JS value into a host error.
pub(crate) fn host_error(value: JsValue) -> HostError {
    let message = value
        .as_string()
        .or_else(|| string(&value, "message"))
        .unwrap_or_else(|| format!("{:?}", value));
    HostError::Js(message)
}
