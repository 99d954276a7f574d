//! Snapshot Collector
//!
//! Pure read of the host. Each property is probed on its own, so a
//! missing capability only ever affects its own row.

use crate::format::{connection_json, js_number};
use crate::host::{HostEnvironment, MediaQuery, MediaWatcher};
use crate::row::{InfoRow, Snapshot};

const EMPTY: &str = "";
const NOT_AVAILABLE: &str = "n/a";
const UNKNOWN: &str = "unknown";

/// Row labels in display order.
pub fn labels() -> [&'static str; 20] {
    [
        "window.innerWidth",
        "window.innerHeight",
        "window.outerWidth",
        "window.outerHeight",
        "window.devicePixelRatio",
        "screen.width",
        "screen.height",
        "screen.availWidth",
        "screen.availHeight",
        "screen.orientation",
        "visualViewport",
        "navigator.userAgent",
        "navigator.platform",
        "navigator.maxTouchPoints",
        MediaQuery::PrefersDark.label(),
        MediaQuery::CoarsePointer.label(),
        MediaQuery::AnyHover.label(),
        "root font-size (1rem)",
        "navigator.hardwareConcurrency",
        "navigator.connection (if available)",
    ]
}

fn number_or_empty(value: Option<f64>) -> String {
    value.map(js_number).unwrap_or_default()
}

fn orientation<H: HostEnvironment>(host: &H) -> String {
    match host.orientation_type() {
        Some(kind) if !kind.is_empty() => kind,
        _ => host
            .legacy_orientation()
            .map(js_number)
            .unwrap_or_else(|| UNKNOWN.to_string()),
    }
}

fn visual_viewport<H: HostEnvironment>(host: &H) -> String {
    host.visual_viewport()
        .map(|(w, h)| format!("{}×{}", js_number(w), js_number(h)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn media<H: HostEnvironment>(host: &H, query: MediaQuery) -> String {
    host.media_watcher(query)
        .map(|watcher| watcher.matches())
        .unwrap_or(false)
        .to_string()
}

fn max_touch_points<H: HostEnvironment>(host: &H) -> String {
    match host.max_touch_points() {
        Some(n) if n != 0.0 && !n.is_nan() => js_number(n),
        _ => "0".to_string(),
    }
}

fn hardware_concurrency<H: HostEnvironment>(host: &H) -> String {
    match host.hardware_concurrency() {
        Some(n) if n != 0.0 && !n.is_nan() => js_number(n),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn connection<H: HostEnvironment>(host: &H) -> String {
    host.connection()
        .and_then(|info| connection_json(&info))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Collect the current snapshot. Never fails.
pub fn collect<H: HostEnvironment>(host: &H) -> Snapshot {
    let values = [
        number_or_empty(host.inner_width()),
        number_or_empty(host.inner_height()),
        number_or_empty(host.outer_width()),
        number_or_empty(host.outer_height()),
        number_or_empty(host.device_pixel_ratio()),
        number_or_empty(host.screen_width()),
        number_or_empty(host.screen_height()),
        number_or_empty(host.avail_width()),
        number_or_empty(host.avail_height()),
        orientation(host),
        visual_viewport(host),
        host.user_agent().unwrap_or_else(|| EMPTY.to_string()),
        host.platform().unwrap_or_else(|| EMPTY.to_string()),
        max_touch_points(host),
        media(host, MediaQuery::PrefersDark),
        media(host, MediaQuery::CoarsePointer),
        media(host, MediaQuery::AnyHover),
        host.root_font_size().unwrap_or_else(|| EMPTY.to_string()),
        hardware_concurrency(host),
        connection(host),
    ];

    labels()
        .into_iter()
        .zip(values)
        .map(|(key, value)| InfoRow::new(key, value))
        .collect()
}
