//! fOS Device Info - Browser Binding
//!
//! Mounts the live device info table into a page:
//! - host: `window`/`navigator`/`screen` probes and event registration
//! - clipboard: `navigator.clipboard` with a textarea fallback
//! - view: DOM table with per-row copy buttons
//! - logging: `tracing` output routed to the browser console

mod clipboard;
mod host;
pub mod logging;
mod probe;
mod view;

pub use clipboard::{TextAreaSurface, WebClipboard};
pub use host::{WebHost, WebMediaWatcher};
pub use view::DomTableView;

use fos_devinfo::{ConfigError, DeviceInfoTable, WidgetConfig};
use tracing::info;
use wasm_bindgen::prelude::*;

/// Errors reported to the page when mounting fails.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No window object available")]
    NoWindow,

    #[error("No document available")]
    NoDocument,

    #[error("Container element not found: #{0}")]
    MissingContainer(String),

    #[error(transparent)]
    Dom(#[from] anyhow::Error),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Handle to a mounted table. Dropping it or calling `unmount` removes
/// the widget and every listener it registered.
#[wasm_bindgen]
pub struct DeviceInfoHandle {
    table: Option<DeviceInfoTable<WebHost, DomTableView>>,
}

#[wasm_bindgen]
impl DeviceInfoHandle {
    /// Re-collect and re-render now.
    pub fn refresh(&self) {
        if let Some(table) = &self.table {
            table.refresh();
        }
    }

    /// Current rows as a JSON array of `{key, value}`.
    #[wasm_bindgen(js_name = rowsJson)]
    pub fn rows_json(&self) -> String {
        let rows = self.table.as_ref().map(|t| t.rows()).unwrap_or_default();
        serde_json::to_string(&rows).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.table.is_some()
    }

    /// Remove the widget and release every subscription.
    pub fn unmount(&mut self) {
        if let Some(table) = self.table.take() {
            table.view().detach();
            table.unmount();
        }
    }
}

impl Drop for DeviceInfoHandle {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount(container_id: &str, config: WidgetConfig) -> Result<DeviceInfoHandle, MountError> {
    let host = WebHost::new();
    let window = host.window().cloned().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| MountError::MissingContainer(container_id.to_string()))?;

    let view = DomTableView::new(document, &container, WebClipboard::new(Some(window)))?;
    let table = DeviceInfoTable::mount(host, view, config);
    info!("mounted into #{}", container_id);

    Ok(DeviceInfoHandle { table: Some(table) })
}

/// Mount the table into the element with id `container_id`.
///
/// `config_json` is an optional, possibly partial, widget config object.
#[wasm_bindgen(js_name = mountDeviceInfo)]
pub fn mount_device_info(
    container_id: &str,
    config_json: Option<String>,
) -> Result<DeviceInfoHandle, JsValue> {
    let config = match config_json.as_deref() {
        Some(json) if !json.trim().is_empty() => WidgetConfig::from_json(json).map_err(MountError::from)?,
        _ => WidgetConfig::default(),
    };
    logging::init(&config.log_filter);

    Ok(mount(container_id, config)?)
}
