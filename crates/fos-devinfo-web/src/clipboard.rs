//! Browser clipboard: async `writeText` with a hidden textarea fallback.

use crate::probe::{self, host_error};
use fos_devinfo::{ClipboardHost, CopySurface, HostError};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement, Window};

/// Off-screen, transparent, but still selectable and editable.
const SURFACE_STYLE: [(&str, &str); 4] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "-9999px"),
    ("opacity", "0"),
];

#[derive(Clone)]
pub struct WebClipboard {
    window: Option<Window>,
}

impl WebClipboard {
    pub fn new(window: Option<Window>) -> Self {
        Self { window }
    }
}

/// A `<textarea>` appended to `document.body` for `execCommand("copy")`.
pub struct TextAreaSurface {
    element: HtmlTextAreaElement,
    document: HtmlDocument,
}

impl CopySurface for TextAreaSurface {
    fn select_all(&self) -> Result<(), HostError> {
        self.element.select();
        Ok(())
    }

    fn exec_copy(&self) -> Result<bool, HostError> {
        self.document.exec_command("copy").map_err(host_error)
    }

    fn detach(&self) {
        self.element.remove();
    }
}

impl ClipboardHost for WebClipboard {
    type Surface = TextAreaSurface;

    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        let window: &JsValue = self.window.as_ref().ok_or(HostError::Unsupported("window"))?;
        let clipboard = probe::get(window, "navigator")
            .and_then(|n| probe::get(&n, "clipboard"))
            .ok_or(HostError::Unsupported("navigator.clipboard"))?;
        let write = probe::method(&clipboard, "writeText")
            .ok_or(HostError::Unsupported("navigator.clipboard.writeText"))?;

        let promise: Promise = write
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(host_error)?
            .dyn_into()
            .map_err(|_| HostError::Js("writeText did not return a promise".into()))?;
        JsFuture::from(promise).await.map_err(host_error)?;
        Ok(())
    }

    fn create_surface(&self, text: &str) -> Result<TextAreaSurface, HostError> {
        let document = self
            .window
            .as_ref()
            .and_then(|w| w.document())
            .ok_or(HostError::Unsupported("document"))?;
        let body = document.body().ok_or(HostError::Unsupported("document.body"))?;

        let element: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(host_error)?
            .dyn_into()
            .map_err(|_| HostError::Js("textarea is not an HTMLTextAreaElement".into()))?;
        element.set_value(text);
        let _ = element.set_attribute("aria-hidden", "true");
        let style = element.style();
        for (name, value) in SURFACE_STYLE {
            style.set_property(name, value).map_err(host_error)?;
        }
        body.append_child(&element).map_err(host_error)?;

        // execCommand lives on every document, not only HTMLDocument instances
        let document: HtmlDocument = document.unchecked_into();
        Ok(TextAreaSurface { element, document })
    }
}
