//! Browser implementation of the host seams.

use crate::probe::{self, host_error};
use fos_devinfo::{
    HostEnvironment, HostError, HostSignal, Listener, MediaQuery, MediaWatcher, NetworkInfo,
    Subscription,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{EventTarget, MediaQueryList, Window};

/// Register `listener` for `event` on `target`; the guard removes it.
pub(crate) fn listen_on(
    target: EventTarget,
    event: &'static str,
    listener: Listener,
) -> Result<Subscription, HostError> {
    let closure = Closure::<dyn Fn()>::new(move || listener());
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(host_error)?;

    Ok(Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }))
}

/// `matchMedia` result.
pub struct WebMediaWatcher {
    list: MediaQueryList,
}

impl MediaWatcher for WebMediaWatcher {
    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn add_change_listener(&self, listener: Listener) -> Result<Subscription, HostError> {
        if probe::method(&self.list, "addEventListener").is_none() {
            return Err(HostError::Unsupported("MediaQueryList.addEventListener"));
        }
        listen_on(self.list.clone().into(), "change", listener)
    }

    fn add_legacy_listener(&self, listener: Listener) -> Result<Subscription, HostError> {
        if probe::method(&self.list, "addListener").is_none() {
            return Err(HostError::Unsupported("MediaQueryList.addListener"));
        }
        let closure = Closure::<dyn Fn()>::new(move || listener());
        self.list
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .map_err(host_error)?;

        let list = self.list.clone();
        Ok(Subscription::new(move || {
            let _ = list.remove_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()));
        }))
    }
}

/// The page's `window`, probed property by property.
#[derive(Clone)]
pub struct WebHost {
    window: Option<Window>,
}

impl WebHost {
    pub fn new() -> Self {
        Self {
            window: web_sys::window(),
        }
    }

    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    fn window_value(&self) -> Option<&JsValue> {
        self.window.as_ref().map(AsRef::<JsValue>::as_ref)
    }

    fn window_number(&self, name: &str) -> Option<f64> {
        self.window_value().and_then(|w| probe::number(w, name))
    }

    fn screen(&self) -> Option<JsValue> {
        self.window_value().and_then(|w| probe::get(w, "screen"))
    }

    fn screen_number(&self, name: &str) -> Option<f64> {
        self.screen().and_then(|s| probe::number(&s, name))
    }

    fn navigator(&self) -> Option<JsValue> {
        self.window_value().and_then(|w| probe::get(w, "navigator"))
    }
}

impl Default for WebHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostEnvironment for WebHost {
    type Watcher = WebMediaWatcher;

    fn inner_width(&self) -> Option<f64> {
        self.window_number("innerWidth")
    }

    fn inner_height(&self) -> Option<f64> {
        self.window_number("innerHeight")
    }

    fn outer_width(&self) -> Option<f64> {
        self.window_number("outerWidth")
    }

    fn outer_height(&self) -> Option<f64> {
        self.window_number("outerHeight")
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.window_number("devicePixelRatio")
    }

    fn screen_width(&self) -> Option<f64> {
        self.screen_number("width")
    }

    fn screen_height(&self) -> Option<f64> {
        self.screen_number("height")
    }

    fn avail_width(&self) -> Option<f64> {
        self.screen_number("availWidth")
    }

    fn avail_height(&self) -> Option<f64> {
        self.screen_number("availHeight")
    }

    fn orientation_type(&self) -> Option<String> {
        self.screen()
            .and_then(|s| probe::get(&s, "orientation"))
            .and_then(|o| probe::string(&o, "type"))
    }

    fn legacy_orientation(&self) -> Option<f64> {
        self.window_number("orientation")
    }

    fn visual_viewport(&self) -> Option<(f64, f64)> {
        let viewport = self.window_value().and_then(|w| probe::get(w, "visualViewport"))?;
        Some((
            probe::number(&viewport, "width")?,
            probe::number(&viewport, "height")?,
        ))
    }

    fn user_agent(&self) -> Option<String> {
        self.navigator().and_then(|n| probe::string(&n, "userAgent"))
    }

    fn platform(&self) -> Option<String> {
        self.navigator().and_then(|n| probe::string(&n, "platform"))
    }

    fn max_touch_points(&self) -> Option<f64> {
        self.navigator().and_then(|n| probe::number(&n, "maxTouchPoints"))
    }

    fn hardware_concurrency(&self) -> Option<f64> {
        self.navigator()
            .and_then(|n| probe::number(&n, "hardwareConcurrency"))
    }

    fn connection(&self) -> Option<NetworkInfo> {
        let connection = self.navigator().and_then(|n| probe::get(&n, "connection"))?;
        Some(NetworkInfo {
            effective_type: probe::string(&connection, "effectiveType"),
            downlink: probe::number(&connection, "downlink"),
        })
    }

    fn root_font_size(&self) -> Option<String> {
        let window = self.window.as_ref()?;
        let root = window.document()?.document_element()?;
        let style = window.get_computed_style(&root).ok().flatten()?;
        style.get_property_value("font-size").ok()
    }

    fn media_watcher(&self, query: MediaQuery) -> Option<WebMediaWatcher> {
        let window = self.window.as_ref()?;
        probe::method(window, "matchMedia")?;
        let list = window.match_media(query.query()).ok().flatten()?;
        Some(WebMediaWatcher { list })
    }

    fn listen(&self, signal: HostSignal, listener: Listener) -> Result<Subscription, HostError> {
        let window = self.window.as_ref().ok_or(HostError::Unsupported("window"))?;
        let target: EventTarget = if signal.is_viewport() {
            window
                .visual_viewport()
                .ok_or(HostError::Unsupported("visualViewport"))?
                .into()
        } else {
            window.clone().into()
        };
        listen_on(target, signal.event_name(), listener)
    }
}
