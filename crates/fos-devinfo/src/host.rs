//! Host Capability Seams
//!
//! Everything the component reads from or registers with its host goes
//! through these traits. Each property accessor is a capability probe:
//! `None` means the host does not expose it, and the collector maps that
//! to a sentinel instead of failing.

use std::fmt;
use std::rc::Rc;

/// Refresh callback registered with the host.
pub type Listener = Rc<dyn Fn()>;

/// Errors raised at the host seams. These never leave the component.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// The host does not implement the requested capability
    #[error("Unsupported capability: {0}")]
    Unsupported(&'static str),

    /// The host threw while servicing a request
    #[error("Host error: {0}")]
    Js(String),
}

/// Media-query preferences watched by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaQuery {
    PrefersDark,
    CoarsePointer,
    AnyHover,
}

impl MediaQuery {
    /// All watched queries, in display order.
    pub const ALL: [MediaQuery; 3] = [
        MediaQuery::PrefersDark,
        MediaQuery::CoarsePointer,
        MediaQuery::AnyHover,
    ];

    /// Query text handed to the host's matcher.
    pub fn query(&self) -> &'static str {
        match self {
            Self::PrefersDark => "(prefers-color-scheme: dark)",
            Self::CoarsePointer => "(pointer: coarse)",
            Self::AnyHover => "(any-hover: hover)",
        }
    }

    /// Row label for this preference.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PrefersDark => "prefers-color-scheme: dark",
            Self::CoarsePointer => "pointer: coarse",
            Self::AnyHover => "any-hover: hover",
        }
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.query())
    }
}

/// Window-level change signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostSignal {
    /// Window resize
    Resize,
    /// Device orientation change
    OrientationChange,
    /// Visual viewport resize
    ViewportResize,
    /// Visual viewport scroll
    ViewportScroll,
}

impl HostSignal {
    /// DOM event name for this signal.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Resize | Self::ViewportResize => "resize",
            Self::OrientationChange => "orientationchange",
            Self::ViewportScroll => "scroll",
        }
    }

    /// Whether the signal is dispatched by the visual viewport rather than the window.
    pub fn is_viewport(&self) -> bool {
        matches!(self, Self::ViewportResize | Self::ViewportScroll)
    }
}

impl fmt::Display for HostSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize => write!(f, "window.resize"),
            Self::OrientationChange => write!(f, "window.orientationchange"),
            Self::ViewportResize => write!(f, "visualViewport.resize"),
            Self::ViewportScroll => write!(f, "visualViewport.scroll"),
        }
    }
}

/// Network information, when the host exposes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkInfo {
    pub effective_type: Option<String>,
    pub downlink: Option<f64>,
}

/// A registered listener. Dropping the guard releases it exactly once.
#[must_use = "dropping a Subscription releases the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap the action that unregisters a listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the listener now.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// A media-query matcher with change notification.
///
/// Hosts have shipped two registration styles over time; both are
/// exposed so the subscription adapter can try one and fall back.
pub trait MediaWatcher {
    /// Current evaluation of the query.
    fn matches(&self) -> bool;

    /// Event-listener style registration (`change` event).
    fn add_change_listener(&self, listener: Listener) -> Result<Subscription, HostError>;

    /// Listener-list style registration.
    fn add_legacy_listener(&self, listener: Listener) -> Result<Subscription, HostError>;
}

/// Read-only view of the host environment plus change notification.
pub trait HostEnvironment {
    type Watcher: MediaWatcher;

    // Window geometry
    fn inner_width(&self) -> Option<f64>;
    fn inner_height(&self) -> Option<f64>;
    fn outer_width(&self) -> Option<f64>;
    fn outer_height(&self) -> Option<f64>;
    fn device_pixel_ratio(&self) -> Option<f64>;

    // Screen
    fn screen_width(&self) -> Option<f64>;
    fn screen_height(&self) -> Option<f64>;
    fn avail_width(&self) -> Option<f64>;
    fn avail_height(&self) -> Option<f64>;
    /// Modern orientation type, e.g. `landscape-primary`
    fn orientation_type(&self) -> Option<String>;
    /// Legacy numeric orientation in degrees
    fn legacy_orientation(&self) -> Option<f64>;

    /// Visual viewport `(width, height)`
    fn visual_viewport(&self) -> Option<(f64, f64)>;

    // Navigator
    fn user_agent(&self) -> Option<String>;
    fn platform(&self) -> Option<String>;
    fn max_touch_points(&self) -> Option<f64>;
    fn hardware_concurrency(&self) -> Option<f64>;
    fn connection(&self) -> Option<NetworkInfo>;

    /// Computed `font-size` of the root element
    fn root_font_size(&self) -> Option<String>;

    /// Matcher for a media query, if the host can evaluate queries.
    fn media_watcher(&self, query: MediaQuery) -> Option<Self::Watcher>;

    /// Register a listener for a window-level signal.
    fn listen(&self, signal: HostSignal, listener: Listener) -> Result<Subscription, HostError>;
}

/// A temporary, invisible, editable text surface used for the legacy copy path.
pub trait CopySurface {
    /// Select the full contents.
    fn select_all(&self) -> Result<(), HostError>;

    /// Run the legacy synchronous copy command. Returns whether the host reported success.
    fn exec_copy(&self) -> Result<bool, HostError>;

    /// Detach the surface from the document.
    fn detach(&self);
}

/// Clipboard capabilities of the host.
#[allow(async_fn_in_trait)]
pub trait ClipboardHost {
    type Surface: CopySurface;

    /// Asynchronous clipboard write.
    async fn write_text(&self, text: &str) -> Result<(), HostError>;

    /// Create a populated, attached copy surface.
    fn create_surface(&self, text: &str) -> Result<Self::Surface, HostError>;
}
