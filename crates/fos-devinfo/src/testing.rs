//! In-crate fakes for the host seams.

use crate::host::{
    ClipboardHost, CopySurface, HostEnvironment, HostError, HostSignal, Listener, MediaQuery,
    MediaWatcher, NetworkInfo, Subscription,
};
use crate::table::{TableModel, TableView};
use std::cell::{RefCell, RefMut};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Which registration styles a fake watcher accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
    Modern,
    LegacyOnly,
    Neither,
}

struct WatcherInner {
    matches: bool,
    registration: Registration,
    modern: Vec<(u64, Listener)>,
    legacy: Vec<(u64, Listener)>,
    next_id: u64,
}

#[derive(Clone)]
pub(crate) struct FakeWatcher {
    inner: Rc<RefCell<WatcherInner>>,
}

impl FakeWatcher {
    pub(crate) fn new(matches: bool, registration: Registration) -> Self {
        Self {
            inner: Rc::new(RefCell::new(WatcherInner {
                matches,
                registration,
                modern: Vec::new(),
                legacy: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Change the evaluation and notify listeners, as a host would.
    pub(crate) fn set_matches(&self, matches: bool) {
        self.inner.borrow_mut().matches = matches;
        self.fire();
    }

    pub(crate) fn fire(&self) {
        let listeners: Vec<Listener> = {
            let inner = self.inner.borrow();
            inner
                .modern
                .iter()
                .chain(inner.legacy.iter())
                .map(|(_, l)| l.clone())
                .collect()
        };
        for listener in listeners {
            listener();
        }
    }

    pub(crate) fn modern_count(&self) -> usize {
        self.inner.borrow().modern.len()
    }

    pub(crate) fn legacy_count(&self) -> usize {
        self.inner.borrow().legacy.len()
    }

    fn register(&self, legacy: bool, listener: Listener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            if legacy {
                inner.legacy.push((id, listener));
            } else {
                inner.modern.push((id, listener));
            }
            id
        };
        let inner = self.inner.clone();
        Subscription::new(move || {
            let mut inner = inner.borrow_mut();
            inner.modern.retain(|(i, _)| *i != id);
            inner.legacy.retain(|(i, _)| *i != id);
        })
    }
}

impl MediaWatcher for FakeWatcher {
    fn matches(&self) -> bool {
        self.inner.borrow().matches
    }

    fn add_change_listener(&self, listener: Listener) -> Result<Subscription, HostError> {
        match self.inner.borrow().registration {
            Registration::Modern => {}
            _ => return Err(HostError::Js("addEventListener is not a function".into())),
        }
        Ok(self.register(false, listener))
    }

    fn add_legacy_listener(&self, listener: Listener) -> Result<Subscription, HostError> {
        match self.inner.borrow().registration {
            Registration::Neither => return Err(HostError::Unsupported("addListener")),
            _ => {}
        }
        Ok(self.register(true, listener))
    }
}

/// Plain property values of a fake host.
#[derive(Debug, Clone, Default)]
pub(crate) struct HostState {
    pub inner_width: Option<f64>,
    pub inner_height: Option<f64>,
    pub outer_width: Option<f64>,
    pub outer_height: Option<f64>,
    pub device_pixel_ratio: Option<f64>,
    pub screen_width: Option<f64>,
    pub screen_height: Option<f64>,
    pub avail_width: Option<f64>,
    pub avail_height: Option<f64>,
    pub orientation_type: Option<String>,
    pub legacy_orientation: Option<f64>,
    pub visual_viewport: Option<(f64, f64)>,
    pub user_agent: Option<String>,
    pub platform: Option<String>,
    pub max_touch_points: Option<f64>,
    pub hardware_concurrency: Option<f64>,
    pub connection: Option<NetworkInfo>,
    pub root_font_size: Option<String>,
    pub media_supported: bool,
}

#[derive(Default)]
struct SignalRegistry {
    listeners: Vec<(u64, HostSignal, Listener)>,
    refused: HashSet<HostSignal>,
    next_id: u64,
}

/// Shared, cloneable fake host. Clones observe the same state.
#[derive(Clone)]
pub(crate) struct FakeHost {
    state: Rc<RefCell<HostState>>,
    watchers: Rc<HashMap<MediaQuery, FakeWatcher>>,
    signals: Rc<RefCell<SignalRegistry>>,
}

impl FakeHost {
    fn with_state(state: HostState) -> Self {
        let watchers = MediaQuery::ALL
            .into_iter()
            .map(|q| (q, FakeWatcher::new(q == MediaQuery::AnyHover, Registration::Modern)))
            .collect();
        Self {
            state: Rc::new(RefCell::new(state)),
            watchers: Rc::new(watchers),
            signals: Rc::new(RefCell::new(SignalRegistry::default())),
        }
    }

    /// A fully capable desktop browser.
    pub(crate) fn desktop() -> Self {
        Self::with_state(HostState {
            inner_width: Some(1024.0),
            inner_height: Some(768.0),
            outer_width: Some(1040.0),
            outer_height: Some(860.0),
            device_pixel_ratio: Some(1.5),
            screen_width: Some(1920.0),
            screen_height: Some(1080.0),
            avail_width: Some(1920.0),
            avail_height: Some(1040.0),
            orientation_type: Some("landscape-primary".into()),
            legacy_orientation: None,
            visual_viewport: Some((1024.0, 768.0)),
            user_agent: Some("Mozilla/5.0 (X11; Linux x86_64)".into()),
            platform: Some("Linux x86_64".into()),
            max_touch_points: Some(0.0),
            hardware_concurrency: Some(8.0),
            connection: Some(NetworkInfo {
                effective_type: Some("4g".into()),
                downlink: Some(10.0),
            }),
            root_font_size: Some("16px".into()),
            media_supported: true,
        })
    }

    /// A host exposing nothing at all.
    pub(crate) fn bare() -> Self {
        Self::with_state(HostState::default())
    }

    pub(crate) fn state_mut(&self) -> RefMut<'_, HostState> {
        self.state.borrow_mut()
    }

    pub(crate) fn watcher(&self, query: MediaQuery) -> FakeWatcher {
        self.watchers[&query].clone()
    }

    pub(crate) fn set_registration(&self, query: MediaQuery, registration: Registration) {
        self.watchers[&query].inner.borrow_mut().registration = registration;
    }

    /// Make `listen` fail for a signal.
    pub(crate) fn refuse_signal(&self, signal: HostSignal) {
        self.signals.borrow_mut().refused.insert(signal);
    }

    pub(crate) fn fire(&self, signal: HostSignal) {
        let listeners: Vec<Listener> = self
            .signals
            .borrow()
            .listeners
            .iter()
            .filter(|(_, s, _)| *s == signal)
            .map(|(_, _, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub(crate) fn is_listening(&self, signal: HostSignal) -> bool {
        self.signals
            .borrow()
            .listeners
            .iter()
            .any(|(_, s, _)| *s == signal)
    }

    /// Window listeners plus every media watcher listener.
    pub(crate) fn listener_count(&self) -> usize {
        let window = self.signals.borrow().listeners.len();
        let media: usize = self
            .watchers
            .values()
            .map(|w| w.modern_count() + w.legacy_count())
            .sum();
        window + media
    }
}

impl HostEnvironment for FakeHost {
    type Watcher = FakeWatcher;

    fn inner_width(&self) -> Option<f64> {
        self.state.borrow().inner_width
    }
    fn inner_height(&self) -> Option<f64> {
        self.state.borrow().inner_height
    }
    fn outer_width(&self) -> Option<f64> {
        self.state.borrow().outer_width
    }
    fn outer_height(&self) -> Option<f64> {
        self.state.borrow().outer_height
    }
    fn device_pixel_ratio(&self) -> Option<f64> {
        self.state.borrow().device_pixel_ratio
    }
    fn screen_width(&self) -> Option<f64> {
        self.state.borrow().screen_width
    }
    fn screen_height(&self) -> Option<f64> {
        self.state.borrow().screen_height
    }
    fn avail_width(&self) -> Option<f64> {
        self.state.borrow().avail_width
    }
    fn avail_height(&self) -> Option<f64> {
        self.state.borrow().avail_height
    }
    fn orientation_type(&self) -> Option<String> {
        self.state.borrow().orientation_type.clone()
    }
    fn legacy_orientation(&self) -> Option<f64> {
        self.state.borrow().legacy_orientation
    }
    fn visual_viewport(&self) -> Option<(f64, f64)> {
        self.state.borrow().visual_viewport
    }
    fn user_agent(&self) -> Option<String> {
        self.state.borrow().user_agent.clone()
    }
    fn platform(&self) -> Option<String> {
        self.state.borrow().platform.clone()
    }
    fn max_touch_points(&self) -> Option<f64> {
        self.state.borrow().max_touch_points
    }
    fn hardware_concurrency(&self) -> Option<f64> {
        self.state.borrow().hardware_concurrency
    }
    fn connection(&self) -> Option<NetworkInfo> {
        self.state.borrow().connection.clone()
    }
    fn root_font_size(&self) -> Option<String> {
        self.state.borrow().root_font_size.clone()
    }

    fn media_watcher(&self, query: MediaQuery) -> Option<FakeWatcher> {
        if self.state.borrow().media_supported {
            Some(self.watcher(query))
        } else {
            None
        }
    }

    fn listen(&self, signal: HostSignal, listener: Listener) -> Result<Subscription, HostError> {
        let id = {
            let mut registry = self.signals.borrow_mut();
            if registry.refused.contains(&signal) {
                return Err(HostError::Js(format!("cannot listen for {signal}")));
            }
            let id = registry.next_id;
            registry.next_id += 1;
            registry.listeners.push((id, signal, listener));
            id
        };
        let signals = self.signals.clone();
        Ok(Subscription::new(move || {
            signals.borrow_mut().listeners.retain(|(i, _, _)| *i != id);
        }))
    }
}

/// View that records every rendered model.
#[derive(Clone, Default)]
pub(crate) struct RecordingView {
    models: Rc<RefCell<Vec<TableModel>>>,
}

impl RecordingView {
    pub(crate) fn renders(&self) -> usize {
        self.models.borrow().len()
    }

    pub(crate) fn last(&self) -> Option<TableModel> {
        self.models.borrow().last().cloned()
    }
}

impl TableView for RecordingView {
    fn render(&self, table: &TableModel) {
        self.models.borrow_mut().push(table.clone());
    }
}

/// Behaviour of the fake asynchronous clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimaryClipboard {
    Succeeds,
    Rejects,
    Absent,
}

#[derive(Default)]
struct SurfaceLog {
    texts: Vec<String>,
    attached: usize,
    copied: Vec<String>,
}

pub(crate) struct FakeClipboard {
    primary: PrimaryClipboard,
    written: RefCell<Vec<String>>,
    log: Rc<RefCell<SurfaceLog>>,
    select_ok: bool,
    copy_result: Result<bool, HostError>,
}

impl FakeClipboard {
    pub(crate) fn new(primary: PrimaryClipboard) -> Self {
        Self {
            primary,
            written: RefCell::new(Vec::new()),
            log: Rc::new(RefCell::new(SurfaceLog::default())),
            select_ok: true,
            copy_result: Ok(true),
        }
    }

    pub(crate) fn with_failing_select(mut self) -> Self {
        self.select_ok = false;
        self
    }

    pub(crate) fn with_failing_copy(mut self) -> Self {
        self.copy_result = Err(HostError::Js("execCommand threw".into()));
        self
    }

    pub(crate) fn with_copy_result(mut self, ok: bool) -> Self {
        self.copy_result = Ok(ok);
        self
    }

    pub(crate) fn written(&self) -> Vec<String> {
        self.written.borrow().clone()
    }

    pub(crate) fn surfaces_created(&self) -> usize {
        self.log.borrow().texts.len()
    }

    pub(crate) fn surface_texts(&self) -> Vec<String> {
        self.log.borrow().texts.clone()
    }

    pub(crate) fn surfaces_attached(&self) -> usize {
        self.log.borrow().attached
    }

    pub(crate) fn copied(&self) -> Vec<String> {
        self.log.borrow().copied.clone()
    }
}

pub(crate) struct FakeSurface {
    text: String,
    log: Rc<RefCell<SurfaceLog>>,
    select_ok: bool,
    copy_result: Result<bool, HostError>,
}

impl CopySurface for FakeSurface {
    fn select_all(&self) -> Result<(), HostError> {
        if self.select_ok {
            Ok(())
        } else {
            Err(HostError::Js("select failed".into()))
        }
    }

    fn exec_copy(&self) -> Result<bool, HostError> {
        let result = self.copy_result.clone();
        if let Ok(true) = result {
            self.log.borrow_mut().copied.push(self.text.clone());
        }
        result
    }

    fn detach(&self) {
        self.log.borrow_mut().attached -= 1;
    }
}

impl ClipboardHost for FakeClipboard {
    type Surface = FakeSurface;

    async fn write_text(&self, text: &str) -> Result<(), HostError> {
        match self.primary {
            PrimaryClipboard::Succeeds => {
                self.written.borrow_mut().push(text.to_string());
                Ok(())
            }
            PrimaryClipboard::Rejects => Err(HostError::Js("NotAllowedError".into())),
            PrimaryClipboard::Absent => Err(HostError::Unsupported("navigator.clipboard")),
        }
    }

    fn create_surface(&self, text: &str) -> Result<FakeSurface, HostError> {
        {
            let mut log = self.log.borrow_mut();
            log.texts.push(text.to_string());
            log.attached += 1;
        }
        Ok(FakeSurface {
            text: text.to_string(),
            log: self.log.clone(),
            select_ok: self.select_ok,
            copy_result: self.copy_result.clone(),
        })
    }
}
