//! Change-Subscription Manager
//!
//! Wires every refresh trigger to the same listener and owns the
//! resulting guards. Dropping the set releases all of them.

use crate::host::{HostEnvironment, HostSignal, Listener, MediaQuery, MediaWatcher, Subscription};
use tracing::debug;

/// Register a change listener on a media watcher.
///
/// Tries the event-listener style first and falls back to the
/// listener-list style. Hosts that support neither yield `None`; the
/// error is logged and dropped so other subscriptions still attach.
pub fn subscribe_media<W: MediaWatcher>(watcher: &W, listener: Listener) -> Option<Subscription> {
    match watcher.add_change_listener(listener.clone()) {
        Ok(sub) => Some(sub),
        Err(e) => {
            debug!("change listener unavailable ({}), trying legacy listener", e);
            match watcher.add_legacy_listener(listener) {
                Ok(sub) => Some(sub),
                Err(e) => {
                    debug!("legacy listener unavailable: {}", e);
                    None
                }
            }
        }
    }
}

/// All subscriptions held by one mounted table.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subscriptions: Vec<Subscription>,
}

impl SubscriptionSet {
    /// Subscribe `listener` to every refresh trigger the host supports.
    pub fn attach<H: HostEnvironment>(host: &H, listener: Listener) -> Self {
        let mut set = Self::default();

        set.listen(host, HostSignal::Resize, &listener);
        set.listen(host, HostSignal::OrientationChange, &listener);

        for query in MediaQuery::ALL {
            match host.media_watcher(query) {
                Some(watcher) => {
                    if let Some(sub) = subscribe_media(&watcher, listener.clone()) {
                        set.subscriptions.push(sub);
                    }
                }
                None => debug!("no media matcher for {}", query),
            }
        }

        if host.visual_viewport().is_some() {
            set.listen(host, HostSignal::ViewportResize, &listener);
            set.listen(host, HostSignal::ViewportScroll, &listener);
        }

        debug!("attached {} refresh subscriptions", set.len());
        set
    }

    fn listen<H: HostEnvironment>(&mut self, host: &H, signal: HostSignal, listener: &Listener) {
        match host.listen(signal, listener.clone()) {
            Ok(sub) => self.subscriptions.push(sub),
            Err(e) => debug!("failed to listen for {}: {}", signal, e),
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release every subscription.
    pub fn release_all(&mut self) {
        for sub in self.subscriptions.drain(..) {
            sub.release();
        }
    }
}

impl Drop for SubscriptionSet {
    fn drop(&mut self) {
        self.release_all();
    }
}
