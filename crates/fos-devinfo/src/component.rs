//! DeviceInfoTable - mounted component
//!
//! Owns the current snapshot and the subscriptions that keep it fresh.
//! Listeners only hold a weak reference to the state, so releasing the
//! component never depends on the host dropping its callbacks.

use crate::collector::collect;
use crate::config::WidgetConfig;
use crate::host::{HostEnvironment, Listener};
use crate::row::{InfoRow, Snapshot};
use crate::subscription::SubscriptionSet;
use crate::table::{TableModel, TableView};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, info};

struct TableState<H, V> {
    host: H,
    view: V,
    config: WidgetConfig,
    rows: RefCell<Snapshot>,
    refreshes: Cell<u64>,
}

impl<H: HostEnvironment, V: TableView> TableState<H, V> {
    fn refresh(&self) {
        let rows = collect(&self.host);
        let model = TableModel::new(&rows, &self.config);
        // Replace wholesale before rendering so the view never sees a stale model
        *self.rows.borrow_mut() = rows;
        self.refreshes.set(self.refreshes.get() + 1);
        debug!("snapshot refreshed ({} rows)", model.rows.len());
        self.view.render(&model);
    }
}

/// A live table of display and device properties.
pub struct DeviceInfoTable<H: HostEnvironment, V: TableView> {
    state: Rc<TableState<H, V>>,
    subscriptions: SubscriptionSet,
}

impl<H, V> DeviceInfoTable<H, V>
where
    H: HostEnvironment + 'static,
    V: TableView + 'static,
{
    /// Collect and render the first snapshot, then subscribe to changes.
    pub fn mount(host: H, view: V, config: WidgetConfig) -> Self {
        let state = Rc::new(TableState {
            host,
            view,
            config,
            rows: RefCell::new(Vec::new()),
            refreshes: Cell::new(0),
        });
        state.refresh();

        let weak: Weak<TableState<H, V>> = Rc::downgrade(&state);
        let listener: Listener = Rc::new(move || {
            if let Some(state) = weak.upgrade() {
                state.refresh();
            }
        });
        let subscriptions = SubscriptionSet::attach(&state.host, listener);

        info!("device info table mounted ({} subscriptions)", subscriptions.len());
        Self {
            state,
            subscriptions,
        }
    }

    /// Re-collect and re-render.
    pub fn refresh(&self) {
        self.state.refresh();
    }

    /// Current snapshot.
    pub fn rows(&self) -> Vec<InfoRow> {
        self.state.rows.borrow().clone()
    }

    /// Presentation model of the current snapshot.
    pub fn model(&self) -> TableModel {
        TableModel::new(&self.state.rows.borrow(), &self.state.config)
    }

    /// Number of collections since mount, the initial one included.
    pub fn refresh_count(&self) -> u64 {
        self.state.refreshes.get()
    }

    /// Live refresh subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn host(&self) -> &H {
        &self.state.host
    }

    pub fn view(&self) -> &V {
        &self.state.view
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.state.config
    }

    /// Release every subscription and drop the state.
    pub fn unmount(mut self) {
        let released = self.subscriptions.len();
        self.subscriptions.release_all();
        info!("device info table unmounted ({} subscriptions released)", released);
    }
}
