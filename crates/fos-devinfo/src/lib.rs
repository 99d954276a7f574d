//! fOS Device Info - Live Display & Window Snapshot
//!
//! Reads ambient display properties from a host environment and keeps
//! a table of them fresh:
//! - collector: one guarded read per property, sentinel on absence
//! - subscription: refresh triggers with RAII release
//! - clipboard: async write with a temporary-surface fallback
//! - table: presentation model for the three-column table
//!
//! The host is injected through the traits in [`host`], so the whole
//! component runs against fakes in tests and against `web-sys` in the
//! browser binding.

mod clipboard;
mod collector;
mod component;
mod config;
mod format;
pub mod host;
mod row;
mod subscription;
mod table;

#[cfg(test)]
mod testing;

pub use clipboard::{copy_text, CopyOutcome};
pub use collector::{collect, labels};
pub use component::DeviceInfoTable;
pub use config::{ConfigError, WidgetConfig};
pub use host::{
    ClipboardHost, CopySurface, HostEnvironment, HostError, HostSignal, Listener, MediaQuery,
    MediaWatcher, NetworkInfo, Subscription,
};
pub use row::{InfoRow, Snapshot};
pub use subscription::{subscribe_media, SubscriptionSet};
pub use table::{TableModel, TableRow, TableView};
