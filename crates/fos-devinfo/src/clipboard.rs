//! Clipboard Helper
//!
//! Primary path: the host's asynchronous clipboard write.
//! Fallback: a temporary text surface, selected and copied with the
//! legacy command, then removed on every path out.

use crate::host::{ClipboardHost, CopySurface, HostError};
use tracing::{debug, warn};

/// How a copy request was served. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Written through the asynchronous clipboard
    Clipboard,
    /// Copied through the temporary surface
    Fallback,
    /// Both paths failed
    Failed,
}

/// Removes the surface when dropped.
struct SurfaceGuard<S: CopySurface> {
    surface: S,
}

impl<S: CopySurface> Drop for SurfaceGuard<S> {
    fn drop(&mut self) {
        self.surface.detach();
    }
}

fn fallback_copy<C: ClipboardHost>(host: &C, text: &str) -> Result<bool, HostError> {
    let guard = SurfaceGuard {
        surface: host.create_surface(text)?,
    };
    guard.surface.select_all()?;
    guard.surface.exec_copy()
}

/// Copy `text` to the clipboard. Never returns an error.
pub async fn copy_text<C: ClipboardHost>(host: &C, text: &str) -> CopyOutcome {
    match host.write_text(text).await {
        Ok(()) => {
            debug!("copied {} bytes via clipboard", text.len());
            CopyOutcome::Clipboard
        }
        Err(e) => {
            debug!("clipboard write failed ({}), using fallback", e);
            match fallback_copy(host, text) {
                Ok(true) => CopyOutcome::Fallback,
                Ok(false) => {
                    warn!("copy command was rejected by the host");
                    CopyOutcome::Failed
                }
                Err(e) => {
                    warn!("fallback copy failed: {}", e);
                    CopyOutcome::Failed
                }
            }
        }
    }
}
