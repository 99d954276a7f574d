//! Widget Configuration
//!
//! Presentation text and log filter. Every field has a default that
//! reproduces the stock widget, so an empty object is a valid config.

use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Complete widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Heading above the table
    pub title: String,

    /// Caption next to the heading
    pub caption: String,

    /// Text of each row's copy button
    pub copy_label: String,

    /// `tracing` filter directive, e.g. `info` or `fos_devinfo=debug`
    pub log_filter: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Display & Window Info".to_string(),
            caption: "Live values — updates on resize/orientation".to_string(),
            copy_label: "Copy".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
