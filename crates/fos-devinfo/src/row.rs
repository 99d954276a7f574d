//! Snapshot rows.

use serde::{Deserialize, Serialize};

/// One labelled value in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRow {
    /// Property label, unique within a snapshot
    pub key: String,
    /// Display text
    pub value: String,
}

impl InfoRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Ordered rows collected at one point in time.
pub type Snapshot = Vec<InfoRow>;
