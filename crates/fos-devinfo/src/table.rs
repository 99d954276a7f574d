//! Table presentation model.

use crate::config::WidgetConfig;
use crate::row::InfoRow;

/// Column headers: property, value, copy control.
pub const HEADERS: [&str; 3] = ["Property", "Value", "Copy"];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: String,
    pub value: String,
    /// Tooltip of the copy control
    pub copy_title: String,
}

/// Everything a view needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub title: String,
    pub caption: String,
    pub copy_label: String,
    pub headers: [&'static str; 3],
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// Build the model from a snapshot. Row order follows the snapshot.
    pub fn new(rows: &[InfoRow], config: &WidgetConfig) -> Self {
        Self {
            title: config.title.clone(),
            caption: config.caption.clone(),
            copy_label: config.copy_label.clone(),
            headers: HEADERS,
            rows: rows
                .iter()
                .map(|row| TableRow {
                    key: row.key.clone(),
                    value: row.value.clone(),
                    copy_title: format!("Copy {}", row.key),
                })
                .collect(),
        }
    }

    /// Value copied by the control on row `index`.
    pub fn copy_value(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(|row| row.value.as_str())
    }
}

/// A surface the table is drawn on.
pub trait TableView {
    fn render(&self, table: &TableModel);
}
