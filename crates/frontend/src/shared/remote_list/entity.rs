use serde::de::DeserializeOwned;

use super::controller::FailureMessages;
use crate::shared::export::ExcelExportable;

/// Placeholder for absent cells in the table
pub const EMPTY_CELL: &str = "-";

/// One table column: wire field key, header label and minimum width in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub min_width: f64,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, min_width: f64) -> Self {
        Self { key, label, min_width }
    }
}

/// A record type that can be shown in a remote list and exported.
pub trait ListRow: Clone + DeserializeOwned + Send + Sync + 'static {
    const COLUMNS: &'static [Column];

    /// Every wire field of the record, in export order. The export carries
    /// all of them, not only the displayed columns.
    const FIELDS: &'static [&'static str];

    /// Value of the field with `key`, `None` when absent on the record.
    fn cell(&self, key: &str) -> Option<String>;

    fn display_cell(&self, key: &str) -> String {
        self.cell(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| EMPTY_CELL.to_string())
    }

    fn display_row(&self) -> Vec<String> {
        Self::COLUMNS.iter().map(|c| self.display_cell(c.key)).collect()
    }
}

impl<R: ListRow> ExcelExportable for R {
    fn headers() -> Vec<&'static str> {
        R::FIELDS.to_vec()
    }

    fn to_excel_row(&self) -> Vec<String> {
        R::FIELDS
            .iter()
            .map(|key| self.cell(key).unwrap_or_default())
            .collect()
    }
}

/// Static description of a listed entity.
pub trait ListEntity: 'static {
    type Row: ListRow;

    /// `{entity}--list` DOM id of the page root
    const PAGE_ID: &'static str;
    const TITLE: &'static str;
    /// Used in the subtitle: "Displaying {RECORD_NOUN} records (N total)"
    const RECORD_NOUN: &'static str;
    const ENDPOINT: &'static str;
    /// File name stem: `{EXPORT_TAG}_Page_{n}.xlsx`
    const EXPORT_TAG: &'static str;
    const SHEET_NAME: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;
    const EMPTY_MESSAGE: &'static str;
    const LOADING_MESSAGE: &'static str;
    const MESSAGES: FailureMessages;
    const PAGE_SIZE: u32 = 10;

    fn subtitle(total_count: u64) -> String {
        format!("Displaying {} records ({} total)", Self::RECORD_NOUN, total_count)
    }
}
