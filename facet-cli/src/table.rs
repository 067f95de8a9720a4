//! Results table showing the rows that pass every facet.

use std::cell::Cell;

use facet_lib::DataTableView;

use crate::dataset::{cell_label, Row};

/// Number of rows printed by the table.
const PAGE_SIZE: usize = 10;

#[derive(Debug, Default)]
pub struct TableView {
    pending: Cell<bool>,
    force_refresh: Cell<bool>,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The update requested since the last call, if any.
    /// `Some(true)` when any request asked for a full refresh.
    pub fn take_pending(&self) -> Option<bool> {
        if self.pending.replace(false) {
            Some(self.force_refresh.replace(false))
        } else {
            None
        }
    }
}

impl DataTableView for TableView {
    fn update(&self, force_refresh: bool) {
        self.pending.set(true);
        self.force_refresh.set(self.force_refresh.get() || force_refresh);
    }
}

/// Render the first page of `rows` as text lines.
pub fn format_rows(rows: &[&Row], columns: &[String]) -> Vec<String> {
    let mut lines = vec![format!("{} matching rows", rows.len())];
    for row in rows.iter().take(PAGE_SIZE) {
        let cells: Vec<String> = columns.iter().map(|c| cell_label(row, c)).collect();
        lines.push(format!("  {}", cells.join(" | ")));
    }
    if rows.len() > PAGE_SIZE {
        lines.push(format!("  … {} more", rows.len() - PAGE_SIZE));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_take_pending_merges_requests() {
        let table = TableView::new();
        assert_eq!(table.take_pending(), None);

        table.update(false);
        table.update(true);
        assert_eq!(table.take_pending(), Some(true));

        table.update(false);
        assert_eq!(table.take_pending(), Some(false));
    }

    #[test]
    fn test_format_rows_pages() {
        let json = format!(
            "[{}]",
            (0..12)
                .map(|i| format!(r#"{{"n":{i}}}"#))
                .collect::<Vec<_>>()
                .join(",")
        );
        let dataset = Dataset::from_json_str(&json).unwrap();
        let rows: Vec<&Row> = dataset.rows().iter().collect();

        let lines = format_rows(&rows, &["n".to_string()]);

        assert_eq!(lines[0], "12 matching rows");
        assert_eq!(lines[1], "  0");
        assert_eq!(lines.len(), 1 + PAGE_SIZE + 1);
        assert_eq!(lines[PAGE_SIZE + 1], "  … 2 more");
    }
}
