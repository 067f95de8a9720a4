//! Rows loaded from a JSON file.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{CliError, Result};

pub type Row = Map<String, Value>;

/// Label shown for missing and null cells.
pub const BLANK_LABEL: &str = "(blank)";

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse a JSON array of objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let Value::Array(items) = serde_json::from_str(json)? else {
            return Err(CliError::InvalidDataset(
                "expected an array of row objects".to_string(),
            ));
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(row) => Ok(row),
                other => Err(CliError::InvalidDataset(format!(
                    "row {i} is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names of the first row.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default()
    }
}

/// Display label of a row's cell, used as the facet choice label.
pub fn cell_label(row: &Row, column: &str) -> String {
    match row.get(column) {
        None | Some(Value::Null) => BLANK_LABEL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_reads_rows() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"city":"Paris","year":2001}},{{"city":"Rome"}}]"#).unwrap();

        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.columns(), vec!["city", "year"]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Dataset::load(Path::new("/nonexistent/rows.json")).unwrap_err();

        assert!(err.to_string().starts_with("/nonexistent/rows.json"));
    }

    #[test]
    fn test_rejects_non_array() {
        let err = Dataset::from_json_str(r#"{"city":"Paris"}"#).unwrap_err();

        assert!(matches!(err, CliError::InvalidDataset(_)));
    }

    #[test]
    fn test_rejects_non_object_row() {
        let err = Dataset::from_json_str(r#"[{"city":"Paris"}, 3]"#).unwrap_err();

        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_cell_labels() {
        let dataset =
            Dataset::from_json_str(r#"[{"city":"Paris","year":2001,"note":null}]"#).unwrap();
        let row = &dataset.rows()[0];

        assert_eq!(cell_label(row, "city"), "Paris");
        assert_eq!(cell_label(row, "year"), "2001");
        assert_eq!(cell_label(row, "note"), BLANK_LABEL);
        assert_eq!(cell_label(row, "missing"), BLANK_LABEL);
    }
}
