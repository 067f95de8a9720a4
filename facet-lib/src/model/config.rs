//! Facet configuration

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Caller-owned definition of a facet.
///
/// `name` is shown as the facet title. Everything else is opaque to the
/// widget and travels back to the engine untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetConfig {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Dataset column the facet groups by.
    #[serde(rename = "columnName", default, skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FacetConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
            column_name: None,
            extra: Map::new(),
        }
    }

    /// Config for a facet over one column, titled with the column name.
    pub fn for_column(column: impl Into<String>) -> Self {
        let column = column.into();
        Self {
            column_name: Some(column.clone()),
            ..Self::new(column)
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
