use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Presentation options for a [`ListFacet`](crate::ListFacet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListFacetOptions {
    /// Number of choice rows visible at once. `None` shows every row.
    pub body_height: Option<u16>,
}

impl ListFacetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_height(mut self, rows: u16) -> Self {
        self.body_height = Some(rows);
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
