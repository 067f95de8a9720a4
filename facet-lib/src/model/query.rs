use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Choice, FacetConfig};
use crate::error::Result;

/// Type tag written into every list facet query.
pub const LIST_FACET_TYPE: &str = "list";

/// Serialized selection of a list facet, as sent to the browsing engine.
///
/// On the wire this is the facet config's fields, with `type` forced to
/// `"list"`, plus a `selection` array of chosen values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetQuery {
    #[serde(flatten)]
    pub config: FacetConfig,
    #[serde(default)]
    pub selection: Vec<Choice>,
}

impl FacetQuery {
    pub fn kind(&self) -> Option<&str> {
        self.config.kind.as_deref()
    }

    /// Labels of the selected values, in selection order.
    pub fn selected_labels(&self) -> impl Iterator<Item = &str> {
        self.selection.iter().map(|c| c.label())
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
