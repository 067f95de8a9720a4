//! Facet choices

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable identifier of a choice within one [`FacetState`](super::FacetState).
///
/// This is the position of the choice in the state's `choices` list. Ids are
/// only handed out by a state and are only meaningful against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceId(usize);

impl ChoiceId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The value a choice stands for.
///
/// Only the label is interpreted; any other keys the server sends are kept
/// so that a copy sent back is faithful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceValue {
    #[serde(rename = "l", alias = "label")]
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChoiceValue {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            extra: Map::new(),
        }
    }
}

/// One selectable value of a facet with its row count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(rename = "v", alias = "value")]
    pub value: ChoiceValue,
    #[serde(rename = "c", alias = "count", default)]
    pub count: u64,
    #[serde(rename = "s", alias = "selected", default)]
    pub selected: bool,
}

impl Choice {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            value: ChoiceValue::new(label),
            count,
            selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn label(&self) -> &str {
        &self.value.label
    }
}
