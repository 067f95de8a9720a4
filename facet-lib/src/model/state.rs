use serde::{Deserialize, Serialize};

use super::{Choice, ChoiceId};
use crate::error::Result;

/// Choice data computed by the server for one facet.
///
/// The `selected` flags here are authoritative: a widget receiving a new
/// state rebuilds its selection from them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetState {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl FacetState {
    pub fn new(choices: Vec<Choice>) -> Self {
        Self { choices }
    }

    pub fn get(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.get(id.index())
    }

    /// Choices paired with their ids, in server order.
    pub fn iter(&self) -> impl Iterator<Item = (ChoiceId, &Choice)> {
        self.choices
            .iter()
            .enumerate()
            .map(|(i, c)| (ChoiceId::new(i), c))
    }

    /// Id of the first choice with the given label.
    pub fn id_of(&self, label: &str) -> Option<ChoiceId> {
        self.iter().find(|(_, c)| c.label() == label).map(|(id, _)| id)
    }

    pub fn contains(&self, id: ChoiceId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of flagged choices, in server order.
    pub fn selected_ids(&self) -> impl Iterator<Item = ChoiceId> + '_ {
        self.iter().filter(|(_, c)| c.selected).map(|(id, _)| id)
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
