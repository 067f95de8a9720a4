//! Selection state machine and per-choice click policy.
//!
//! Nothing here knows about rendering: the widget asks [`choice_policy`]
//! which actions to attach to a row and feeds clicked actions back into
//! [`Selection::apply`].

use crate::model::{ChoiceId, FacetState};

/// Ordered list of chosen values, in the order they were chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ChoiceId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the `selected` flags of a freshly received state.
    pub fn from_state(state: &FacetState) -> Self {
        Self {
            ids: state.selected_ids().collect(),
        }
    }

    /// Append `id`, clearing everything else first when `exclusive`.
    ///
    /// Appending an id that is already present duplicates it; the click
    /// policy never offers a plain select on a selected choice.
    pub fn select(&mut self, id: ChoiceId, exclusive: bool) {
        if exclusive {
            self.ids.clear();
        }
        self.ids.push(id);
    }

    /// Remove the last occurrence of `id`. Returns false if it was absent.
    pub fn deselect(&mut self, id: ChoiceId) -> bool {
        match self.ids.iter().rposition(|&s| s == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.ids.clear();
    }

    pub fn apply(&mut self, action: FacetAction) {
        match action {
            FacetAction::Select(id) => self.select(id, false),
            FacetAction::SelectOnly(id) => self.select(id, true),
            FacetAction::Deselect(id) => {
                self.deselect(id);
            }
            FacetAction::Reset => self.reset(),
        }
    }

    pub fn ids(&self) -> &[ChoiceId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A user intent attached to a clickable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetAction {
    /// Add the choice to the selection.
    Select(ChoiceId),
    /// Make the choice the only selected one.
    SelectOnly(ChoiceId),
    /// Remove the choice from the selection.
    Deselect(ChoiceId),
    /// Clear the selection.
    Reset,
}

impl FacetAction {
    /// The choice this action targets; `None` for [`FacetAction::Reset`].
    pub fn choice(self) -> Option<ChoiceId> {
        match self {
            Self::Select(id) | Self::SelectOnly(id) | Self::Deselect(id) => Some(id),
            Self::Reset => None,
        }
    }
}

/// The extra link shown next to a choice label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondaryLink {
    /// Shown before a selected choice.
    Remove,
    /// Shown after an unselected choice while something else is selected.
    Include,
}

impl SecondaryLink {
    pub fn label(self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Include => "include",
        }
    }
}

/// Actions attached to one rendered choice row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoicePolicy {
    /// Bound to the label itself.
    pub primary: FacetAction,
    pub secondary: Option<(SecondaryLink, FacetAction)>,
}

/// Decide what clicking a choice does.
///
/// `selected` is the choice's own flag from the server state, and
/// `selection_count` is the size of the whole current selection.
pub fn choice_policy(id: ChoiceId, selected: bool, selection_count: usize) -> ChoicePolicy {
    if selected {
        let primary = if selection_count > 1 {
            FacetAction::SelectOnly(id)
        } else {
            FacetAction::Deselect(id)
        };
        ChoicePolicy {
            primary,
            secondary: Some((SecondaryLink::Remove, FacetAction::Deselect(id))),
        }
    } else if selection_count > 0 {
        ChoicePolicy {
            primary: FacetAction::SelectOnly(id),
            secondary: Some((SecondaryLink::Include, FacetAction::Select(id))),
        }
    } else {
        // Same effect as select-only here, nothing else is selected.
        ChoicePolicy {
            primary: FacetAction::Select(id),
            secondary: None,
        }
    }
}
