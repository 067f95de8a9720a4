//! The list facet view.

mod render;

pub use render::{
    BODY_CLASS, CHOICE_CLASS, CHOICE_COUNT_CLASS, CHOICE_LABEL_CLASS, CHOICE_LINK_CLASS,
    CHOICE_SELECTED_CLASS, LOADING_TEXT, TITLE_CLASS,
};

use facetdom::{Container, Event};
use log::{debug, trace, warn};

use crate::collaborators::Collaborators;
use crate::model::{Choice, ChoiceId, FacetConfig, FacetQuery, FacetState, LIST_FACET_TYPE, ListFacetOptions};
use crate::selection::{FacetAction, Selection};

use render::{Handlers, View};

/// A facet listing distinct values with counts.
///
/// The widget renders into the [`Container`] it was given. It never
/// re-renders after a click: selection changes are reported to the
/// collaborators, and the view catches up when the browsing engine delivers
/// fresh data through [`update_state`](Self::update_state).
#[derive(Debug)]
pub struct ListFacet {
    container: Container,
    config: FacetConfig,
    options: ListFacetOptions,
    selection: Selection,
    state: Option<FacetState>,
    handlers: Handlers,
    collaborators: Collaborators,
}

impl ListFacet {
    /// Create the widget and render its loading placeholder.
    pub fn new(
        container: Container,
        config: FacetConfig,
        options: ListFacetOptions,
        collaborators: Collaborators,
    ) -> Self {
        let mut facet = Self {
            container,
            config,
            options,
            selection: Selection::new(),
            state: None,
            handlers: Handlers::new(),
            collaborators,
        };
        facet.render();
        facet
    }

    /// Serialize the current selection as a list facet query.
    pub fn get_json(&self) -> FacetQuery {
        let mut config = self.config.clone();
        config.kind = Some(LIST_FACET_TYPE.to_string());
        config.extra.remove("selection");

        let selection = self
            .selected_choices()
            .into_iter()
            .map(|choice| Choice {
                selected: true,
                ..choice.clone()
            })
            .collect();

        FacetQuery { config, selection }
    }

    /// Replace the choice data and rebuild the selection from its flags.
    pub fn update_state(&mut self, state: FacetState) {
        self.selection = Selection::from_state(&state);
        debug!(
            "facet {}: {} choices, {} selected",
            self.config.name,
            state.len(),
            self.selection.len()
        );
        self.state = Some(state);
        self.render();
    }

    /// Rebuild the container from the current state.
    pub fn render(&mut self) {
        trace!("rendering facet {}", self.config.name);
        self.handlers = render::render(
            &mut self.container,
            View {
                config: &self.config,
                options: &self.options,
                selection: &self.selection,
                state: self.state.as_ref(),
            },
        );
    }

    pub fn select(&mut self, id: ChoiceId, exclusive: bool) {
        self.perform(if exclusive {
            FacetAction::SelectOnly(id)
        } else {
            FacetAction::Select(id)
        });
    }

    pub fn deselect(&mut self, id: ChoiceId) {
        self.perform(FacetAction::Deselect(id));
    }

    pub fn reset(&mut self) {
        self.perform(FacetAction::Reset);
    }

    /// Apply an action to the selection and notify the collaborators.
    ///
    /// Actions naming a choice the loaded state does not have are dropped
    /// without notifying, so the selection stays a subset of the state.
    /// Returns whether the action was applied.
    pub fn perform(&mut self, action: FacetAction) -> bool {
        if let Some(id) = action.choice() {
            let known = self.state.as_ref().is_some_and(|s| s.contains(id));
            if !known {
                warn!("facet {}: ignoring {action:?}, no such choice", self.config.name);
                return false;
            }
        }
        debug!("facet {}: {action:?}", self.config.name);
        self.selection.apply(action);
        self.collaborators.notify();
        true
    }

    /// Activate the clickable element with the given id.
    /// Returns false if the id has no action in the current render.
    pub fn click(&mut self, element_id: &str) -> bool {
        let Some(&action) = self.handlers.get(element_id) else {
            trace!("facet {}: no handler for {element_id}", self.config.name);
            return false;
        };
        self.perform(action)
    }

    /// Route an event targeted at this facet's elements.
    /// Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Click {
                target: Some(target),
            } => self.click(target),
            Event::Scroll {
                target: Some(target),
                delta_y,
            } => self.container.scroll_by(target, *delta_y),
            _ => false,
        }
    }

    /// Action bound to an element in the current render.
    pub fn action_for(&self, element_id: &str) -> Option<FacetAction> {
        self.handlers.get(element_id).copied()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected choices in selection order.
    pub fn selected_choices(&self) -> Vec<&Choice> {
        let Some(state) = &self.state else {
            return Vec::new();
        };
        self.selection
            .ids()
            .iter()
            .filter_map(|&id| state.get(id))
            .collect()
    }

    pub fn state(&self) -> Option<&FacetState> {
        self.state.as_ref()
    }

    pub fn config(&self) -> &FacetConfig {
        &self.config
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    /// Id of the element holding the choice rows.
    pub fn body_id(&self) -> String {
        format!("{}-body", self.container.id())
    }
}
