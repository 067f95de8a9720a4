//! Builds the facet's element tree.

use std::collections::HashMap;

use facetdom::{scroll, Color, Container, Element, Overflow, Style};

use crate::model::{FacetConfig, FacetState, ListFacetOptions};
use crate::selection::{choice_policy, FacetAction, SecondaryLink, Selection};

pub const TITLE_CLASS: &str = "facet-title";
pub const BODY_CLASS: &str = "facet-body";
pub const CHOICE_CLASS: &str = "facet-choice";
pub const CHOICE_SELECTED_CLASS: &str = "facet-choice-selected";
pub const CHOICE_LABEL_CLASS: &str = "facet-choice-label";
pub const CHOICE_COUNT_CLASS: &str = "facet-choice-count";
pub const CHOICE_LINK_CLASS: &str = "facet-choice-link";

pub const LOADING_TEXT: &str = "Loading...";

/// Element id → action, for every clickable element of one render.
pub(super) type Handlers = HashMap<String, FacetAction>;

pub(super) struct View<'a> {
    pub config: &'a FacetConfig,
    pub options: &'a ListFacetOptions,
    pub selection: &'a Selection,
    pub state: Option<&'a FacetState>,
}

/// Rebuild `container` from scratch and return the new handler table.
pub(super) fn render(container: &mut Container, view: View<'_>) -> Handlers {
    let scroll_top = previous_scroll_top(container);
    container.empty();

    let prefix = container.id().to_string();
    let mut handlers = Handlers::new();

    let mut title = Element::row()
        .id(format!("{prefix}-title"))
        .class(TITLE_CLASS)
        .child(
            Element::text(view.config.name.clone())
                .id(format!("{prefix}-name"))
                .style(Style::new().bold()),
        );

    if !view.selection.is_empty() {
        let id = format!("{prefix}-reset");
        title = title.prepend(link("reset", &id));
        handlers.insert(id, FacetAction::Reset);
    }

    let mut body = Element::col().id(format!("{prefix}-body")).class(BODY_CLASS);

    let Some(state) = view.state else {
        body.push_child(
            Element::text(LOADING_TEXT)
                .id(format!("{prefix}-loading"))
                .style(Style::new().dim()),
        );
        container.append(title).append(body);
        return handlers;
    };

    if let Some(rows) = view.options.body_height {
        body = body.max_height(rows).overflow_y(Overflow::Scroll);
    }

    let selection_count = view.selection.len();
    for (id, choice) in state.iter() {
        let row_id = format!("{prefix}-choice-{id}");
        let policy = choice_policy(id, choice.selected, selection_count);

        let label_id = format!("{row_id}-label");
        let label = Element::link(choice.label())
            .id(&label_id)
            .class(CHOICE_LABEL_CLASS);
        handlers.insert(label_id, policy.primary);

        let count = Element::text(choice.count.to_string())
            .id(format!("{row_id}-count"))
            .class(CHOICE_COUNT_CLASS)
            .style(Style::new().dim().foreground(Color::var("muted")));

        let mut row = Element::row()
            .class(CHOICE_CLASS)
            .data("choice", id.to_string())
            .child(label)
            .child(count);
        if choice.selected {
            row = row.class(CHOICE_SELECTED_CLASS).style(Style::new().bold());
        }

        if let Some((kind, action)) = policy.secondary {
            let secondary_id = match kind {
                SecondaryLink::Remove => format!("{row_id}-remove"),
                SecondaryLink::Include => format!("{row_id}-include"),
            };
            let secondary = link(kind.label(), &secondary_id);
            handlers.insert(secondary_id, action);
            row = match kind {
                SecondaryLink::Remove => row.prepend(secondary),
                SecondaryLink::Include => row.child(secondary),
            };
        }

        body.push_child(row.id(row_id));
    }

    scroll::set_scroll_y(&mut body, scroll_top);
    container.append(title).append(body);
    handlers
}

/// Vertical offset of the current body, or 0 if there is none yet.
fn previous_scroll_top(container: &Container) -> u16 {
    container
        .child(1)
        .filter(|body| body.has_class(BODY_CLASS))
        .map(|body| body.scroll_offset.1)
        .unwrap_or(0)
}

fn link(text: &str, id: &str) -> Element {
    Element::link(text)
        .id(id)
        .class(CHOICE_LINK_CLASS)
        .style(Style::new().underline().foreground(Color::var("link")))
}
