//! In-memory browsing engine.
//!
//! Stands in for the server: it reads every facet's query, filters the
//! dataset, and pushes recomputed choice counts back into the facets.

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use facet_lib::{BrowsingEngine, Choice, FacetQuery, FacetState, ListFacet};
use log::debug;

use crate::dataset::{cell_label, Dataset, Row};

pub struct Engine {
    dataset: Rc<Dataset>,
    pending: Cell<bool>,
}

impl Engine {
    pub fn new(dataset: Rc<Dataset>) -> Self {
        Self {
            dataset,
            pending: Cell::new(false),
        }
    }

    /// Whether an update was requested since the last call.
    pub fn take_pending(&self) -> bool {
        self.pending.replace(false)
    }

    /// Recompute every facet's choices from the current selections.
    ///
    /// Each facet counts the rows that pass all *other* facets, so its own
    /// selection never hides its alternatives.
    pub fn refresh(&self, facets: &mut [ListFacet]) {
        let queries: Vec<FacetQuery> = facets.iter().map(ListFacet::get_json).collect();

        for (i, facet) in facets.iter_mut().enumerate() {
            let others: Vec<&FacetQuery> = queries
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, q)| q)
                .collect();
            let state = self.compute_state(&queries[i], &others);
            facet.update_state(state);
        }
        debug!("refreshed {} facets", facets.len());
    }

    /// Rows passing every query.
    pub fn matching_rows<'a>(&'a self, queries: &[FacetQuery]) -> Vec<&'a Row> {
        let queries: Vec<&FacetQuery> = queries.iter().collect();
        self.dataset
            .rows()
            .iter()
            .filter(|row| matches_all(row, &queries))
            .collect()
    }

    fn compute_state(&self, query: &FacetQuery, others: &[&FacetQuery]) -> FacetState {
        let column = column_of(query);
        let selected: BTreeSet<&str> = query.selected_labels().collect();

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for row in self.dataset.rows() {
            if matches_all(row, others) {
                *counts.entry(cell_label(row, column)).or_default() += 1;
            }
        }
        // Selected values stay visible even when other facets filter them out.
        for label in &selected {
            counts.entry((*label).to_string()).or_default();
        }

        FacetState::new(
            counts
                .into_iter()
                .map(|(label, count)| {
                    let is_selected = selected.contains(label.as_str());
                    Choice::new(label, count).with_selected(is_selected)
                })
                .collect(),
        )
    }
}

impl BrowsingEngine for Engine {
    fn update(&self) {
        self.pending.set(true);
    }
}

fn column_of(query: &FacetQuery) -> &str {
    query
        .config
        .column_name
        .as_deref()
        .unwrap_or(&query.config.name)
}

fn matches_all(row: &Row, queries: &[&FacetQuery]) -> bool {
    queries.iter().all(|query| {
        if query.selection.is_empty() {
            return true;
        }
        let label = cell_label(row, column_of(query));
        query.selected_labels().any(|l| l == label)
    })
}

#[cfg(test)]
mod tests {
    use facet_lib::{ChoiceId, Collaborators, FacetConfig, ListFacetOptions};
    use facetdom::Container;

    use super::*;

    fn dataset() -> Rc<Dataset> {
        Rc::new(
            Dataset::from_json_str(
                r#"[
                    {"city":"Paris","year":2001},
                    {"city":"Paris","year":2002},
                    {"city":"Rome","year":2001},
                    {"city":"Oslo","year":2003}
                ]"#,
            )
            .unwrap(),
        )
    }

    fn facets() -> Vec<ListFacet> {
        ["city", "year"]
            .into_iter()
            .map(|column| {
                ListFacet::new(
                    Container::new(column),
                    FacetConfig::for_column(column),
                    ListFacetOptions::default(),
                    Collaborators::detached(),
                )
            })
            .collect()
    }

    fn id_of(facet: &ListFacet, label: &str) -> ChoiceId {
        facet.state().and_then(|s| s.id_of(label)).unwrap()
    }

    fn counts(facet: &ListFacet) -> Vec<(String, u64, bool)> {
        facet
            .state()
            .unwrap()
            .choices
            .iter()
            .map(|c| (c.label().to_string(), c.count, c.selected))
            .collect()
    }

    #[test]
    fn test_initial_refresh_counts_everything() {
        let engine = Engine::new(dataset());
        let mut facets = facets();

        engine.refresh(&mut facets);

        assert_eq!(
            counts(&facets[0]),
            vec![
                ("Oslo".to_string(), 1, false),
                ("Paris".to_string(), 2, false),
                ("Rome".to_string(), 1, false),
            ]
        );
    }

    #[test]
    fn test_selection_filters_other_facets_only() {
        let engine = Engine::new(dataset());
        let mut facets = facets();
        engine.refresh(&mut facets);

        let paris = id_of(&facets[0], "Paris");
        facets[0].select(paris, false);
        engine.refresh(&mut facets);

        assert_eq!(facets[0].selected_choices()[0].label(), "Paris");
        assert_eq!(counts(&facets[0]).len(), 3);
        assert_eq!(
            counts(&facets[1]),
            vec![("2001".to_string(), 1, false), ("2002".to_string(), 1, false)]
        );

        let queries: Vec<FacetQuery> = facets.iter().map(ListFacet::get_json).collect();
        assert_eq!(engine.matching_rows(&queries).len(), 2);
    }

    #[test]
    fn test_selected_value_kept_with_zero_count() {
        let engine = Engine::new(dataset());
        let mut facets = facets();
        engine.refresh(&mut facets);

        // Oslo only appears in 2003.
        let oslo = id_of(&facets[0], "Oslo");
        facets[0].select(oslo, true);
        engine.refresh(&mut facets);
        let year_2003 = id_of(&facets[1], "2003");
        facets[1].select(year_2003, true);
        facets[0].reset();
        let paris = id_of(&facets[0], "Paris");
        facets[0].select(paris, true);
        engine.refresh(&mut facets);

        assert_eq!(
            counts(&facets[1]),
            vec![
                ("2001".to_string(), 1, false),
                ("2002".to_string(), 1, false),
                ("2003".to_string(), 0, true),
            ]
        );
    }

    #[test]
    fn test_update_marks_pending() {
        let engine = Engine::new(dataset());

        assert!(!engine.take_pending());
        engine.update();
        assert!(engine.take_pending());
        assert!(!engine.take_pending());
    }
}
