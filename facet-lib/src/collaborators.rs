//! Page-level services a facet notifies after its selection changes.

use std::rc::Rc;

use log::trace;

/// Recomputes all facets and results against the current selections.
///
/// Implementations are expected to collect every facet's query, refresh the
/// choice data and hand it back through
/// [`ListFacet::update_state`](crate::ListFacet::update_state), typically
/// some time after `update` returns.
pub trait BrowsingEngine {
    fn update(&self);
}

/// The results table shown next to the facets.
pub trait DataTableView {
    fn update(&self, force_refresh: bool);
}

/// Handles to the collaborators a facet notifies.
#[derive(Clone)]
pub struct Collaborators {
    engine: Rc<dyn BrowsingEngine>,
    table: Rc<dyn DataTableView>,
}

impl Collaborators {
    pub fn new(engine: Rc<dyn BrowsingEngine>, table: Rc<dyn DataTableView>) -> Self {
        Self { engine, table }
    }

    /// Collaborators that ignore every notification.
    pub fn detached() -> Self {
        let detached = Rc::new(Detached);
        Self {
            engine: detached.clone(),
            table: detached,
        }
    }

    /// Tell the engine to recompute, then ask the table for a full refresh.
    pub fn notify(&self) {
        trace!("notifying browsing engine and data table view");
        self.engine.update();
        self.table.update(true);
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

struct Detached;

impl BrowsingEngine for Detached {
    fn update(&self) {}
}

impl DataTableView for Detached {
    fn update(&self, _force_refresh: bool) {}
}
