//! List facet widget
//!
//! A faceted-filter view that shows the distinct values of a dataset
//! dimension with their counts, lets the user pick values to filter on, and
//! serializes the picked values into a query for the browsing engine.

pub mod collaborators;
pub mod error;
pub mod model;
pub mod selection;
pub mod widget;

pub use collaborators::{BrowsingEngine, Collaborators, DataTableView};
pub use error::FacetError;
pub use model::{Choice, ChoiceId, ChoiceValue, FacetConfig, FacetQuery, FacetState, ListFacetOptions};
pub use selection::{ChoicePolicy, FacetAction, SecondaryLink, Selection};
pub use widget::ListFacet;
