//! Facet wire objects exchanged with the browsing engine.

mod choice;
mod config;
mod options;
mod query;
mod state;

pub use choice::{Choice, ChoiceId, ChoiceValue};
pub use config::FacetConfig;
pub use options::ListFacetOptions;
pub use query::{FacetQuery, LIST_FACET_TYPE};
pub use state::FacetState;
