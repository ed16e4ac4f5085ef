//! Songbook: faceted browsing over a fixed song catalog.
//!
//! The query engine lives in [`catalog`], [`facet`] and [`query`]; [`app`]
//! owns the mutable selection and recomputes every derived view from it, and
//! [`ui`] renders that state in a terminal.
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod event;
pub mod facet;
pub mod query;
pub mod ui;

pub use app::state::SelectionState;
pub use app::{App, AppAction};
pub use catalog::song::Song;
pub use catalog::{Catalog, CatalogSource};
pub use error::CatalogError;
pub use facet::{Facet, FacetCount, FacetIndex};
pub use query::sort::SortKey;
