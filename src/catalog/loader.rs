use std::thread::JoinHandle;

use tracing::warn;

use super::{Catalog, CatalogSource};
use crate::error::CatalogError;

/// Result of one catalog fetch.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Catalog),
    Failed {
        source: CatalogSource,
        error: CatalogError,
    },
}

impl LoadOutcome {
    pub fn fetch(source: &CatalogSource) -> Self {
        match Catalog::try_load(source) {
            Ok(catalog) => LoadOutcome::Loaded(catalog),
            Err(error) => LoadOutcome::Failed {
                source: source.clone(),
                error,
            },
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }

    /// A failed load collapses to the empty catalog.
    pub fn into_catalog(self) -> Catalog {
        match self {
            LoadOutcome::Loaded(catalog) => catalog,
            LoadOutcome::Failed { source, error } => {
                warn!(%source, %error, "catalog load failed");
                Catalog::new()
            }
        }
    }
}

/// Fetches the catalog on a background thread and hands the outcome to
/// `on_done` exactly once.
pub fn spawn_load<F>(source: CatalogSource, on_done: F) -> JoinHandle<()>
where
    F: FnOnce(LoadOutcome) + Send + 'static,
{
    std::thread::spawn(move || {
        let outcome = LoadOutcome::fetch(&source);
        on_done(outcome);
    })
}
