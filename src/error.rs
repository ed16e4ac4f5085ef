use std::path::PathBuf;

use thiserror::Error;

/// Reasons a catalog source could not be turned into songs.
///
/// These never reach the UI: [`crate::catalog::Catalog::load`] logs them and
/// falls back to an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog {url}: {reason}")]
    Http { url: String, reason: String },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
