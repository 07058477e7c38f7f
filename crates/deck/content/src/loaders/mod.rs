//! Content loaders for reading deck data from files.
//!
//! Loaders parse files into `deck-core` records and hand them to the core's
//! assembly functions; they never price anything themselves.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod tabular;

pub use catalog::{CatalogLoader, CatalogWriter};
pub use config::{ConfigLoader, DeckConfig};
pub use factory::{ContentFactory, Expansion};
pub use tabular::TabularWeaponLoader;

use std::path::Path;

use deck_core::DeckError;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Wraps a core integrity error with the file it came from and its error code.
pub(crate) fn integrity_error<E: DeckError>(path: &Path, error: E) -> anyhow::Error {
    tracing::error!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        "{}: {}",
        path.display(),
        error
    );
    anyhow::anyhow!(
        "Failed to load {}: {} [{}]",
        path.display(),
        error,
        error.error_code()
    )
}
