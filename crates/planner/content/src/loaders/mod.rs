//! Content loaders for reading catalog data from files.
//!
//! Loaders convert RON files into the in-memory catalog structures that
//! back the lookup oracle.

pub mod dictionary;
pub mod factory;
pub mod items;
pub mod motes;

pub use dictionary::DictionaryLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use motes::MoteLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
