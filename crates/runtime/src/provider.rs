//! Asynchronous abstraction for sourcing item and mote records.
//!
//! Runtime users plug in [`ContentProvider`] implementations so imports
//! can resolve identifiers against the live content API, a bundled
//! catalog, or testing fixtures. Transport, authentication, and retries
//! are the implementation's concern; the rehydrator only ever sees
//! "record or miss".

use async_trait::async_trait;
use planner_content::ContentCatalog;
use planner_core::{ContentOracle, ItemCategory, ItemRecord, Mote, MoteId};

use crate::error::ProviderError;

/// Trait for resolving catalog identifiers to full records.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Resolve a map-id within a category.
    ///
    /// `Ok(None)` is an ordinary miss; `Err` is a transport failure the
    /// caller may log but must otherwise treat the same way.
    async fn fetch_item(
        &self,
        map_id: &str,
        category: ItemCategory,
    ) -> Result<Option<ItemRecord>, ProviderError>;

    /// Resolve a mote id.
    async fn fetch_mote(&self, id: &MoteId) -> Result<Option<Mote>, ProviderError>;
}

/// Provider backed by an in-memory [`ContentCatalog`].
///
/// The bundled-data path: no transport, so lookups never fail, they only
/// miss.
pub struct CatalogProvider {
    catalog: ContentCatalog,
}

impl CatalogProvider {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }
}

#[async_trait]
impl ContentProvider for CatalogProvider {
    async fn fetch_item(
        &self,
        map_id: &str,
        category: ItemCategory,
    ) -> Result<Option<ItemRecord>, ProviderError> {
        Ok(self.catalog.item(map_id, category))
    }

    async fn fetch_mote(&self, id: &MoteId) -> Result<Option<Mote>, ProviderError> {
        Ok(self.catalog.mote(id))
    }
}
