//! ArtistStore trait definition

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Artist, ArtistPayload};

/// ArtistStore trait - the document collection holding artist records
///
/// Implementations are constructed explicitly at startup and shared with
/// the HTTP handlers as `Arc<dyn ArtistStore>`. Every handler issues
/// exactly one call on this trait per request.
#[async_trait]
pub trait ArtistStore: Send + Sync {
    /// Backend name used in logs and health output
    fn name(&self) -> &'static str;

    /// All records in the store's natural order
    async fn find_all(&self) -> Result<Vec<Artist>>;

    /// Look up a record by identifier
    ///
    /// # Returns
    /// The record if found, None otherwise
    async fn find_by_id(&self, id: &str) -> Result<Option<Artist>>;

    /// Persist a new record and assign its identifier
    ///
    /// # Errors
    /// `MissingField("name")` when the payload carries no usable name
    async fn create(&self, payload: ArtistPayload) -> Result<Artist>;

    /// Merge `payload` into the record with `id`
    ///
    /// Only fields present in the payload change. Returns the record as it
    /// stands after the update, or None when no record has that id.
    async fn find_by_id_and_update(&self, id: &str, payload: ArtistPayload)
        -> Result<Option<Artist>>;

    /// Release backend resources. Called once on shutdown.
    async fn close(&self) {}
}
