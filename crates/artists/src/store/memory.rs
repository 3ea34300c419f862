//! In-memory artist store implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::Result;
use crate::store::traits::ArtistStore;
use crate::store::{check_update, name_for_create};
use crate::types::{Artist, ArtistPayload};

#[derive(Default)]
struct Collection {
    records: HashMap<String, Artist>,
    // insertion order, which is the natural order reported by find_all
    order: Vec<String>,
}

/// In-memory artist store for testing and development
#[derive(Default)]
pub struct InMemoryArtistStore {
    inner: RwLock<Collection>,
}

impl InMemoryArtistStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    pub fn len(&self) -> usize {
        self.inner.read().order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ArtistStore for InMemoryArtistStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn find_all(&self) -> Result<Vec<Artist>> {
        let inner = self.inner.read();
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Artist>> {
        Ok(self.inner.read().records.get(id).cloned())
    }

    async fn create(&self, payload: ArtistPayload) -> Result<Artist> {
        let artist = Artist::new(name_for_create(payload)?);

        let mut inner = self.inner.write();
        inner.order.push(artist.id.clone());
        inner.records.insert(artist.id.clone(), artist.clone());

        Ok(artist)
    }

    async fn find_by_id_and_update(
        &self,
        id: &str,
        payload: ArtistPayload,
    ) -> Result<Option<Artist>> {
        check_update(&payload)?;

        let mut inner = self.inner.write();
        Ok(inner.records.get_mut(id).map(|artist| {
            artist.merge(payload);
            artist.clone()
        }))
    }
}
