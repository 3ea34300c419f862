//! Artist record and request payloads

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single artist document.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

impl Artist {
    /// Build a new record with a freshly generated identifier
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Apply a partial update. Fields absent from the payload keep their value.
    pub fn merge(&mut self, payload: ArtistPayload) {
        if let Some(name) = payload.name {
            self.name = name;
        }
    }
}

/// Persisted fields accepted from clients.
///
/// Any other field in a request body is dropped during deserialization,
/// so only `name` ever reaches a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistPayload {
    #[serde(default)]
    pub name: Option<String>,
}

impl ArtistPayload {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
