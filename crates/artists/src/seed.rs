//! Default catalog seeding

use tracing::info;

use crate::error::Result;
use crate::store::traits::ArtistStore;
use crate::types::{Artist, ArtistPayload};

/// Artists inserted by `seed_artists`
pub const DEFAULT_ARTISTS: [&str; 3] = ["Phoenix", "Radiohead", "Franz Ferdinand"];

/// Insert the default catalog, one `create` per record.
///
/// Existing records are left alone, so seeding twice yields duplicates
/// with distinct ids.
pub async fn seed_artists(store: &dyn ArtistStore) -> Result<Vec<Artist>> {
    let mut created = Vec::with_capacity(DEFAULT_ARTISTS.len());
    for name in DEFAULT_ARTISTS {
        created.push(store.create(ArtistPayload::with_name(name)).await?);
    }

    info!(count = created.len(), store = store.name(), "Seeded artists");
    Ok(created)
}
