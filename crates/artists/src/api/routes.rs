//! API routes for the artist resource

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Instant;

use crate::api::handlers::*;
use crate::store::traits::ArtistStore;

/// Create the artist router
pub fn create_router(state: Arc<ArtistApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/:id", get(get_artist).patch(update_artist))
        .with_state(state)
}

/// Build the shared API state around an explicitly constructed store
pub fn create_api_state(store: Arc<dyn ArtistStore>) -> Arc<ArtistApiState> {
    Arc::new(ArtistApiState {
        store,
        started_at: Instant::now(),
    })
}
