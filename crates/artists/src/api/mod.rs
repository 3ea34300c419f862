//! HTTP API for the artist resource

pub mod handlers;
pub mod models;
pub mod routes;

pub use handlers::ArtistApiState;
pub use models::{ApiError, ErrorResponse, HealthResponse};
pub use routes::{create_api_state, create_router};
