//! Artist resource for the catalog service
//!
//! This crate owns the Artist record, the store abstraction that persists
//! it, and the HTTP handlers that expose it.
//!
//! # Features
//!
//! - List, get, create and partially update artists
//! - In-memory store for development and tests
//! - PostgreSQL store behind the `postgres` feature
//! - Default catalog seeding
//!
//! # Feature Flags
//!
//! - `postgres` - Enable PostgreSQL storage
//! - `api` - Enable HTTP API (on by default)

pub mod types;
pub mod error;
pub mod store;
pub mod seed;

#[cfg(feature = "api")]
pub mod api;

// Re-export commonly used types
pub use types::{Artist, ArtistPayload};
pub use error::{ArtistError, Result};
pub use seed::{seed_artists, DEFAULT_ARTISTS};

// Store exports
pub use store::traits::ArtistStore;
pub use store::memory::InMemoryArtistStore;

#[cfg(feature = "postgres")]
pub use store::postgres::PostgresArtistStore;
