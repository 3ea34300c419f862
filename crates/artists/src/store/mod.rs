//! Store module exports

pub mod traits;
pub mod memory;

#[cfg(feature = "postgres")]
pub mod postgres;

use crate::error::ArtistError;
use crate::types::ArtistPayload;

/// Extract the name a new record must carry.
pub(crate) fn name_for_create(payload: ArtistPayload) -> Result<String, ArtistError> {
    match payload.name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ArtistError::MissingField("name")),
    }
}

/// Reject updates that would blank out the name.
pub(crate) fn check_update(payload: &ArtistPayload) -> Result<(), ArtistError> {
    match payload.name {
        Some(ref name) if name.trim().is_empty() => Err(ArtistError::InvalidField {
            field: "name",
            message: "must not be empty".to_string(),
        }),
        _ => Ok(()),
    }
}
