//! PostgreSQL artist store implementation
//!
//! Records live in a single `artists` table. Natural order for
//! `find_all` is creation order.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::error::{ArtistError, Result};
use crate::store::traits::ArtistStore;
use crate::store::{check_update, name_for_create};
use crate::types::{Artist, ArtistPayload};

/// PostgreSQL-backed artist store
#[derive(Debug, Clone)]
pub struct PostgresArtistStore {
    pool: PgPool,
}

impl PostgresArtistStore {
    /// Connect to the database and build a pooled store
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(connect_timeout)
            .connect(database_url)
            .await
            .map_err(|e| ArtistError::StorageError(format!("Failed to connect to database: {}", e)))?;

        info!(max_connections, "Connected to PostgreSQL artist store");

        Ok(Self { pool })
    }

    /// Run the migration SQL to create the artists table
    pub async fn run_migrations(&self) -> Result<()> {
        let migration_sql = include_str!("../../../../migrations/001_create_artists.sql");
        sqlx::raw_sql(migration_sql)
            .execute(&self.pool)
            .await
            .map_err(|e| ArtistError::StorageError(format!("Migration failed: {}", e)))?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    fn row_to_artist(row: &PgRow) -> Result<Artist> {
        Ok(Artist {
            id: row.try_get("id").map_err(storage_error)?,
            name: row.try_get("name").map_err(storage_error)?,
        })
    }
}

fn storage_error(e: sqlx::Error) -> ArtistError {
    ArtistError::StorageError(e.to_string())
}

#[async_trait]
impl ArtistStore for PostgresArtistStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Artist>> {
        let rows = sqlx::query("SELECT id, name FROM artists ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        debug!(count = rows.len(), "Fetched artists");
        rows.iter().map(Self::row_to_artist).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> Result<Option<Artist>> {
        let row = sqlx::query("SELECT id, name FROM artists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_artist).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, payload: ArtistPayload) -> Result<Artist> {
        let artist = Artist::new(name_for_create(payload)?);

        let row = sqlx::query("INSERT INTO artists (id, name) VALUES ($1, $2) RETURNING id, name")
            .bind(&artist.id)
            .bind(&artist.name)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        Self::row_to_artist(&row)
    }

    #[instrument(skip(self))]
    async fn find_by_id_and_update(
        &self,
        id: &str,
        payload: ArtistPayload,
    ) -> Result<Option<Artist>> {
        check_update(&payload)?;

        let row = sqlx::query(
            r#"
            UPDATE artists SET
                name = COALESCE($2, name),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name
            "#,
        )
        .bind(id)
        .bind(payload.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        row.as_ref().map(Self::row_to_artist).transpose()
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL artist store closed");
    }
}
