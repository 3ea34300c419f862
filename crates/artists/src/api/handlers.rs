//! API handlers for artist HTTP endpoints
//!
//! Each handler makes exactly one store call.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::api::models::{ApiError, HealthResponse};
use crate::store::traits::ArtistStore;
use crate::types::{Artist, ArtistPayload};

pub struct ArtistApiState {
    pub store: Arc<dyn ArtistStore>,
    pub started_at: Instant,
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Health check handler
pub async fn health_handler(State(state): State<Arc<ArtistApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "artistd".to_string(),
        store: state.store.name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// GET /artists
pub async fn list_artists(State(state): State<Arc<ArtistApiState>>) -> ApiResult<Vec<Artist>> {
    let artists = state.store.find_all().await?;
    debug!(count = artists.len(), "Listed artists");
    Ok(Json(artists))
}

/// GET /artists/:id
pub async fn get_artist(
    State(state): State<Arc<ArtistApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Artist> {
    match state.store.find_by_id(&id).await? {
        Some(artist) => Ok(Json(artist)),
        None => {
            debug!(%id, "Artist not found");
            Err(ApiError::NotFound)
        }
    }
}

/// POST /artists
pub async fn create_artist(
    State(state): State<Arc<ArtistApiState>>,
    body: Result<Json<ArtistPayload>, JsonRejection>,
) -> ApiResult<Artist> {
    let Json(payload) = body?;
    let artist = state.store.create(payload).await?;
    debug!(id = %artist.id, "Created artist");
    Ok(Json(artist))
}

/// PATCH /artists/:id
pub async fn update_artist(
    State(state): State<Arc<ArtistApiState>>,
    Path(id): Path<String>,
    body: Result<Json<ArtistPayload>, JsonRejection>,
) -> ApiResult<Artist> {
    let Json(payload) = body?;
    state
        .store
        .find_by_id_and_update(&id, payload)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::{create_api_state, create_router};
    use crate::error::{ArtistError, Result};
    use crate::store::memory::InMemoryArtistStore;
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashSet;
    use tower::ServiceExt;

    /// Store whose every call fails, as an unreachable backend would
    struct UnavailableStore;

    #[async_trait]
    impl ArtistStore for UnavailableStore {
        fn name(&self) -> &'static str {
            "unavailable"
        }

        async fn find_all(&self) -> Result<Vec<Artist>> {
            Err(ArtistError::StorageError("connection refused".into()))
        }

        async fn find_by_id(&self, _id: &str) -> Result<Option<Artist>> {
            Err(ArtistError::StorageError("connection refused".into()))
        }

        async fn create(&self, _payload: ArtistPayload) -> Result<Artist> {
            Err(ArtistError::StorageError("connection refused".into()))
        }

        async fn find_by_id_and_update(
            &self,
            _id: &str,
            _payload: ArtistPayload,
        ) -> Result<Option<Artist>> {
            Err(ArtistError::StorageError("connection refused".into()))
        }
    }

    fn router() -> Router {
        create_router(create_api_state(Arc::new(InMemoryArtistStore::new())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                request = request.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_phoenix_lifecycle() {
        let app = router();

        let (status, created) = send(&app, Method::POST, "/artists", Some(json!({"name": "Phoenix"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["name"], "Phoenix");
        let id = created["id"].as_str().unwrap().to_string();
        assert!(!id.is_empty());

        let (status, fetched) = send(&app, Method::GET, &format!("/artists/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &app,
            Method::PATCH,
            &format!("/artists/{}", id),
            Some(json!({"name": "Phoenix (remaster)"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated, json!({"id": id, "name": "Phoenix (remaster)"}));

        let (status, reread) = send(&app, Method::GET, &format!("/artists/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reread, updated);

        let (status, body) = send(&app, Method::GET, "/artists/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Artist not found"}));
    }

    #[tokio::test]
    async fn test_list_returns_every_created_artist() {
        let app = router();

        let (status, body) = send(&app, Method::GET, "/artists", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let mut ids = HashSet::new();
        for name in ["Phoenix", "Radiohead", "Franz Ferdinand"] {
            let (_, created) = send(&app, Method::POST, "/artists", Some(json!({"name": name}))).await;
            ids.insert(created["id"].as_str().unwrap().to_string());
        }

        let (status, body) = send(&app, Method::GET, "/artists", None).await;
        assert_eq!(status, StatusCode::OK);
        let listed: HashSet<String> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_create_drops_unknown_fields() {
        let app = router();

        let (status, created) = send(
            &app,
            Method::POST,
            "/artists",
            Some(json!({"name": "Radiohead", "genre": "rock", "id": "forged"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_ne!(created["id"], "forged");
        assert!(created.get("genre").is_none());
    }

    #[tokio::test]
    async fn test_create_without_name_is_store_failure() {
        let app = router();

        let (status, body) = send(&app, Method::POST, "/artists", Some(json!({}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("name"));
    }

    #[tokio::test]
    async fn test_wrong_typed_name_is_json_500() {
        let app = router();

        let (_, created) = send(&app, Method::POST, "/artists", Some(json!({"name": "Phoenix"}))).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(&app, Method::POST, "/artists", Some(json!({"name": 5}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("invalid type"));

        let (status, body) = send(&app, Method::PATCH, &format!("/artists/{}", id), Some(json!({"name": 5}))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("invalid type"));

        let (_, reread) = send(&app, Method::GET, &format!("/artists/{}", id), None).await;
        assert_eq!(reread, created);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_json_500() {
        let app = router();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/artists")
            .body(Body::from(r#"{"name":"Phoenix"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("Content-Type"));

        let (_, listed) = send(&app, Method::GET, "/artists", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let app = router();

        let (status, body) = send(
            &app,
            Method::PATCH,
            "/artists/does-not-exist",
            Some(json!({"name": "X"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Artist not found"}));
    }

    #[tokio::test]
    async fn test_empty_patch_keeps_record() {
        let app = router();

        let (_, created) = send(&app, Method::POST, "/artists", Some(json!({"name": "Phoenix"}))).await;
        let id = created["id"].as_str().unwrap();

        let (status, body) = send(&app, Method::PATCH, &format!("/artists/{}", id), Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, created);
    }

    #[tokio::test]
    async fn test_store_failures_map_to_500() {
        let app = create_router(create_api_state(Arc::new(UnavailableStore)));

        let cases = [
            (Method::GET, "/artists", None),
            (Method::GET, "/artists/abc", None),
            (Method::POST, "/artists", Some(json!({"name": "Phoenix"}))),
            (Method::PATCH, "/artists/abc", Some(json!({"name": "Phoenix"}))),
        ];

        for (method, uri, body) in cases {
            let (status, body) = send(&app, method.clone(), uri, body).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
            assert_eq!(body["error"], "Storage error: connection refused");
        }
    }

    #[tokio::test]
    async fn test_health_reports_store() {
        let app = router();

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
    }
}
