//! Album CRUD endpoints
//!
//! Request bodies are read as raw bytes and parsed here, so a malformed
//! body (or a missing `Content-Type`) maps to this API's own 400 shapes
//! instead of axum's default rejections.

use album_common::{api::MessageResponse, Album};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info, warn};

use super::{CompactJson, PrettyJson};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /albums
///
/// Full collection in current order.
pub async fn list_albums(State(state): State<AppState>) -> PrettyJson<Vec<Album>> {
    let albums = state.store.list().await;
    debug!("Listing {} albums", albums.len());
    PrettyJson(albums)
}

/// GET /albums/:id
pub async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PrettyJson<Album>> {
    match state.store.get(&id).await {
        Some(album) => Ok(PrettyJson(album)),
        None => {
            debug!("Album {:?} not found", id);
            Err(ApiError::NotFound(id))
        }
    }
}

/// POST /albums
///
/// Appends the album without checking id uniqueness.
pub async fn create_album(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, PrettyJson<Album>)> {
    let album = Album::from_json(&body).map_err(|e| {
        warn!("Rejected album create: {}", e);
        ApiError::MalformedBody(e.to_string())
    })?;

    let album = state.store.insert(album).await;
    info!("Created album {:?} ({})", album.id, album.title);

    Ok((StatusCode::CREATED, PrettyJson(album)))
}

/// PUT /albums/:id
///
/// Replaces the whole record, including its id, with the request body.
/// An unknown id is reported before a malformed body.
pub async fn update_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> ApiResult<CompactJson<MessageResponse>> {
    let album = match Album::from_json(&body) {
        Ok(album) => album,
        Err(e) => {
            if !state.store.contains(&id).await {
                return Err(ApiError::AlbumNotFound(id));
            }
            warn!("Rejected update of album {:?}: {}", id, e);
            return Err(ApiError::InvalidJson(e.to_string()));
        }
    };

    let new_id = album.id.clone();
    if let Err(e) = state.store.replace(&id, album).await {
        debug!("Update of album {:?} failed: {}", id, e);
        return Err(ApiError::AlbumNotFound(id));
    }
    info!("Updated album {:?} (now {:?})", id, new_id);

    Ok(CompactJson(MessageResponse::new("Album updated successfully")))
}

/// DELETE /albums/:id
pub async fn delete_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<CompactJson<MessageResponse>> {
    let removed = match state.store.remove(&id).await {
        Ok(album) => album,
        Err(e) => {
            debug!("Delete of album {:?} failed: {}", id, e);
            return Err(ApiError::AlbumNotFound(id));
        }
    };
    info!("Deleted album {:?} ({})", id, removed.title);

    Ok(CompactJson(MessageResponse::new("Album deleted successfully")))
}

/// DELETE /albums
pub async fn delete_all_albums(State(state): State<AppState>) -> CompactJson<MessageResponse> {
    let removed = state.store.clear().await;
    info!("Removed all {} albums", removed);

    CompactJson(MessageResponse::new("All albums removed successfully"))
}
