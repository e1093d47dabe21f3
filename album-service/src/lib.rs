//! album-service library
//!
//! HTTP CRUD service over an in-memory album collection.

use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod error;
pub mod server;
pub mod store;

pub use error::{ApiError, ApiResult};
pub use store::AlbumStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Album collection
    pub store: Arc<AlbumStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: AlbumStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route(
            "/albums",
            get(api::list_albums)
                .post(api::create_album)
                .delete(api::delete_all_albums),
        )
        .route(
            "/albums/:id",
            get(api::get_album)
                .put(api::update_album)
                .delete(api::delete_album),
        )
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
