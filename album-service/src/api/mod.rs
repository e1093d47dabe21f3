//! HTTP API handlers for album-service

pub mod albums;
pub mod buildinfo;
pub mod health;
pub mod json;

pub use albums::{
    create_album, delete_album, delete_all_albums, get_album, list_albums, update_album,
};
pub use buildinfo::{get_build_info, BuildInfo};
pub use health::health_routes;
pub use json::{CompactJson, PrettyJson};
