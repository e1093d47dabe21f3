//! # Album Common Library
//!
//! Shared code for the album service including:
//! - The `Album` record and its seed data
//! - API response body types
//! - Configuration loading
//! - Common error types

pub mod album;
pub mod api;
pub mod config;
pub mod error;

pub use album::{seed_albums, Album};
pub use config::ServiceConfig;
pub use error::{Error, Result};
