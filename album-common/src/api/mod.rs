//! API module for shared HTTP API types
//!
//! Contains ONLY framework-free response bodies. The service crate wraps
//! these with axum responders.

pub mod types;

pub use types::{ErrorResponse, MessageResponse};
