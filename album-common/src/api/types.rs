//! Shared API response types
//!
//! The album endpoints answer with one of two small JSON shapes:
//! `{"message": ...}` for confirmations (and the lookup miss on GET),
//! `{"error": ...}` for failed mutations.

use serde::{Deserialize, Serialize};

/// Confirmation body
///
/// # Examples
///
/// ```
/// use album_common::api::types::MessageResponse;
///
/// let body = MessageResponse::new("Album deleted successfully");
/// assert_eq!(body.message, "Album deleted successfully");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body for rejected PUT/DELETE requests
///
/// # Examples
///
/// ```
/// use album_common::api::types::ErrorResponse;
///
/// let body = ErrorResponse::new("Album not found");
/// assert_eq!(body.error, "Album not found");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ========================================
// Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let json = serde_json::to_string(&MessageResponse::new("All albums removed successfully"))
            .unwrap();
        assert_eq!(json, r#"{"message":"All albums removed successfully"}"#);
    }

    #[test]
    fn test_error_response_serialization() {
        let json = serde_json::to_string(&ErrorResponse::new("Invalid JSON format")).unwrap();
        assert_eq!(json, r#"{"error":"Invalid JSON format"}"#);
    }
}
