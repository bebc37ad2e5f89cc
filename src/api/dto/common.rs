//! Common API DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation payload for operations that return no record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
