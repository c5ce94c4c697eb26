//! Errors raised while talking to the backend

use thiserror::Error;

/// Which backend call failed; picks the fallback message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Detect,
    Recipes,
    Status,
    Image,
}

impl Operation {
    pub fn fallback_message(self) -> &'static str {
        match self {
            Operation::Detect => "Ingredient detection failed",
            Operation::Recipes => "Recipe matching failed",
            Operation::Status | Operation::Image => "Backend request failed",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{} ({status}): {}", .operation.fallback_message(), .detail.as_deref().unwrap_or("no detail"))]
    Status {
        operation: Operation,
        status: u16,
        detail: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Message fit for a toast: the server's `detail` when it sent one,
    /// otherwise a generic line for the failed operation
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Status { operation, .. } => operation.fallback_message().to_string(),
            ApiError::Transport(_) => "Could not reach the kitchen backend. Is it running?".to_string(),
            ApiError::Decode(_) => "Unexpected response from the backend".to_string(),
            ApiError::Io(e) => format!("Could not read that photo: {e}"),
        }
    }
}
