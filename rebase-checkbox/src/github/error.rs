//! GitHub API error types.

use thiserror::Error;

/// HTTP status GitHub returns when a merge can't be performed due to conflicts.
const CONFLICT_STATUS: u16 = 409;

/// Errors returned by [`GitHubApi`](super::GitHubApi) calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub answered with an error status.
    #[error("GitHub API error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The request could not be completed.
    #[error("GitHub API request failed: {0}")]
    Request(String),

    /// The response body had an unexpected shape.
    #[error("Unexpected GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` if this error reports a merge conflict.
    #[must_use]
    pub fn is_merge_conflict(&self) -> bool {
        match self {
            Self::Status { status, message } => {
                *status == CONFLICT_STATUS || message.to_lowercase().contains("merge conflict")
            }
            Self::Request(message) => message.to_lowercase().contains("merge conflict"),
            Self::Decode(_) => false,
        }
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => Self::Status {
                status: source.status_code.as_u16(),
                message: source.message.clone(),
            },
            other => Self::Request(other.to_string()),
        }
    }
}
