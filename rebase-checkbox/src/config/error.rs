//! Configuration error types.

use thiserror::Error;

/// Errors caused by a misconfigured trigger or missing inputs.
///
/// These are fatal: the run fails immediately and no cleanup is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the event file.
    #[error("Failed to read event file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the event file as JSON.
    #[error("Failed to parse event payload '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The event carries no pull request.
    #[error("No PR data available in event payload")]
    MissingPullRequest,

    /// The pull request has no number.
    #[error("No PR number available")]
    MissingNumber,

    /// The pull request has no description.
    #[error("No PR body available for pull request #{number}")]
    MissingBody { number: u64 },

    /// Some other required pull request field is missing.
    #[error("Pull request #{number} is missing '{field}' in event payload")]
    MissingField { number: u64, field: &'static str },

    /// A repository string is not in `owner/name` form.
    #[error("Invalid repository '{value}', expected 'owner/name'")]
    InvalidRepository { value: String },
}
