//! Runner error types.

use crate::config::ConfigError;
use crate::divergence::ComparisonError;
use crate::github::ApiError;
use crate::updater::UpdateError;

/// Errors that fail a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Missing or invalid trigger data.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The divergence between base and head could not be determined.
    #[error(transparent)]
    Comparison(#[from] ComparisonError),

    /// The branch update failed.
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// The checkbox could not be reset after a successful run.
    #[error("Failed to reset rebase checkbox on pull request #{number}: {source}")]
    Reset {
        number: u64,
        #[source]
        source: ApiError,
    },

    /// GitHub API client initialization errors.
    #[error("Failed to create GitHub client: {0}")]
    Client(#[source] ApiError),
}

impl RunnerError {
    /// Returns `true` for errors caused by a misconfigured trigger.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
