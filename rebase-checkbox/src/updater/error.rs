//! Branch update error types.

use super::UpdateOutcome;
use crate::github::ApiError;
use thiserror::Error;

/// Errors that can occur while updating a pull request branch.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The merge hit conflicting changes.
    #[error("Merge conflict merging '{base}' into '{head}', resolve the conflicts manually")]
    Conflict {
        base: String,
        head: String,
        #[source]
        source: ApiError,
    },

    /// The merge failed for another reason.
    #[error("Failed to merge '{base}' into '{head}': {source}")]
    Failed {
        base: String,
        head: String,
        #[source]
        source: ApiError,
    },

    /// The head repository no longer exists.
    #[error("Cannot update pull request #{number}, head repository no longer exists")]
    HeadRepositoryMissing { number: u64 },
}

impl UpdateError {
    /// Classifies the error as an [`UpdateOutcome`].
    #[must_use]
    pub fn outcome(&self) -> UpdateOutcome {
        match self {
            Self::Conflict { .. } => UpdateOutcome::Conflict,
            Self::Failed { .. } | Self::HeadRepositoryMissing { .. } => UpdateOutcome::OtherFailure,
        }
    }
}
