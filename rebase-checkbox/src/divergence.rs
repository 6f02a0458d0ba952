//! How far a pull request branch trails its base branch.

use crate::github::{ApiError, GitHubApi};
use crate::pull_request::RepoRef;
use thiserror::Error;
use tracing::debug;

/// The comparison service could not compare two refs.
///
/// Raised for unknown refs, missing permissions, deleted forks and transport
/// failures alike.
#[derive(Debug, Error)]
#[error("Failed to compare '{base}' with '{head}' in {repo}: {source}")]
pub struct ComparisonError {
    /// Repository the comparison ran in.
    pub repo: RepoRef,
    /// Base ref of the comparison.
    pub base: String,
    /// Head ref of the comparison.
    pub head: String,
    /// Underlying API error.
    #[source]
    pub source: ApiError,
}

/// Returns how many commits on `base` are missing from `head`.
///
/// Runs the comparison `base...head` and reads `behind_by`. The operand order
/// matters: swapping the refs would report how far `base` trails `head`
/// instead.
///
/// # Errors
///
/// Returns [`ComparisonError`] if the comparison call fails.
pub async fn behind_count<A: GitHubApi + ?Sized>(
    api: &A,
    repo: &RepoRef,
    base: &str,
    head: &str,
) -> Result<u64, ComparisonError> {
    let comparison = api
        .compare(repo, base, head)
        .await
        .map_err(|source| ComparisonError {
            repo: repo.clone(),
            base: base.to_string(),
            head: head.to_string(),
            source,
        })?;

    debug!(
        base,
        head,
        ahead_by = comparison.ahead_by,
        behind_by = comparison.behind_by,
        status = %comparison.status,
        "Compared refs"
    );

    Ok(comparison.behind_by)
}
