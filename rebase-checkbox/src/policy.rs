//! Decides whether a pull request branch should be updated.

use crate::divergence::{behind_count, ComparisonError};
use crate::github::GitHubApi;
use crate::pull_request::{PrState, PullRequestSnapshot};
use std::fmt;
use tracing::{info, info_span, warn, Instrument};

/// Why no update was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The pull request was already merged.
    Merged,

    /// The pull request is no longer open.
    NotOpen(PrState),

    /// The head repository (a fork) no longer exists.
    ForkDeleted,

    /// The head branch already contains every base commit.
    UpToDate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Merged => f.write_str("already merged"),
            Self::NotOpen(state) => write!(f, "no longer open (current state: {state})"),
            Self::ForkDeleted => f.write_str("fork appears to have been deleted"),
            Self::UpToDate => f.write_str("up-to-date with base branch"),
        }
    }
}

/// Result of evaluating the update policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    /// The head branch trails the base branch and should be updated.
    Update {
        /// Number of base commits missing from the head branch.
        behind_by: u64,
    },

    /// No update should be attempted.
    Skip(SkipReason),
}

impl UpdateDecision {
    /// Returns `true` if an update should be attempted.
    #[must_use]
    pub fn needs_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }
}

/// Evaluates the update policy for a pull request.
///
/// Guards are checked in order and the first one that applies wins:
/// merged, not open, deleted fork, and finally a zero behind-count. The
/// comparison is only requested once the first three guards pass.
///
/// # Errors
///
/// Returns [`ComparisonError`] if the divergence can't be determined.
pub async fn decide<A: GitHubApi + ?Sized>(
    api: &A,
    snapshot: &PullRequestSnapshot,
) -> Result<UpdateDecision, ComparisonError> {
    let span = info_span!("decide", pr_number = snapshot.number);

    async {
        if snapshot.merged {
            warn!("Skipping pull request, already merged");
            return Ok(UpdateDecision::Skip(SkipReason::Merged));
        }

        if !snapshot.is_open() {
            warn!(state = %snapshot.state, "Skipping pull request, no longer open");
            return Ok(UpdateDecision::Skip(SkipReason::NotOpen(snapshot.state)));
        }

        let Some(head_repo) = &snapshot.head.repo else {
            warn!("Skipping pull request, fork appears to have been deleted");
            return Ok(UpdateDecision::Skip(SkipReason::ForkDeleted));
        };

        let behind_by =
            behind_count(api, head_repo, &snapshot.base.label, &snapshot.head.label).await?;

        if behind_by == 0 {
            info!("Skipping pull request, up-to-date with base branch");
            return Ok(UpdateDecision::Skip(SkipReason::UpToDate));
        }

        info!(
            base = %snapshot.base.branch,
            head = %snapshot.head.branch,
            behind_by,
            "Base branch is ahead of pull request branch"
        );
        Ok(UpdateDecision::Update { behind_by })
    }
    .instrument(span)
    .await
}

/// Returns `true` if the pull request branch should be updated.
///
/// Shorthand for [`decide`] when the skip reason isn't needed.
///
/// # Errors
///
/// Returns [`ComparisonError`] if the divergence can't be determined.
pub async fn needs_update<A: GitHubApi + ?Sized>(
    api: &A,
    snapshot: &PullRequestSnapshot,
) -> Result<bool, ComparisonError> {
    Ok(decide(api, snapshot).await?.needs_update())
}
