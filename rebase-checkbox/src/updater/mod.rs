//! Merges the base branch into a pull request branch.
//!
//! This module performs the update itself. It never touches the pull request
//! description; resetting the checkbox is the runner's job.

mod config;
mod error;
mod outcome;

pub use config::{UpdateConfig, DEFAULT_COMMIT_MESSAGE};
pub use error::UpdateError;
pub use outcome::UpdateOutcome;

use crate::github::{GitHubApi, MergeRequest, MergeResponse};
use crate::pull_request::PullRequestSnapshot;
use tracing::{error, info, info_span, Instrument};

/// Brings a pull request branch up to date with its base branch.
///
/// This function:
/// 1. Returns [`UpdateOutcome::DryRunSkipped`] in trial-run mode, without any API call
/// 2. Merges the base branch into the head branch within the head repository
/// 3. Maps the merge status to an [`UpdateOutcome`]
///
/// # Arguments
///
/// * `api` - GitHub services
/// * `snapshot` - Pull request to update
/// * `config` - Trial-run flag and commit message
///
/// # Errors
///
/// Returns [`UpdateError::Conflict`] when the merge conflicts and
/// [`UpdateError::Failed`] for any other merge failure. Errors are logged and
/// returned, never swallowed.
pub async fn update<A: GitHubApi + ?Sized>(
    api: &A,
    snapshot: &PullRequestSnapshot,
    config: &UpdateConfig,
) -> Result<UpdateOutcome, UpdateError> {
    let base = &snapshot.base.branch;
    let head = &snapshot.head.branch;
    let span = info_span!(
        "update_branch",
        pr_number = snapshot.number,
        base = %base,
        head = %head
    );

    async {
        info!("Updating pull request branch with changes from base branch");

        if config.trial_run() {
            info!("Trial run enabled, would have merged '{base}' into '{head}'");
            return Ok(UpdateOutcome::DryRunSkipped);
        }

        let repo = snapshot
            .head
            .repo
            .as_ref()
            .ok_or(UpdateError::HeadRepositoryMissing {
                number: snapshot.number,
            })?;

        // The merges endpoint merges `head` into `base`, so the PR branch goes in `base`.
        let request = MergeRequest {
            base: head.clone(),
            head: base.clone(),
            commit_message: config.commit_message().to_string(),
        };

        match api.merge_branch(repo, &request).await {
            Ok(MergeResponse::Created { sha }) => {
                info!(sha = %sha, "Branch update successful, merge commit created");
                Ok(UpdateOutcome::MergeCommitCreated)
            }
            Ok(MergeResponse::Merged { sha }) => {
                info!(sha = %sha, "Branch update successful");
                Ok(UpdateOutcome::FastForwarded)
            }
            Ok(MergeResponse::NothingToMerge) => {
                info!("Branch update not required, branch is already up-to-date");
                Ok(UpdateOutcome::AlreadyCurrent)
            }
            Err(e) if e.is_merge_conflict() => {
                error!(
                    error = %e,
                    "Merge conflict, not proceeding with merge. Please resolve the conflicts manually"
                );
                Err(UpdateError::Conflict {
                    base: base.clone(),
                    head: head.clone(),
                    source: e,
                })
            }
            Err(e) => {
                error!(error = %e, "Failed to update branch");
                Err(UpdateError::Failed {
                    base: base.clone(),
                    head: head.clone(),
                    source: e,
                })
            }
        }
    }
    .instrument(span)
    .await
}
