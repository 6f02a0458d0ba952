//! Orchestrates a single rebase request.
//!
//! A run reads the checkbox, evaluates the update policy, performs the update
//! and resets the checkbox. Once the checkbox is found ticked it is reset
//! exactly once, whether the update succeeded, was skipped or failed, so a
//! request is never replayed by a later, unrelated trigger.

mod config;
mod error;
mod outcome;

pub use config::RunnerConfig;
pub use error::RunnerError;
pub use outcome::RunOutcome;

use crate::github::GitHubApi;
use crate::marker;
use crate::policy::{decide, UpdateDecision};
use crate::pull_request::PullRequestSnapshot;
use crate::updater::update;
use tracing::{error, info, info_span, warn, Instrument};

/// Runs the rebase workflow for one pull request.
pub struct Runner<A> {
    config: RunnerConfig,
    api: A,
}

impl<A: GitHubApi> Runner<A> {
    /// Builds a runner from a configuration and a GitHub API implementation.
    pub fn new(config: RunnerConfig, api: A) -> Self {
        Self { config, api }
    }

    /// Returns the GitHub API implementation.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Executes the full orchestration flow.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the comparison or the update fails, after the
    /// checkbox has been reset. A failure to reset during error handling is
    /// logged and the original error is returned.
    pub async fn run(&self, snapshot: &PullRequestSnapshot) -> Result<RunOutcome, RunnerError> {
        let span = info_span!(
            "run",
            pr_number = snapshot.number,
            repo = %self.config.repository()
        );

        async {
            info!("Processing pull request");

            if !marker::is_opted_in(&snapshot.body) {
                info!("Rebase not requested, checkbox is unchecked");
                return Ok(RunOutcome::NotRequested);
            }

            info!("Checkbox is checked, rebase requested");

            match self.sync_branch(snapshot).await {
                Ok(outcome) => {
                    self.reset_checkbox(snapshot).await?;
                    info!(outcome = %outcome, "Run complete");
                    Ok(outcome)
                }
                Err(e) => {
                    if let Err(reset_error) = self.reset_checkbox(snapshot).await {
                        error!(error = %reset_error, "Failed to reset checkbox after error");
                    }
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Decides whether the branch needs an update and performs it.
    async fn sync_branch(&self, snapshot: &PullRequestSnapshot) -> Result<RunOutcome, RunnerError> {
        match decide(&self.api, snapshot).await? {
            UpdateDecision::Skip(reason) => {
                warn!(reason = %reason, "Pull request branch needs no update, not proceeding with merge");
                Ok(RunOutcome::Skipped(reason))
            }
            UpdateDecision::Update { behind_by } => {
                info!(behind_by, "Pull request branch is behind base branch, updating now");
                let outcome = update(&self.api, snapshot, self.config.update()).await?;
                Ok(RunOutcome::Updated(outcome))
            }
        }
    }

    /// Writes the description back with the checkbox unticked.
    async fn reset_checkbox(&self, snapshot: &PullRequestSnapshot) -> Result<(), RunnerError> {
        let body = marker::reset(&snapshot.body);

        self.api
            .update_description(self.config.repository(), snapshot.number, &body)
            .await
            .map_err(|source| RunnerError::Reset {
                number: snapshot.number,
                source,
            })?;

        info!("Unchecked the rebase checkbox in PR description");
        Ok(())
    }
}
