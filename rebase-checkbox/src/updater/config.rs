//! Branch update configuration.

/// Commit message used for merge commits when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Rebasing done!";

/// Settings for a branch update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    /// Whether to log the merge instead of performing it.
    trial_run: bool,
    /// Message for the merge commit.
    commit_message: String,
}

impl UpdateConfig {
    /// Creates an update configuration.
    pub fn new(trial_run: bool, commit_message: impl Into<String>) -> Self {
        Self {
            trial_run,
            commit_message: commit_message.into(),
        }
    }

    /// Enables or disables trial-run mode.
    #[must_use]
    pub fn with_trial_run(mut self, trial_run: bool) -> Self {
        self.trial_run = trial_run;
        self
    }

    /// Sets a custom merge commit message.
    #[must_use]
    pub fn with_commit_message(mut self, commit_message: impl Into<String>) -> Self {
        self.commit_message = commit_message.into();
        self
    }

    /// Returns whether trial-run mode is enabled.
    pub fn trial_run(&self) -> bool {
        self.trial_run
    }

    /// Returns the merge commit message.
    pub fn commit_message(&self) -> &str {
        &self.commit_message
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self::new(false, DEFAULT_COMMIT_MESSAGE)
    }
}
