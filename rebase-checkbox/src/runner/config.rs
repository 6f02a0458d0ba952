//! Runner configuration.

use crate::pull_request::RepoRef;
use crate::updater::UpdateConfig;

/// Configuration for a single run of the action.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Repository the workflow runs in; pull request descriptions are updated here.
    repository: RepoRef,
    /// Trial-run flag and merge commit message.
    update: UpdateConfig,
}

impl RunnerConfig {
    /// Creates a configuration with default update settings.
    pub fn new(repository: RepoRef) -> Self {
        Self {
            repository,
            update: UpdateConfig::default(),
        }
    }

    /// Sets custom update settings.
    #[must_use]
    pub fn with_update_config(mut self, update: UpdateConfig) -> Self {
        self.update = update;
        self
    }

    /// Returns the workflow repository.
    pub fn repository(&self) -> &RepoRef {
        &self.repository
    }

    /// Returns the update settings.
    pub fn update(&self) -> &UpdateConfig {
        &self.update
    }
}
