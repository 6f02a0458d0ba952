//! GitHub services consumed by the action.
//!
//! The action needs three endpoints: ref comparison, branch merge and pull
//! request update. They sit behind the [`GitHubApi`] trait so the decision and
//! update logic can run against [`OctocrabClient`] in production and a
//! recording double in tests.

mod client;
mod error;
mod types;

pub use client::OctocrabClient;
pub use error::ApiError;
pub use types::{Comparison, MergeRequest, MergeResponse};

use crate::pull_request::RepoRef;
use async_trait::async_trait;

/// The subset of the GitHub REST API this action uses.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Compares `base...head` within a repository.
    ///
    /// Both refs may be labels in `owner:branch` form.
    async fn compare(&self, repo: &RepoRef, base: &str, head: &str)
        -> Result<Comparison, ApiError>;

    /// Merges `request.head` into the `request.base` branch.
    ///
    /// A merge conflict is reported as an error for which
    /// [`ApiError::is_merge_conflict`] returns `true`.
    async fn merge_branch(
        &self,
        repo: &RepoRef,
        request: &MergeRequest,
    ) -> Result<MergeResponse, ApiError>;

    /// Replaces the description of a pull request.
    async fn update_description(
        &self,
        repo: &RepoRef,
        pull_number: u64,
        body: &str,
    ) -> Result<(), ApiError>;
}
