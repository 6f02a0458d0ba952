//! Raw GitHub event payload.
//!
//! Only the fields this action reads are modelled. Everything is optional here;
//! validation into a [`PullRequestSnapshot`](super::PullRequestSnapshot)
//! decides what is actually required.

use super::PrState;
use serde::Deserialize;

/// Top level of a `pull_request` event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// The pull request that triggered the workflow.
    pub pull_request: Option<PullRequestPayload>,
}

/// The `pull_request` object of an event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestPayload {
    pub number: Option<u64>,
    pub body: Option<String>,
    pub merged: Option<bool>,
    pub state: Option<PrState>,
    pub base: Option<RefPayload>,
    pub head: Option<RefPayload>,
}

/// A `base` or `head` object of a pull request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RefPayload {
    pub label: String,
    #[serde(rename = "ref")]
    pub branch: String,
    /// `null` when the source fork was deleted.
    pub repo: Option<RepoPayload>,
}

/// Repository object nested in a ref payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoPayload {
    pub name: String,
    pub owner: OwnerPayload,
}

/// Repository owner object.
#[derive(Debug, Clone, Deserialize)]
pub struct OwnerPayload {
    pub login: String,
}
