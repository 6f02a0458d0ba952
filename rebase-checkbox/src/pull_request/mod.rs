//! Pull request snapshot built from the triggering event.
//!
//! The event payload is validated once at the boundary. Everything downstream
//! works with a [`PullRequestSnapshot`] whose required fields are guaranteed
//! to be present.

mod branch;
mod payload;
mod state;

pub use branch::{BranchRef, RepoRef};
pub use payload::{EventPayload, OwnerPayload, PullRequestPayload, RefPayload, RepoPayload};
pub use state::PrState;

use crate::config::ConfigError;

/// Immutable view of a pull request at the time the workflow was triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Pull request number.
    pub number: u64,

    /// Description text, as read at the start of the run.
    pub body: String,

    /// Whether the pull request has already been merged.
    pub merged: bool,

    /// Open/closed state.
    pub state: PrState,

    /// Branch the pull request merges into.
    pub base: BranchRef,

    /// The pull request's own branch.
    pub head: BranchRef,
}

impl PullRequestSnapshot {
    /// Validates an event payload into a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the pull request, its number, its body, or
    /// any other required field is missing. These indicate a misconfigured
    /// trigger and are not retried.
    pub fn from_payload(payload: EventPayload) -> Result<Self, ConfigError> {
        let pr = payload.pull_request.ok_or(ConfigError::MissingPullRequest)?;

        let number = match pr.number {
            Some(number) if number > 0 => number,
            _ => return Err(ConfigError::MissingNumber),
        };

        let body = match pr.body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(ConfigError::MissingBody { number }),
        };

        let state = pr.state.ok_or(ConfigError::MissingField {
            number,
            field: "state",
        })?;
        let base = pr.base.ok_or(ConfigError::MissingField {
            number,
            field: "base",
        })?;
        let head = pr.head.ok_or(ConfigError::MissingField {
            number,
            field: "head",
        })?;

        Ok(Self {
            number,
            body,
            merged: pr.merged.unwrap_or(false),
            state,
            base: branch_ref(base),
            head: branch_ref(head),
        })
    }

    /// Returns `true` if the pull request is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == PrState::Open
    }
}

fn branch_ref(payload: RefPayload) -> BranchRef {
    BranchRef {
        label: payload.label,
        branch: payload.branch,
        repo: payload
            .repo
            .map(|repo| RepoRef::new(repo.owner.login, repo.name)),
    }
}
