//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_github;

use rebase_checkbox::{
    BranchRef, PrState, PullRequestSnapshot, RepoRef, CHECKED_MARKER, UNCHECKED_MARKER,
};
use std::path::PathBuf;

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/events")
}

/// Repository the workflow runs in.
pub fn upstream_repo() -> RepoRef {
    RepoRef::new("octo-org", "widgets")
}

/// Fork the pull request comes from.
pub fn fork_repo() -> RepoRef {
    RepoRef::new("contributor", "widgets")
}

pub fn body_with(marker: &str) -> String {
    format!("Adds the widget frobnicator.\n\n{marker}\n\nCloses #12")
}

pub fn opted_in_body() -> String {
    body_with(CHECKED_MARKER)
}

pub fn reset_body() -> String {
    body_with(UNCHECKED_MARKER)
}

/// An open pull request from `contributor:feature` into `octo-org:main`.
pub fn open_pr(body: &str) -> PullRequestSnapshot {
    PullRequestSnapshot {
        number: 42,
        body: body.to_string(),
        merged: false,
        state: PrState::Open,
        base: BranchRef {
            label: "octo-org:main".to_string(),
            branch: "main".to_string(),
            repo: Some(upstream_repo()),
        },
        head: BranchRef {
            label: "contributor:feature".to_string(),
            branch: "feature".to_string(),
            repo: Some(fork_repo()),
        },
    }
}
