#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod divergence;
pub mod github;
pub mod marker;
pub mod policy;
pub mod pull_request;
pub mod runner;
pub mod updater;

pub use config::{load_event, load_snapshot, ConfigError};
pub use divergence::{behind_count, ComparisonError};
pub use github::{
    ApiError, Comparison, GitHubApi, MergeRequest, MergeResponse, OctocrabClient,
};
pub use marker::{is_opted_in, CHECKED_MARKER, UNCHECKED_MARKER};
pub use policy::{decide, needs_update, SkipReason, UpdateDecision};
pub use pull_request::{BranchRef, EventPayload, PrState, PullRequestSnapshot, RepoRef};
pub use runner::{RunOutcome, Runner, RunnerConfig, RunnerError};
pub use updater::{update, UpdateConfig, UpdateError, UpdateOutcome, DEFAULT_COMMIT_MESSAGE};
