//! Request and response types for the GitHub endpoints this action uses.

use serde::{Deserialize, Serialize};

/// Result of comparing two refs.
///
/// `ahead_by` counts commits on the head ref missing from the base ref;
/// `behind_by` counts commits on the base ref missing from the head ref.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comparison {
    /// Commits on the head ref that the base ref lacks.
    pub ahead_by: u64,

    /// Commits on the base ref that the head ref lacks.
    pub behind_by: u64,

    /// One of `ahead`, `behind`, `diverged` or `identical`.
    #[serde(default)]
    pub status: String,
}

/// Body of a branch merge request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeRequest {
    /// Branch that receives the merge.
    pub base: String,

    /// Branch or commit merged into `base`.
    pub head: String,

    /// Message for the merge commit, if one is created.
    pub commit_message: String,
}

/// Successful outcome of a branch merge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeResponse {
    /// `201 Created`: a new merge commit was produced.
    Created {
        /// SHA of the new branch HEAD.
        sha: String,
    },

    /// `200 OK`: the branch was moved to include the merged ref.
    Merged {
        /// SHA of the new branch HEAD.
        sha: String,
    },

    /// `204 No Content`: the base already contains the head.
    NothingToMerge,
}

/// The part of a merge commit response that is read.
#[derive(Debug, Deserialize)]
pub(crate) struct MergeCommitBody {
    pub(crate) sha: String,
}
