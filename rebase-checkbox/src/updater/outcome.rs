//! Branch update outcomes.

/// Result of an update attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The policy decided no update was needed.
    NotNeeded,

    /// Trial run; the merge was only logged.
    DryRunSkipped,

    /// The branch was moved forward without a new merge commit.
    FastForwarded,

    /// A merge commit was created on the branch.
    MergeCommitCreated,

    /// The branch already contained the base branch.
    AlreadyCurrent,

    /// The merge failed due to conflicting changes.
    Conflict,

    /// The merge failed for any other reason.
    OtherFailure,
}

impl UpdateOutcome {
    /// Returns the outcome as a string for reporting.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotNeeded => "not needed",
            Self::DryRunSkipped => "skipped (trial run)",
            Self::FastForwarded => "fast-forwarded",
            Self::MergeCommitCreated => "merge commit created",
            Self::AlreadyCurrent => "already up-to-date",
            Self::Conflict => "merge conflict",
            Self::OtherFailure => "failed",
        }
    }
}
