//! Run outcome types.

use crate::policy::SkipReason;
use crate::updater::UpdateOutcome;
use std::fmt;

/// Successful end state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The checkbox was not ticked; nothing was done.
    NotRequested,

    /// An update was requested but not needed. The checkbox was reset.
    Skipped(SkipReason),

    /// An update was attempted. The checkbox was reset.
    Updated(UpdateOutcome),
}

impl RunOutcome {
    /// Returns the branch update outcome, if an update was requested.
    #[must_use]
    pub fn update_outcome(&self) -> Option<UpdateOutcome> {
        match self {
            Self::NotRequested => None,
            Self::Skipped(_) => Some(UpdateOutcome::NotNeeded),
            Self::Updated(outcome) => Some(*outcome),
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRequested => f.write_str("rebase not requested"),
            Self::Skipped(reason) => write!(f, "update skipped, {reason}"),
            Self::Updated(outcome) => write!(f, "branch update {}", outcome.as_str()),
        }
    }
}
