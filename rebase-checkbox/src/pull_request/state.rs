//! Pull request state.

use serde::Deserialize;
use std::fmt;

/// Open/closed state of a pull request as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrState {
    /// Pull request is open.
    Open,

    /// Pull request was closed (merged or not).
    Closed,
}

impl PrState {
    /// Returns the state as GitHub spells it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for PrState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
