//! Repository and branch references.

use crate::config::ConfigError;
use std::fmt;
use std::str::FromStr;

/// A repository identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepoRef {
    /// Creates a repository reference.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoRef {
    type Err = ConfigError;

    /// Parses an `owner/name` string such as the `GITHUB_REPOSITORY` variable.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(ConfigError::InvalidRepository {
                value: value.to_string(),
            }),
        }
    }
}

/// One side (base or head) of a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchRef {
    /// Label in `owner:branch` form, as used by the compare API.
    pub label: String,

    /// Bare branch name.
    pub branch: String,

    /// Repository holding the branch; `None` when a fork has been deleted.
    pub repo: Option<RepoRef>,
}
