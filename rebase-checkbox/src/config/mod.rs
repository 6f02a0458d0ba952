//! Loading of the triggering workflow event.
//!
//! GitHub Actions writes the event payload to the file named by
//! `GITHUB_EVENT_PATH`. This module reads that file and validates it into a
//! [`PullRequestSnapshot`].

mod error;

pub use error::ConfigError;

use crate::pull_request::{EventPayload, PullRequestSnapshot};
use std::path::Path;
use tracing::{debug, info};

/// Reads and deserializes an event payload file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file can't be read or isn't valid JSON.
pub fn load_event(event_path: &Path) -> Result<EventPayload, ConfigError> {
    debug!(path = %event_path.display(), "Reading event payload");

    let contents = std::fs::read_to_string(event_path).map_err(|e| ConfigError::IoError {
        path: event_path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: event_path.display().to_string(),
        source: e,
    })
}

/// Reads an event payload file and validates it into a snapshot.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file can't be loaded or lacks required
/// pull request data.
pub fn load_snapshot(event_path: &Path) -> Result<PullRequestSnapshot, ConfigError> {
    let snapshot = PullRequestSnapshot::from_payload(load_event(event_path)?)?;
    info!(pr_number = snapshot.number, "Loaded pull request from event");
    Ok(snapshot)
}
