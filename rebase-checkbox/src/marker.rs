//! Rebase opt-in checkbox embedded in pull request descriptions.
//!
//! Contributors request an update by ticking a checkbox in the PR body. The
//! marker is matched as a literal substring, so a surrounding Markdown list
//! marker (`- `) or line break is left untouched as ordinary description text.

/// The checkbox in its ticked form; the presence of this text requests a rebase.
pub const CHECKED_MARKER: &str = "[x] If you want to rebase/retry this PR, check this box";

/// The checkbox in its idle form.
pub const UNCHECKED_MARKER: &str = "[ ] If you want to rebase/retry this PR, check this box";

/// Returns `true` if the description contains the ticked checkbox.
///
/// Matching is case-sensitive: `[X]` is not recognised.
#[must_use]
pub fn is_opted_in(description: &str) -> bool {
    description.contains(CHECKED_MARKER)
}

/// Unticks the first checked marker in the description.
///
/// All other text, including any further checkboxes, is preserved verbatim.
/// Returns the input unchanged when no ticked marker is present, so calling
/// this on an already reset description is a no-op.
#[must_use]
pub fn reset(description: &str) -> String {
    description.replacen(CHECKED_MARKER, UNCHECKED_MARKER, 1)
}
