// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The text contract with git, in one place.
//!
//! git has no structured API for the queries this crate makes, so state is
//! recovered from the human-readable output of `status`, `submodule status`,
//! `checkout` and `commit`. Every substring that decision-making depends on
//! is defined in this module and nowhere else.
//!
//! ```text
//! status output      "On branch X"            --> branch name
//!                    "HEAD detached at"       --> detached (first line)
//!                    "not staged" /
//!                    "Changes to be committed" /
//!                    "Untracked files"        --> uncommitted changes
//! submodule status   " abc123 path (ref)"     --> path token
//! checkout -b        "Switched to a new branch" on stderr --> created
//! checkout           "Switched to branch" on stderr       --> switched
//! commit             second stdout line       --> stat summary
//! ```
//!
//! Everything here is pure and synchronous. The functions take captured
//! output lines and never touch a repository.

use super::plan::StepVerdict;
use crate::process::CommandResult;

/// Output markers meaning the working tree has uncommitted changes.
const CHANGE_MARKERS: [&str; 3] = ["not staged", "Changes to be committed", "Untracked files"];

/// Status line prefix naming the current branch.
const ON_BRANCH: &str = "On branch";

/// First-line marker for a detached HEAD.
const DETACHED: &str = "HEAD detached at";

/// Stderr confirmation after `checkout -b`.
const BRANCH_CREATED: &str = "Switched to a new branch";

/// Stderr confirmation after a plain `checkout` of an existing branch.
const BRANCH_SWITCHED: &str = "Switched to branch";

/// What a `git status` output says about a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusInfo {
    /// Current branch, if exactly one status line names one.
    ///
    /// `None` covers both "no such line" and the ambiguous multi-line case;
    /// the orchestration treats them as a single undetermined outcome.
    pub branch: Option<String>,
    /// True iff the first output line reports a detached HEAD.
    pub detached: bool,
    /// True iff any output line carries a change marker.
    pub has_changes: bool,
}

/// Interprets the captured output of `git status`.
///
/// Empty output yields the all-default info: no branch, attached, clean.
#[must_use]
pub fn interpret_status(lines: &[String]) -> StatusInfo {
    let has_changes = lines
        .iter()
        .any(|line| CHANGE_MARKERS.iter().any(|marker| line.contains(marker)));

    let mut branch_lines = lines.iter().filter(|line| line.contains(ON_BRANCH));
    let branch = match (branch_lines.next(), branch_lines.next()) {
        (Some(line), None) => line
            .split_whitespace()
            .next_back()
            .map(ToString::to_string),
        _ => None,
    };

    let detached = lines.first().is_some_and(|line| line.contains(DETACHED));

    StatusInfo {
        branch,
        detached,
        has_changes,
    }
}

/// Extracts the submodule path from one `git submodule status` line.
///
/// The line format is `<flag><sha> <path> (<ref>)`; the path is the second
/// whitespace-delimited token. Paths reported relative to a nested cwd come
/// prefixed with `../`, which is dropped. Returns `None` for lines that do
/// not carry a path token, e.g. blank lines.
#[must_use]
pub fn submodule_path(line: &str) -> Option<String> {
    let token = line.split_whitespace().nth(1)?;
    let path = token.strip_prefix("../").unwrap_or(token);
    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}

/// Classifies a `checkout -b` step.
///
/// git confirms a successful branch creation on stderr, so an empty error
/// stream here means the command did something unexpected (most likely the
/// branch already existed) and counts as failure. Only a first error line
/// carrying the confirmation text is success.
#[must_use]
pub fn branch_created(result: &CommandResult) -> StepVerdict {
    match result.error().first() {
        Some(line) if line.contains(BRANCH_CREATED) => StepVerdict::Ok,
        _ => StepVerdict::Failed,
    }
}

/// Classifies a plain `checkout` of an existing branch.
///
/// Same shape as [`branch_created`]: the switch confirmation also arrives
/// on stderr, so the default empty-error rule would misread every
/// successful switch as a failure.
#[must_use]
pub fn branch_switched(result: &CommandResult) -> StepVerdict {
    match result.error().first() {
        Some(line) if line.contains(BRANCH_SWITCHED) => StepVerdict::Ok,
        _ => StepVerdict::Failed,
    }
}

/// Classifies a `commit` step.
///
/// Any error output is failure. On success the second stdout line is the
/// short stat summary (`1 file changed, ...`), surfaced to the user.
#[must_use]
pub fn commit_recorded(result: &CommandResult) -> StepVerdict {
    if !result.error().is_empty() {
        return StepVerdict::Failed;
    }
    result
        .output()
        .get(1)
        .map_or(StepVerdict::Ok, |line| StepVerdict::OkNote(line.clone()))
}
