// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-repository outcome reports for tree-wide operations.
//!
//! Branch and commit runs visit a parent repository and each of its
//! submodules; every visit ends in one of the [`RepoOutcome`] states
//! below. The aggregate keeps each per-repo outcome instead of collapsing
//! them into one boolean, so a caller can see which repo failed on which
//! command.

use serde::Serialize;
use std::path::PathBuf;

/// What happened to one repository during an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RepoOutcome {
    /// Already in the requested state; no commands were issued.
    Unchanged,
    /// The operation ran to completion.
    Updated,
    /// A git command failed; `command` is its command line.
    CommandFailed { command: String },
    /// Detached-HEAD recovery failed. `command` names the failing command,
    /// or is absent when recovery could not start because the parent
    /// branch was undetermined.
    RecoveryFailed { command: Option<String> },
    /// Not attempted because an earlier repository failed.
    Skipped,
}

impl RepoOutcome {
    /// Whether this outcome counts against overall success.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::CommandFailed { .. } | Self::RecoveryFailed { .. })
    }
}

/// Outcome of one repository, by path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoReport {
    /// Absolute path of the repository.
    pub path: PathBuf,
    /// What happened there.
    #[serde(flatten)]
    pub outcome: RepoOutcome,
}

/// Outcomes across a parent repository and its submodules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeReport {
    /// The parent repository.
    pub parent: RepoReport,
    /// Each submodule, in listing order.
    pub submodules: Vec<RepoReport>,
}

impl TreeReport {
    /// True iff no repository anywhere in the tree failed.
    #[must_use]
    pub fn success(&self) -> bool {
        !self.parent.outcome.is_failure()
            && self.submodules.iter().all(|r| !r.outcome.is_failure())
    }
}
