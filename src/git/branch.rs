// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch orchestration across a repository and its submodules.
//!
//! ```text
//! ensure_branch(folder, "feature")
//!   already on feature?        --> Unchanged, zero commands
//!   plan:
//!     [git stash]              when stash requested and changes exist
//!     [git checkout -b feature]            classified: branch_created
//!     [git checkout -b feature/sandbox]    when sandbox requested
//!     [git stash apply]        iff a stash was pushed
//! ```
//!
//! The sandbox step always sits after the primary creation, and a stash
//! apply only ever follows a stash push.

use bon::Builder;
use std::path::Path;
use tracing::debug;

use super::interpret;
use super::plan::{run_plan, PlanOutcome, Step};
use super::report::{RepoOutcome, RepoReport, TreeReport};
use super::status::{branch_name, has_uncommitted_changes};
use super::submodule::list_submodules;
use crate::error::Result;
use crate::notify::Notify;

/// Options for [`ensure_branch`].
#[derive(Debug, Clone, Builder)]
pub struct BranchOptions {
    /// Stash uncommitted changes before branching and reapply after.
    #[builder(setters(name = with_stash), default = false)]
    stash: bool,
    /// Also create a scratch branch on top of the new branch.
    #[builder(setters(name = with_sandbox), default = true)]
    sandbox: bool,
    /// Name appended to the branch for the scratch branch.
    #[builder(setters(name = with_sandbox_suffix), default = "sandbox".to_string())]
    sandbox_suffix: String,
}

impl Default for BranchOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BranchOptions {
    /// Whether to stash around the branch switch.
    #[must_use]
    pub const fn stash(&self) -> bool {
        self.stash
    }

    /// Whether to create the scratch branch.
    #[must_use]
    pub const fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Suffix of the scratch branch.
    #[must_use]
    pub fn sandbox_suffix(&self) -> &str {
        &self.sandbox_suffix
    }
}

/// Builds the step plan for one repository.
///
/// `stashed` records whether a stash step is prepended; the apply step is
/// appended only in that case.
pub(super) fn branch_plan(branch: &str, options: &BranchOptions, stashed: bool) -> Vec<Step> {
    let mut steps = Vec::new();

    if stashed {
        steps.push(Step::new(["stash"]));
    }

    steps.push(Step::classified(
        ["checkout", "-b", branch],
        interpret::branch_created,
    ));

    if options.sandbox() {
        let sandbox_branch = format!("{branch}/{}", options.sandbox_suffix());
        steps.push(Step::classified(
            ["checkout", "-b", sandbox_branch.as_str()],
            interpret::branch_created,
        ));
    }

    if stashed {
        steps.push(Step::new(["stash", "apply"]));
    }

    steps
}

/// Moves one repository onto `branch`, creating it.
///
/// A repository already on `branch` is left untouched. Uncommitted work
/// survives the switch when `options.stash()` is set; without it, git's
/// own carrying behavior applies.
///
/// # Errors
///
/// Returns an error if git cannot be executed; a failing git command is
/// reported in the returned outcome instead.
pub async fn ensure_branch(
    folder: &Path,
    branch: &str,
    options: &BranchOptions,
    notify: &dyn Notify,
) -> Result<RepoOutcome> {
    if branch_name(folder).await?.as_deref() == Some(branch) {
        debug!(folder = %folder.display(), branch, "already on branch");
        return Ok(RepoOutcome::Unchanged);
    }

    let stashed = options.stash() && has_uncommitted_changes(folder, notify).await?;
    let plan = branch_plan(branch, options, stashed);
    let notice = format!("could not create branch {branch} in {}", folder.display());

    match run_plan(&plan, folder, &notice, notify).await? {
        PlanOutcome::Completed => Ok(RepoOutcome::Updated),
        PlanOutcome::Failed { command } => Ok(RepoOutcome::CommandFailed { command }),
    }
}

/// Moves a parent repository and all its submodules onto `branch`.
///
/// The parent goes first; submodules are only attempted when the parent
/// did not fail. A failing submodule does not stop the remaining ones.
///
/// # Errors
///
/// Returns an error if git cannot be executed; failing git commands are
/// reported per repository in the returned report.
pub async fn ensure_branch_recursive(
    root: &Path,
    branch: &str,
    options: &BranchOptions,
    notify: &dyn Notify,
) -> Result<TreeReport> {
    let parent_outcome = ensure_branch(root, branch, options, notify).await?;

    let mut submodules = Vec::new();
    if parent_outcome.is_failure() {
        debug!(root = %root.display(), "parent failed, leaving submodules untouched");
    } else {
        for sub in list_submodules(root).await? {
            let path = root.join(&sub);
            let outcome = ensure_branch(&path, branch, options, notify).await?;
            submodules.push(RepoReport { path, outcome });
        }
    }

    Ok(TreeReport {
        parent: RepoReport {
            path: root.to_path_buf(),
            outcome: parent_outcome,
        },
        submodules,
    })
}
