// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Commit orchestration across a repository and its submodules.
//!
//! ```text
//! commit_all_recursive("msg")
//!   parent branch name captured before anything moves
//!   per submodule:
//!     commit_one           [git add .] [git commit -m msg]
//!     detached afterwards? [git branch tmp] [git checkout <parent>]
//!                          [git merge tmp]  [git branch -d tmp]
//!   no failures anywhere --> commit_one(parent)
//!   otherwise            --> parent skipped
//! ```
//!
//! A submodule checked out at a pinned revision commits onto a detached
//! HEAD; the recovery plan carries that commit over to the parent's
//! branch. The throwaway branch keeps the commit reachable while HEAD
//! moves, which is also why the checkout confirms with a plain
//! "Switched to branch" and nothing else on stderr.

use std::path::Path;
use tracing::debug;

use super::interpret;
use super::plan::{run_plan, PlanOutcome, Step};
use super::report::{RepoOutcome, RepoReport, TreeReport};
use super::status::{branch_name, has_uncommitted_changes, is_detached};
use super::submodule::list_submodules;
use crate::error::Result;
use crate::notify::Notify;

/// Stage everything, then commit with `message` as given.
pub(super) fn commit_plan(message: &str) -> Vec<Step> {
    vec![
        Step::new(["add", "."]),
        Step::classified(["commit", "-m", message], interpret::commit_recorded),
    ]
}

/// The four-step reattach: park the commit on a throwaway branch, switch
/// to the target branch, merge, drop the throwaway.
pub(super) fn recovery_plan(target_branch: &str, recovery_branch: &str) -> Vec<Step> {
    vec![
        Step::new(["branch", recovery_branch]),
        Step::classified(["checkout", target_branch], interpret::branch_switched),
        Step::new(["merge", recovery_branch]),
        Step::new(["branch", "-d", recovery_branch]),
    ]
}

/// Commits all pending changes in one repository.
///
/// A clean repository is a no-op reporting [`RepoOutcome::Unchanged`],
/// with no commands issued. On a successful commit the stat summary line
/// is surfaced through `notify`.
///
/// # Errors
///
/// Returns an error if git cannot be executed; a failing git command is
/// reported in the returned outcome instead.
pub async fn commit_one(folder: &Path, message: &str, notify: &dyn Notify) -> Result<RepoOutcome> {
    if !has_uncommitted_changes(folder, notify).await? {
        debug!(folder = %folder.display(), "nothing to commit");
        return Ok(RepoOutcome::Unchanged);
    }

    let notice = format!(
        "could not commit {}",
        folder.parent().unwrap_or(folder).display()
    );

    match run_plan(&commit_plan(message), folder, &notice, notify).await? {
        PlanOutcome::Completed => Ok(RepoOutcome::Updated),
        PlanOutcome::Failed { command } => Ok(RepoOutcome::CommandFailed { command }),
    }
}

/// Reattaches a detached submodule onto the parent's branch.
///
/// Returns `None` on success, or the failure outcome. With no determined
/// parent branch there is nothing to reattach to, so no commands run and
/// the outcome is a recovery failure without a command.
async fn recover_detached(
    folder: &Path,
    parent_branch: Option<&str>,
    recovery_branch: &str,
    notify: &dyn Notify,
) -> Result<Option<RepoOutcome>> {
    let Some(target) = parent_branch else {
        notify.warn(&format!(
            "cannot reattach {}: parent branch undetermined",
            folder.display()
        ));
        return Ok(Some(RepoOutcome::RecoveryFailed { command: None }));
    };

    let notice = format!("could not reattach {} to {target}", folder.display());
    let plan = recovery_plan(target, recovery_branch);

    match run_plan(&plan, folder, &notice, notify).await? {
        PlanOutcome::Completed => Ok(None),
        PlanOutcome::Failed { command } => Ok(Some(RepoOutcome::RecoveryFailed {
            command: Some(command),
        })),
    }
}

/// Commits pending changes across a parent repository and its submodules.
///
/// The parent's branch name is captured up front; each submodule is
/// committed and, when left on a detached HEAD, reattached to that
/// branch. A failing submodule never stops the remaining ones, but any
/// failure anywhere skips the parent commit, leaving its recorded
/// submodule pointers uncommitted.
///
/// # Errors
///
/// Returns an error if git cannot be executed; failing git commands are
/// reported per repository in the returned report.
pub async fn commit_all_recursive(
    root: &Path,
    message: &str,
    recovery_branch: &str,
    notify: &dyn Notify,
) -> Result<TreeReport> {
    let parent_branch = branch_name(root).await?;

    let mut submodules = Vec::new();
    let mut any_failure = false;

    for sub in list_submodules(root).await? {
        let path = root.join(&sub);
        let mut outcome = commit_one(&path, message, notify).await?;

        if !outcome.is_failure() && is_detached(&path).await? {
            outcome = match recover_detached(
                &path,
                parent_branch.as_deref(),
                recovery_branch,
                notify,
            )
            .await?
            {
                // The reattach moved the repo even when the commit was a no-op
                None => RepoOutcome::Updated,
                Some(failure) => failure,
            };
        }

        any_failure |= outcome.is_failure();
        submodules.push(RepoReport { path, outcome });
    }

    let parent_outcome = if any_failure {
        debug!(root = %root.display(), "failures below, skipping parent commit");
        RepoOutcome::Skipped
    } else {
        commit_one(root, message, notify).await?
    };

    Ok(TreeReport {
        parent: RepoReport {
            path: root.to_path_buf(),
            outcome: parent_outcome,
        },
        submodules,
    })
}
