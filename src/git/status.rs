// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository status queries.
//!
//! ```text
//! has_uncommitted_changes   git status .   change markers, warns + dumps
//! branch_name               git status     "On branch X" (exactly one)
//! is_detached               git status     first line "HEAD detached at"
//! repo_status / tree_status               silent snapshot for reporting
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::exec::git_output;
use super::interpret::interpret_status;
use super::submodule::list_submodules;
use crate::error::Result;
use crate::notify::Notify;

/// Checks the folder for uncommitted changes.
///
/// When changes are present, warns through `notify` and echoes the full
/// status output so the user sees what is pending. Clean folders produce
/// no notices.
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn has_uncommitted_changes(folder: &Path, notify: &dyn Notify) -> Result<bool> {
    let result = git_output(&["status", "."], folder).await?;
    let info = interpret_status(result.output());

    if info.has_changes {
        notify.warn(&format!("uncommitted changes in {}", folder.display()));
        notify.std(&result.output().join("\n"));
    }

    Ok(info.has_changes)
}

/// Returns the folder's current branch name, if it can be determined.
///
/// `None` covers a detached HEAD as well as ambiguous status output; the
/// two are distinguished by [`is_detached`].
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn branch_name(folder: &Path) -> Result<Option<String>> {
    let result = git_output(&["status"], folder).await?;
    Ok(interpret_status(result.output()).branch)
}

/// Checks whether the folder's HEAD is detached.
///
/// Empty status output is treated as attached. It has not been observed
/// from any git version, but a hard fault on it would take down a whole
/// tree run.
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn is_detached(folder: &Path) -> Result<bool> {
    let result = git_output(&["status"], folder).await?;

    if result.output().is_empty() {
        debug!(folder = %folder.display(), "empty status output, treating as attached");
        return Ok(false);
    }

    Ok(interpret_status(result.output()).detached)
}

/// Status snapshot of one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    /// Absolute path of the repository.
    pub path: PathBuf,
    /// Current branch, if determined.
    pub branch: Option<String>,
    /// Whether HEAD is detached.
    pub detached: bool,
    /// Whether uncommitted changes are present.
    pub changed: bool,
}

/// Status snapshots across a parent repository and its submodules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeStatus {
    /// The parent repository.
    pub parent: RepoStatus,
    /// Each submodule, in listing order.
    pub submodules: Vec<RepoStatus>,
}

/// Takes a silent status snapshot of one repository.
///
/// Unlike [`has_uncommitted_changes`] this emits no notices; it is the
/// query behind the status command.
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn repo_status(folder: &Path) -> Result<RepoStatus> {
    let status = git_output(&["status"], folder).await?;
    let info = interpret_status(status.output());

    let scoped = git_output(&["status", "."], folder).await?;
    let changed = interpret_status(scoped.output()).has_changes;

    Ok(RepoStatus {
        path: folder.to_path_buf(),
        branch: info.branch,
        detached: info.detached,
        changed,
    })
}

/// Takes status snapshots of a parent repository and all its submodules.
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn tree_status(root: &Path) -> Result<TreeStatus> {
    let parent = repo_status(root).await?;

    let mut submodules = Vec::new();
    for sub in list_submodules(root).await? {
        submodules.push(repo_status(&root.join(sub)).await?);
    }

    Ok(TreeStatus { parent, submodules })
}
