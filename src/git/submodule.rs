// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Submodule listing.

use std::path::Path;
use tracing::trace;

use super::exec::git_output;
use super::interpret::submodule_path;
use crate::error::Result;

/// Lists the submodule paths of a repository, in git's listing order.
///
/// Paths are relative to `folder`. A repository without submodules yields
/// an empty list.
///
/// # Errors
///
/// Returns an error if git cannot be executed.
pub async fn list_submodules(folder: &Path) -> Result<Vec<String>> {
    let result = git_output(&["submodule", "status"], folder).await?;

    let paths: Vec<String> = result
        .output()
        .iter()
        .filter_map(|line| submodule_path(line))
        .collect();

    trace!(folder = %folder.display(), count = paths.len(), "listed submodules");

    Ok(paths)
}
