// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `status` command: shows branch and change state across a tree.

use crate::cli::status::StatusArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::status::{tree_status, RepoStatus, TreeStatus};

/// Run the status command.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved or git
/// cannot be executed.
pub async fn run_status_command(args: &StatusArgs, config: &Config) -> Result<()> {
    let root = super::resolve_root(args.path.as_deref(), config)?;
    let status = tree_status(&root).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_tree(&status);
    }

    Ok(())
}

fn print_tree(status: &TreeStatus) {
    let parent_name = status.parent.path.display().to_string();
    println!("{parent_name:30} {}", status_label(&status.parent));

    for sub in &status.submodules {
        let name = sub.path.strip_prefix(&status.parent.path).map_or_else(
            |_| sub.path.display().to_string(),
            |rel| format!("  {}", rel.display()),
        );
        println!("{name:30} {}", status_label(sub));
    }
}

/// One-line label for a repository: branch name or `(detached)`, with a
/// trailing `*` when uncommitted changes are present.
pub(super) fn status_label(repo: &RepoStatus) -> String {
    let mut label = repo
        .branch
        .clone()
        .unwrap_or_else(|| "(detached)".to_string());
    if repo.changed {
        label.push_str(" *");
    }
    label
}
