// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `commit` command: commits pending changes across a repository tree.

use crate::cli::commit::CommitArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::commit::commit_all_recursive;
use crate::notify::{ConsoleNotifier, Notify, SilentNotifier};
use tracing::info;

/// Run the commit command.
///
/// Returns `false` when any repository in the tree failed, so the caller
/// can map it to a nonzero exit code.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved or git
/// cannot be executed.
pub async fn run_commit_command(args: &CommitArgs, config: &Config) -> Result<bool> {
    let root = super::resolve_root(args.path.as_deref(), config)?;

    info!(root = %root.display(), "committing repository tree");

    let notify: Box<dyn Notify> = if args.json {
        Box::new(SilentNotifier)
    } else {
        Box::new(ConsoleNotifier)
    };

    let report = commit_all_recursive(
        &root,
        &args.message,
        &config.commit.recovery_branch,
        notify.as_ref(),
    )
    .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report.success())
}
