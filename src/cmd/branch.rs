// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `branch` command: moves a repository tree onto a new branch.

use crate::cli::branch::BranchArgs;
use crate::config::Config;
use crate::error::Result;
use crate::git::branch::{ensure_branch_recursive, BranchOptions};
use crate::notify::{ConsoleNotifier, Notify, SilentNotifier};
use tracing::info;

/// Run the branch command.
///
/// Returns `false` when any repository in the tree failed, so the caller
/// can map it to a nonzero exit code.
///
/// # Errors
///
/// Returns an error if the repository root cannot be resolved or git
/// cannot be executed.
pub async fn run_branch_command(args: &BranchArgs, config: &Config) -> Result<bool> {
    let root = super::resolve_root(args.path.as_deref(), config)?;

    // CLI flags only ever turn behavior on; the config supplies the rest.
    let options = BranchOptions::builder()
        .with_stash(args.stash || config.branch.stash)
        .with_sandbox(args.sandbox || config.branch.sandbox)
        .with_sandbox_suffix(config.branch.sandbox_suffix.clone())
        .build();

    info!(root = %root.display(), branch = %args.name, "branching repository tree");

    let notify: Box<dyn Notify> = if args.json {
        Box::new(SilentNotifier)
    } else {
        Box::new(ConsoleNotifier)
    };

    let report = ensure_branch_recursive(&root, &args.name, &options, notify.as_ref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report.success())
}
