// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `branch` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for moving a repository tree onto a new branch.
#[derive(Debug, Clone, Default, Args)]
pub struct BranchArgs {
    /// Name of the branch to create.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Stash uncommitted changes around the branch switch.
    #[arg(short = 's', long = "stash")]
    pub stash: bool,

    /// Also create a `NAME/<suffix>` sandbox branch and leave it checked out.
    #[arg(short = 'b', long = "sandbox")]
    pub sandbox: bool,

    /// Print the per-repository report as JSON instead of console notices.
    #[arg(long = "json")]
    pub json: bool,

    /// Path to the parent repository (defaults to the configured root, then `.`).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
