// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `commit` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for committing pending changes across a repository tree.
#[derive(Debug, Clone, Default, Args)]
pub struct CommitArgs {
    /// Commit message to use in every repository.
    #[arg(short = 'm', long = "message", value_name = "MSG", required = true)]
    pub message: String,

    /// Print the per-repository report as JSON instead of console notices.
    #[arg(long = "json")]
    pub json: bool,

    /// Path to the parent repository (defaults to the configured root, then `.`).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
