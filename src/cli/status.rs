// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `status` command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for showing branch and change state across a repository tree.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Print the status as JSON instead of an aligned table.
    #[arg(long = "json")]
    pub json: bool,

    /// Path to the parent repository (defaults to the configured root, then `.`).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,
}
