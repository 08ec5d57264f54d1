// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   branch, commit, status, config
//! ```
//!
//! Each handler resolves the parent repository root, picks a notifier
//! (console notices or silent for `--json`), runs the operation from
//! [`crate::git`] and renders the resulting report.

pub mod branch;
pub mod commit;
pub mod config;
pub mod status;


use crate::config::Config;
use crate::error::{GitError, Result};
use std::path::{Path, PathBuf};

/// Resolves the parent repository root for a command.
///
/// Precedence: explicit CLI path, then `repo.root` from the config, then the
/// current directory. The result is canonicalized so reports carry absolute
/// paths.
///
/// # Errors
///
/// Returns [`GitError::RepoNotFound`] if the resolved path does not exist and
/// [`GitError::NotADirectory`] if it exists but is not a directory.
pub(crate) fn resolve_root(path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let candidate = path.map_or_else(
        || {
            config
                .repo
                .root
                .clone()
                .unwrap_or_else(|| PathBuf::from("."))
        },
        Path::to_path_buf,
    );

    if !candidate.exists() {
        return Err(GitError::RepoNotFound {
            path: candidate.display().to_string(),
        }
        .into());
    }
    if !candidate.is_dir() {
        return Err(GitError::NotADirectory {
            path: candidate.display().to_string(),
        }
        .into());
    }

    Ok(candidate.canonicalize()?)
}
