// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for githerd.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, RepoConfig, BranchConfig, CommitConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Repository selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Parent repository to operate on when no path is given on the
    /// command line. Falls back to the current directory.
    pub root: Option<PathBuf>,
}

/// Defaults for the branch operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BranchConfig {
    /// Stash uncommitted changes before branching and reapply after.
    pub stash: bool,
    /// Also create a scratch branch on top of the new branch.
    pub sandbox: bool,
    /// Name appended to the branch for the scratch branch,
    /// e.g. `feature/sandbox`.
    pub sandbox_suffix: String,
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            stash: false,
            sandbox: false,
            sandbox_suffix: "sandbox".to_string(),
        }
    }
}

/// Defaults for the commit operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommitConfig {
    /// Throwaway branch name used while reattaching a detached submodule.
    pub recovery_branch: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            recovery_branch: "tmp".to_string(),
        }
    }
}
