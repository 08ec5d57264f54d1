// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for githerd.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local githerd.toml (cwd)
//! 3. --ini files (in order given)
//! 4. GITHERD_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITHERD_GLOBAL__LOG_LEVEL=4        → global.log_level = 4
//! GITHERD_REPO__ROOT=/src/tree       → repo.root = "/src/tree"
//! GITHERD_BRANCH__SANDBOX=true       → branch.sandbox = true
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
pub use types::{BranchConfig, CommitConfig, GlobalConfig, RepoConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Repository selection.
    pub repo: RepoConfig,
    /// Branch operation defaults.
    pub branch: BranchConfig,
    /// Commit operation defaults.
    pub commit: CommitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use githerd::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("githerd.toml")
    ///     .with_env_prefix("GITHERD")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that serde alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns an error if a branch-name fragment is empty. Branch names
    /// built from empty fragments would produce malformed refs.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        if self.branch.sandbox_suffix.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "branch".to_string(),
                key: "sandbox_suffix".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        if self.commit.recovery_branch.is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "commit".to_string(),
                key: "recovery_branch".to_string(),
                message: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Returns a vector of formatted strings representing all configuration
    /// options. Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_repo_options(&mut options);
        self.format_branch_options(&mut options);
        self.format_commit_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_repo_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "repo.root".into(),
            self.repo
                .root
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_branch_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("branch.stash".into(), self.branch.stash.to_string());
        options.insert("branch.sandbox".into(), self.branch.sandbox.to_string());
        options.insert(
            "branch.sandbox_suffix".into(),
            self.branch.sandbox_suffix.clone(),
        );
    }

    fn format_commit_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "commit.recovery_branch".into(),
            self.commit.recovery_branch.clone(),
        );
    }
}
