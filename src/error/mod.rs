// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            HerdError (~24 bytes)
//!                  |
//!     +------+-----+------+------+
//!     |      |     |      |      |
//!     v      v     v      v      v
//!   Bail   Git   Cfg   Proc   Io/Other
//!          Box   Box   Box    Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git     RepoNotFound, NotADirectory
//!   Config  ParseError, InvalidValue, NotFound
//!   Process ExecutableNotFound, SpawnFailed, OutputError
//!
//! All variants boxed => HerdError fits in 24 bytes.
//! ```
//!
//! Note that a failed git command is normally NOT an error: step outcomes
//! are classified from the command's output streams and reported through
//! [`crate::git::report`]. Only environment-level faults (git missing, a
//! broken spawn, unusable configuration) surface here.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`HerdError`].
pub type HerdResult<T> = std::result::Result<T, HerdError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum HerdError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git environment error.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`HerdError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> HerdError {
    HerdError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for HerdError {
                fn from(err: $error) -> Self {
                    HerdError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ConfigError => Config,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git environment errors.
///
/// Failures of individual git commands are not represented here; those are
/// classified from the command output and carried in the outcome report.
#[derive(Debug, Error)]
pub enum GitError {
    /// Repository root could not be resolved.
    #[error("repository not found: {path}")]
    RepoNotFound { path: String },

    /// Repository root exists but is not a directory.
    #[error("not a directory: {path}")]
    NotADirectory { path: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}
