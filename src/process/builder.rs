// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/exists/find
//!  • arg/args/cwd/env/name
//!  • capture_stdout/stderr/output, quiet, inherit_stdio
//!
//! StreamFlags: FORWARD_TO_LOG (default), BIT_BUCKET, KEEP_IN_STRING, INHERIT
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling stream handling for stdout/stderr.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Forward output to tracing logs
        const FORWARD_TO_LOG = 0x01;
        /// Discard output (send to /dev/null)
        const BIT_BUCKET = 0x02;
        /// Keep output as captured lines for later retrieval
        const KEEP_IN_STRING = 0x04;
        /// Inherit from parent process
        const INHERIT = 0x08;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Result of a completed command.
///
/// Holds the captured stdout and stderr line sequences (populated when
/// `KEEP_IN_STRING` was set for the stream) and the recorded exit code.
/// The exit code is informational only; callers decide success from the
/// stream contents.
#[derive(Debug, Clone, Default)]
pub struct CommandResult {
    exit_code: i32,
    output: Vec<String>,
    error: Vec<String>,
}

impl CommandResult {
    /// Creates a new `CommandResult` from captured streams.
    #[must_use]
    pub const fn new(exit_code: i32, output: Vec<String>, error: Vec<String>) -> Self {
        Self {
            exit_code,
            output,
            error,
        }
    }

    /// Returns the recorded exit code (0 = clean exit, -1 = killed).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout lines (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns captured stderr lines (if `KEEP_IN_STRING` was set).
    #[must_use]
    pub fn error(&self) -> &[String] {
        &self.error
    }
}

/// Configuration for a stream (stdout or stderr).
#[derive(Debug, Clone, Default)]
pub(super) struct StreamConfig {
    flags: StreamFlags,
}

impl StreamConfig {
    /// Returns the stream flags.
    pub(super) const fn flags(&self) -> StreamFlags {
        self.flags
    }

    /// Sets the stream flags.
    pub(super) const fn set_flags(&mut self, flags: StreamFlags) {
        self.flags = flags;
    }
}

/// Builder for configuring and running a process.
///
/// Uses the builder pattern to configure process options before spawning.
#[derive(Debug)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments
    args: Vec<String>,
    /// Working directory
    cwd: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment
    env: Vec<(String, String)>,
    /// Stdout configuration
    stdout: StreamConfig,
    /// Stderr configuration
    stderr: StreamConfig,
    /// Display name for logging
    name: Option<String>,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the
    /// executable name. If just a name is given, it is resolved via PATH
    /// when `run()` is called.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
            stdout: StreamConfig::default(),
            stderr: StreamConfig::default(),
            name: None,
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program via PATH.
    ///
    /// Uses the `which` crate to find the executable in PATH.
    /// Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not
    /// found in PATH.
    pub fn which(program: &str) -> std::result::Result<Self, crate::error::ProcessError> {
        // Check cache first (read lock)
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Ok(Self::new(path.clone()));
            }
        }

        // Not in cache, resolve via which
        which::which(program).map_or_else(
            |_| {
                Err(crate::error::ProcessError::ExecutableNotFound {
                    name: program.to_string(),
                })
            },
            |path| {
                // Cache the result (write lock)
                {
                    let mut cache = exe_cache()
                        .write()
                        .unwrap_or_else(std::sync::PoisonError::into_inner);
                    cache.insert(program.to_string(), path.clone());
                }
                Ok(Self::new(path))
            },
        )
    }

    /// Checks if an executable exists in PATH.
    ///
    /// Uses the cache if available, otherwise resolves and caches.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    /// Finds the full path to an executable in PATH.
    ///
    /// Results are cached for subsequent lookups.
    /// Returns `None` if the executable is not found.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        // Check cache first (read lock)
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        // Not in cache, resolve via which
        which::which(program).map_or(None, |path| {
            // Cache the result (write lock)
            {
                let mut cache = exe_cache()
                    .write()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                cache.insert(program.to_string(), path.clone());
            }
            Some(path)
        })
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string_lossy().into_owned());
        }
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds an environment variable on top of the inherited environment.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Configures stdout handling.
    #[must_use]
    pub const fn stdout_flags(mut self, flags: StreamFlags) -> Self {
        self.stdout.set_flags(flags);
        self
    }

    /// Configures stderr handling.
    #[must_use]
    pub const fn stderr_flags(mut self, flags: StreamFlags) -> Self {
        self.stderr.set_flags(flags);
        self
    }

    /// Convenience: capture stdout lines.
    #[must_use]
    pub const fn capture_stdout(mut self) -> Self {
        self.stdout.set_flags(StreamFlags::KEEP_IN_STRING);
        self
    }

    /// Convenience: capture stderr lines.
    #[must_use]
    pub const fn capture_stderr(mut self) -> Self {
        self.stderr.set_flags(StreamFlags::KEEP_IN_STRING);
        self
    }

    /// Convenience: capture both stdout and stderr lines.
    #[must_use]
    pub const fn capture_output(self) -> Self {
        self.capture_stdout().capture_stderr()
    }

    /// Convenience: discard all output.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.stdout.set_flags(StreamFlags::BIT_BUCKET);
        self.stderr.set_flags(StreamFlags::BIT_BUCKET);
        self
    }

    /// Convenience: inherit stdout/stderr from parent.
    #[must_use]
    pub const fn inherit_stdio(mut self) -> Self {
        self.stdout.set_flags(StreamFlags::INHERIT);
        self.stderr.set_flags(StreamFlags::INHERIT);
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    // Getters for field access within the process module

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    /// Returns a reference to the working directory, if set.
    pub(super) const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    /// Returns the extra environment variables.
    pub(super) fn environment(&self) -> &[(String, String)] {
        &self.env
    }

    /// Returns a reference to the stdout configuration.
    pub(super) const fn stdout_config(&self) -> &StreamConfig {
        &self.stdout
    }

    /// Returns a reference to the stderr configuration.
    pub(super) const fn stderr_config(&self) -> &StreamConfig {
        &self.stderr
    }

    /// Returns the display name, if set.
    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
