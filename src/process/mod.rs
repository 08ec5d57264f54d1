// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and output capture.
//!
//! ```text
//! ProcessBuilder::which("git")
//!   .args() .cwd() .env() .capture_output()
//!   .run()
//!       --> tokio::process::Command
//!           stream stdout/stderr line by line
//!       --> CommandResult { exit_code, output, error }
//! ```
//!
//! The runner records the exit code for diagnostics but never judges it:
//! callers classify success from the captured output and error lines.

pub mod builder;
mod runner;

pub use builder::{CommandResult, ProcessBuilder, StreamFlags};
