// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command execution.
//!
//! ```text
//! exec.rs --> ProcessBuilder --> git (captured stdout/stderr)
//! ```

use crate::error::Result;
use crate::process::{CommandResult, ProcessBuilder, StreamFlags};
use std::path::Path;

/// Runs a git command and captures both streams line by line.
///
/// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0` so an
/// unattended run can never hang on a credential prompt. The captured
/// lines also flow to the trace log.
///
/// A nonzero git exit is not an error here; callers judge the result by
/// its streams.
pub(super) async fn git_output(args: &[&str], cwd: &Path) -> Result<CommandResult> {
    ProcessBuilder::which("git")?
        .args(args)
        .cwd(cwd)
        .env("GCM_INTERACTIVE", "never")
        .env("GIT_TERMINAL_PROMPT", "0")
        .stdout_flags(StreamFlags::KEEP_IN_STRING | StreamFlags::FORWARD_TO_LOG)
        .stderr_flags(StreamFlags::KEEP_IN_STRING | StreamFlags::FORWARD_TO_LOG)
        .run()
        .await
}
