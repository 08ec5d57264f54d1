// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution with async stream handling.

use super::builder::{CommandResult, ProcessBuilder, StreamFlags};
use crate::error::Result;
use anyhow::Context;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;
use tracing::{debug, trace};

impl ProcessBuilder {
    /// Returns the display name for logging.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program()
                    .file_stem()
                    .map_or_else(|| "process".to_string(), |s| s.to_string_lossy().into_owned())
            },
            ToString::to_string,
        )
    }

    /// Builds the full command line string for logging.
    fn command_line(&self) -> String {
        let mut parts = vec![self.program().to_string_lossy().into_owned()];
        for arg in self.args_slice() {
            if arg.contains(' ') {
                parts.push(format!("\"{arg}\""));
            } else {
                parts.push(arg.clone());
            }
        }
        parts.join(" ")
    }

    /// Converts stream flags to a Stdio configuration.
    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else if flags.contains(StreamFlags::BIT_BUCKET)
            && !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING)
        {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }

    /// Builds the tokio Command from the configured options.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.args_slice());

        if let Some(dir) = self.working_dir() {
            cmd.current_dir(dir);
        }
        for (key, value) in self.environment() {
            cmd.env(key, value);
        }

        cmd.stdin(Stdio::null());
        cmd.stdout(Self::stdio_from_flags(self.stdout_config().flags()));
        cmd.stderr(Self::stdio_from_flags(self.stderr_config().flags()));

        // Reap the child if the future is dropped mid-run
        cmd.kill_on_drop(true);

        cmd
    }

    /// Runs the process to completion.
    ///
    /// Spawns the process, streams stdout/stderr line by line according to
    /// the configured flags, and waits for exit. The exit code is recorded
    /// in the result but never treated as an error by the runner itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the process fails to spawn or its streams cannot
    /// be read.
    pub async fn run(self) -> Result<CommandResult> {
        let display_name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(dir) = self.working_dir() {
            debug!(cwd = %dir.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn: {cmd_line}"))?;

        trace!(process = %display_name, "spawned");

        let stdout_flags = self.stdout_config().flags();
        let stderr_flags = self.stderr_config().flags();

        let stdout_reader = Self::spawn_reader(
            child.stdout.take(),
            stdout_flags,
            display_name.clone(),
            "stdout",
        );
        let stderr_reader = Self::spawn_reader(
            child.stderr.take(),
            stderr_flags,
            display_name.clone(),
            "stderr",
        );

        let status = child
            .wait()
            .await
            .with_context(|| format!("Failed to wait for: {cmd_line}"))?;

        let output = Self::collect_lines(stdout_reader, stdout_flags).await;
        let error = Self::collect_lines(stderr_reader, stderr_flags).await;

        let exit_code = status.code().unwrap_or(-1);
        if exit_code != 0 {
            debug!(process = %display_name, exit_code, "nonzero exit");
        }

        trace!(process = %display_name, exit_code, "completed");

        Ok(CommandResult::new(exit_code, output, error))
    }

    /// Spawns a reader task for a stream, if one is needed.
    fn spawn_reader<R>(
        stream: Option<R>,
        flags: StreamFlags,
        process: String,
        stream_name: &'static str,
    ) -> Option<(
        tokio::task::JoinHandle<()>,
        mpsc::UnboundedReceiver<String>,
    )>
    where
        R: tokio::io::AsyncRead + Unpin + Send + 'static,
    {
        let stream = stream?;
        if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
            return None;
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut lines = BufReader::new(stream).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                if flags.contains(StreamFlags::FORWARD_TO_LOG) {
                    trace!(process = %process, stream = stream_name, %line, "output");
                }
                if flags.contains(StreamFlags::KEEP_IN_STRING) {
                    // Receiver outlives the child; a send failure just means
                    // the run was abandoned
                    let _ = tx.send(line);
                }
            }
        });

        Some((handle, rx))
    }

    /// Drains a reader task into captured lines.
    async fn collect_lines(
        reader: Option<(
            tokio::task::JoinHandle<()>,
            mpsc::UnboundedReceiver<String>,
        )>,
        flags: StreamFlags,
    ) -> Vec<String> {
        let Some((handle, mut rx)) = reader else {
            return Vec::new();
        };

        // Wait for EOF so every line is in the channel before draining
        let _ = handle.await;

        if !flags.contains(StreamFlags::KEEP_IN_STRING) {
            return Vec::new();
        }

        let mut lines = Vec::new();
        while let Ok(line) = rx.try_recv() {
            lines.push(line);
        }
        lines
    }
}
