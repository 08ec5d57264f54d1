// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered git command plans and their execution.
//!
//! ```text
//! [Step, Step, Step]  --run_plan-->  Completed
//!                                    Failed { command }   (stops at first)
//! ```
//!
//! A step without a classifier fails iff its error stream is non-empty.
//! Commands whose success signature differs (git confirms branch switches
//! on stderr) attach a classifier from [`super::interpret`].
//!
//! The first failure warns the caller-supplied notice and abandons the
//! remaining steps. Already-executed steps are left in place; there is no
//! rollback.

use super::exec::git_output;
use crate::error::Result;
use crate::notify::Notify;
use crate::process::CommandResult;
use std::path::Path;
use tracing::debug;

/// How a classifier judged one executed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepVerdict {
    /// Step succeeded.
    Ok,
    /// Step succeeded, with a line worth surfacing to the user.
    OkNote(String),
    /// Step failed.
    Failed,
}

/// One git command in a plan, optionally with a custom success classifier.
#[derive(Debug, Clone)]
pub struct Step {
    args: Vec<String>,
    classify: Option<fn(&CommandResult) -> StepVerdict>,
}

impl Step {
    /// A step judged by the default rule: empty error stream is success.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            classify: None,
        }
    }

    /// A step judged by `classify` instead of the default rule.
    pub fn classified<I, S>(args: I, classify: fn(&CommandResult) -> StepVerdict) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            classify: Some(classify),
        }
    }

    /// The git arguments of this step.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether a custom classifier is attached.
    #[must_use]
    pub const fn has_classifier(&self) -> bool {
        self.classify.is_some()
    }

    /// The full command line, for reports and logs.
    #[must_use]
    pub fn command_line(&self) -> String {
        format!("git {}", self.args.join(" "))
    }
}

/// Result of running a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Every step succeeded.
    Completed,
    /// A step failed; `command` is its command line. Later steps were not
    /// attempted.
    Failed {
        command: String,
    },
}

/// Executes `steps` in order against `dir`.
///
/// On the first failed step, emits `failure_notice` through `notify` and
/// returns which command failed. Success notes from classifiers are
/// surfaced as they occur.
///
/// # Errors
///
/// Returns an error only for environment faults (git missing, spawn
/// failure); a failing git command is a [`PlanOutcome::Failed`].
pub async fn run_plan(
    steps: &[Step],
    dir: &Path,
    failure_notice: &str,
    notify: &dyn Notify,
) -> Result<PlanOutcome> {
    for step in steps {
        let args: Vec<&str> = step.args.iter().map(String::as_str).collect();
        let result = git_output(&args, dir).await?;

        let verdict = match step.classify {
            Some(classify) => classify(&result),
            None => {
                if result.error().is_empty() {
                    StepVerdict::Ok
                } else {
                    StepVerdict::Failed
                }
            }
        };

        match verdict {
            StepVerdict::Ok => {}
            StepVerdict::OkNote(note) => notify.okay(&note),
            StepVerdict::Failed => {
                let command = step.command_line();
                debug!(cmd = %command, dir = %dir.display(), "step failed");
                notify.warn(failure_notice);
                return Ok(PlanOutcome::Failed { command });
            }
        }
    }

    Ok(PlanOutcome::Completed)
}
