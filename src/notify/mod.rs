// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! User-facing notices, decoupled from the operations that raise them.
//!
//! Git operations report noteworthy events (uncommitted changes, failed
//! commands, commit summaries) through a [`Notify`] handle passed in by the
//! caller. The console implementation prints; the silent one is for machine
//! output modes; the recording one collects notices for inspection.

use std::sync::{Mutex, PoisonError};

/// Sink for user-facing notices raised during git operations.
pub trait Notify: Send + Sync {
    /// Something went wrong or needs attention.
    fn warn(&self, text: &str);

    /// A step succeeded with a summary worth surfacing.
    fn okay(&self, text: &str);

    /// Verbatim passthrough, e.g. captured command output.
    fn std(&self, text: &str);
}

/// Prints notices to the terminal.
///
/// Warnings go to stderr with a `!` marker, successes to stdout with a `+`
/// marker, passthrough text to stdout unadorned.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn warn(&self, text: &str) {
        eprintln!("! {text}");
    }

    fn okay(&self, text: &str) {
        println!("+ {text}");
    }

    fn std(&self, text: &str) {
        println!("{text}");
    }
}

/// Discards all notices. Used when stdout carries machine-readable output.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notify for SilentNotifier {
    fn warn(&self, _text: &str) {}

    fn okay(&self, _text: &str) {}

    fn std(&self, _text: &str) {}
}

/// Kind of a recorded notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Warn,
    Okay,
    Std,
}

/// A single recorded notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Collects notices instead of printing them.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, kind: NoticeKind, text: &str) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                kind,
                text: text.to_string(),
            });
    }
}

impl Notify for RecordingNotifier {
    fn warn(&self, text: &str) {
        self.push(NoticeKind::Warn, text);
    }

    fn okay(&self, text: &str) {
        self.push(NoticeKind::Okay, text);
    }

    fn std(&self, text: &str) {
        self.push(NoticeKind::Std, text);
    }
}
