// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!              Public API
//!  status.rs  submodule.rs  branch.rs  commit.rs
//!      \          \            /          /
//!       v          v          v          v
//!      ,--------------------------------------,
//!      |    plan.rs (Step, run_plan)          |
//!      '-----------+--------------+-----------'
//!                  |              |
//!                  v              v
//!           interpret.rs       exec.rs
//!           (output text    (ProcessBuilder
//!            contracts)      --> git CLI)
//! ```
//!
//! Every substring of git's human-readable output this crate depends on
//! lives in `interpret`, nowhere else. `exec` is the single place a `git`
//! process is spawned.
//!
//! A failed git command is not a Rust error: it becomes a
//! [`report::RepoOutcome`] naming the command, while `Result` is reserved
//! for environment faults (no git binary, unreadable streams).

pub mod branch;
pub mod commit;
mod exec;
pub mod interpret;
pub mod plan;
pub mod report;
pub mod status;
pub mod submodule;
