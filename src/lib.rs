// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |         branch / commit / status
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '------------+--------------'
//!                           |
//!                           v
//!                          git
//!              status / submodule / branch
//!               commit  -> plan -> exec
//!                           |
//!   +-----------------------------------------+
//!   |  process   async spawn, line capture    |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, notify    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod notify;
pub mod process;
