// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for githerd using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! githerd [global options] <command>
//! branch NAME [-s] [-b] [PATH]
//! commit -m MSG [PATH]
//! status [PATH]
//! options
//! inis
//! ```

pub mod branch;
pub mod commit;
pub mod global;
pub mod status;


use crate::cli::branch::BranchArgs;
use crate::cli::commit::CommitArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::status::StatusArgs;
use clap::{Parser, Subcommand};

/// Submodule-aware git housekeeping.
#[derive(Debug, Parser)]
#[command(
    name = "githerd",
    author,
    version,
    about = "Submodule-aware git housekeeping",
    long_about = "githerd Copyright (C) 2026 githerd contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Routine branch and commit chores across a parent repository\n\
                  and all of its submodules: `githerd branch feature` puts the\n\
                  whole tree on a new branch, `githerd commit -m msg` commits\n\
                  pending changes everywhere, reattaching detached submodules\n\
                  along the way. See `githerd <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  githerd reads an optional `githerd.toml` from the current\n\
                  directory. Additional TOML files can be specified with --ini;\n\
                  those are loaded afterwards and override it. Environment\n\
                  variables prefixed with GITHERD_ override all files, and\n\
                  command-line flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by githerd.
    Inis,

    /// Moves a repository and its submodules onto a new branch.
    Branch(BranchArgs),

    /// Commits pending changes across a repository and its submodules.
    Commit(CommitArgs),

    /// Shows branch and change state across a repository and its submodules.
    Status(StatusArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
