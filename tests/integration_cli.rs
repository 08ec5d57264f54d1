// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command handlers.
//!
//! Drives the cmd handlers the way main does: parsed arguments plus a
//! loaded configuration, against real temporary repositories.

use clap::Parser;
use githerd::cli::branch::BranchArgs;
use githerd::cli::commit::CommitArgs;
use githerd::cli::status::StatusArgs;
use githerd::cli::{Cli, Command};
use githerd::cmd::branch::run_branch_command;
use githerd::cmd::commit::run_commit_command;
use githerd::cmd::status::run_status_command;
use githerd::config::Config;
use std::fs;
use std::path::Path;
use std::process::Command as Process;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> bool {
    Process::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Helper to capture stdout of a git command
fn git_stdout(args: &[&str], cwd: &Path) -> String {
    let output = Process::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create an initialized git repo with an initial commit, on branch `main`
fn init_test_repo_with_commit(dir: &Path) {
    assert!(run_git(&["init", "-q", "-b", "main"], dir));
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    fs::write(dir.join("README.md"), "# Test").unwrap();
    run_git(&["add", "."], dir);
    run_git(&["commit", "-m", "Initial commit"], dir);
}

fn parse_branch(argv: &[&str]) -> BranchArgs {
    let cli = Cli::try_parse_from(argv).unwrap();
    match cli.command {
        Some(Command::Branch(args)) => args,
        _ => panic!("expected branch command"),
    }
}

fn parse_commit(argv: &[&str]) -> CommitArgs {
    let cli = Cli::try_parse_from(argv).unwrap();
    match cli.command {
        Some(Command::Commit(args)) => args,
        _ => panic!("expected commit command"),
    }
}

fn parse_status(argv: &[&str]) -> StatusArgs {
    let cli = Cli::try_parse_from(argv).unwrap();
    match cli.command {
        Some(Command::Status(args)) => args,
        _ => panic!("expected status command"),
    }
}

// =============================================================================
// branch handler
// =============================================================================

#[tokio::test]
async fn cli_branch_handler_end_to_end() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let path = temp.path().display().to_string();

    let args = parse_branch(&["githerd", "branch", "feature", "--json", &path]);
    let config = Config::default();

    let success = run_branch_command(&args, &config).await.unwrap();
    assert!(success);
    assert_eq!(git_stdout(&["branch", "--show-current"], temp.path()), "feature");
}

#[tokio::test]
async fn cli_branch_handler_sandbox_from_config() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let path = temp.path().display().to_string();

    // No -b flag; the config turns the sandbox branch on
    let args = parse_branch(&["githerd", "branch", "feature", "--json", &path]);
    let config = Config::parse("[branch]\nsandbox = true\nsandbox_suffix = \"scratch\"").unwrap();

    let success = run_branch_command(&args, &config).await.unwrap();
    assert!(success);
    assert_eq!(
        git_stdout(&["branch", "--show-current"], temp.path()),
        "feature/scratch"
    );
}

#[tokio::test]
async fn cli_branch_handler_reports_failure() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    run_git(&["branch", "feature"], temp.path());
    let path = temp.path().display().to_string();

    let args = parse_branch(&["githerd", "branch", "feature", "--json", &path]);
    let config = Config::default();

    let success = run_branch_command(&args, &config).await.unwrap();
    assert!(!success);
}

// =============================================================================
// commit handler
// =============================================================================

#[tokio::test]
async fn cli_commit_handler_end_to_end() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    fs::write(temp.path().join("new.txt"), "pending").unwrap();
    let path = temp.path().display().to_string();

    let args = parse_commit(&["githerd", "commit", "-m", "tidy up", "--json", &path]);
    let config = Config::default();

    let success = run_commit_command(&args, &config).await.unwrap();
    assert!(success);
    assert_eq!(git_stdout(&["log", "-1", "--format=%s"], temp.path()), "tidy up");
    assert!(git_stdout(&["status", "--porcelain"], temp.path()).is_empty());
}

// =============================================================================
// status handler
// =============================================================================

#[tokio::test]
async fn cli_status_handler_runs() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());
    let path = temp.path().display().to_string();

    let args = parse_status(&["githerd", "status", "--json", &path]);
    let config = Config::default();

    run_status_command(&args, &config).await.unwrap();
}

// =============================================================================
// root resolution
// =============================================================================

#[tokio::test]
async fn cli_handler_missing_root_errors() {
    let args = parse_branch(&["githerd", "branch", "feature", "/nonexistent/tree/xyz"]);
    let config = Config::default();

    let err = run_branch_command(&args, &config).await.unwrap_err();
    assert!(err.to_string().contains("repository not found"));
}

#[tokio::test]
async fn cli_handler_root_from_config() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    // No path argument; repo.root supplies it
    let args = parse_status(&["githerd", "status", "--json"]);
    let mut config = Config::default();
    config.repo.root = Some(temp.path().to_path_buf());

    run_status_command(&args, &config).await.unwrap();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn cli_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["githerd", "-l", "9", "status"]);
    assert!(result.is_err());
}

#[test]
fn cli_no_command_parses_as_none() {
    let cli = Cli::try_parse_from(["githerd"]).unwrap();
    assert!(cli.command.is_none());
}
