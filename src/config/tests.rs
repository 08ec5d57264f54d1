// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.global.log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert!(config.repo.root.is_none());
    assert!(!config.branch.stash);
    assert!(!config.branch.sandbox);
    assert_eq!(config.branch.sandbox_suffix, "sandbox");
    assert_eq!(config.commit.recovery_branch, "tmp");
}

#[test]
fn test_config_parse() {
    let toml = r#"
[global]
log_level = 4
log_file = "herd.log"

[repo]
root = "/src/tree"

[branch]
stash = true
sandbox = true
sandbox_suffix = "scratch"

[commit]
recovery_branch = "rescue"
"#;

    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.log_level, LogLevel::DEBUG);
    assert_eq!(config.global.log_file, Some(PathBuf::from("herd.log")));
    assert_eq!(config.repo.root, Some(PathBuf::from("/src/tree")));
    assert!(config.branch.stash);
    assert!(config.branch.sandbox);
    assert_eq!(config.branch.sandbox_suffix, "scratch");
    assert_eq!(config.commit.recovery_branch, "rescue");
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let toml = r#"
[global]
log_level = 3

[unknown_section]
foo = "bar"
"#;
    let result = Config::parse(toml);
    assert!(result.is_err(), "unknown sections should be rejected");
}

#[test]
fn test_deny_unknown_fields_in_section() {
    let toml = r#"
[branch]
sandbox_sufix = "typo"
"#;
    let result = Config::parse(toml);
    assert!(result.is_err(), "typoed keys should be rejected");
}

#[test]
fn test_out_of_range_log_level_rejected() {
    let result = Config::parse("[global]\n log_level = 9");
    assert!(result.is_err(), "log level above 5 should be rejected");
}

#[test]
fn test_empty_sandbox_suffix_rejected() {
    let result = Config::parse("[branch]\n sandbox_suffix = \"\"");
    let err = result.expect_err("empty sandbox_suffix should be rejected");
    let msg = err.to_string();
    assert!(
        msg.contains("sandbox_suffix"),
        "error should name the key: {msg}"
    );
}

#[test]
fn test_empty_recovery_branch_rejected() {
    let result = Config::parse("[commit]\n recovery_branch = \"\"");
    let err = result.expect_err("empty recovery_branch should be rejected");
    let msg = err.to_string();
    assert!(
        msg.contains("recovery_branch"),
        "error should name the key: {msg}"
    );
}

#[test]
fn test_format_options_lists_every_key() {
    let formatted = Config::default().format_options().join("\n");

    for key in [
        "global.log_level",
        "global.file_log_level",
        "global.log_file",
        "repo.root",
        "branch.stash",
        "branch.sandbox",
        "branch.sandbox_suffix",
        "commit.recovery_branch",
    ] {
        assert!(formatted.contains(key), "missing key in dump: {key}");
    }
}

#[test]
fn test_format_options_aligned_and_deterministic() {
    let config = Config::default();

    let result1 = config.format_options();
    let result2 = config.format_options();
    assert_eq!(
        result1, result2,
        "format_options output should be deterministic"
    );

    // Every '=' sits in the same column
    let columns: Vec<_> = result1
        .iter()
        .map(|line| line.find('=').expect("every line has a separator"))
        .collect();
    assert!(
        columns.windows(2).all(|w| w[0] == w[1]),
        "keys should be padded to a common width: {result1:?}"
    );
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[branch]
stash = true

[repo]
root = "/test/tree"
"#
    )
    .expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert!(config.branch.stash);
    assert_eq!(config.repo.root, Some(PathBuf::from("/test/tree")));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/config.toml");

    // add_toml_file returns Self, but build() should fail for required files
    let build_result = loader.build();
    assert!(build_result.is_err());
}

#[test]
fn test_config_loader_add_toml_file_invalid_toml() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "this is not valid toml {{{{{{").expect("failed to write");

    let loader = ConfigLoader::new().add_toml_file(file.path());

    let result = loader.build();
    assert!(result.is_err(), "build should fail with invalid TOML");
}

#[test]
fn test_config_loader_with_env_prefix() {
    // Set env var for this test
    // SAFETY: This test runs in isolation (nextest runs each test in its own process)
    unsafe {
        std::env::set_var("HERDTEST_BRANCH__SANDBOX", "true");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[branch]\n sandbox = false")
        .with_env_prefix("HERDTEST")
        .build()
        .expect("build should succeed");

    // Env var should override TOML value
    assert!(config.branch.sandbox, "env var should override TOML value");

    // Cleanup
    // SAFETY: Same as above
    unsafe {
        std::env::remove_var("HERDTEST_BRANCH__SANDBOX");
    }
}

#[test]
fn test_config_loader_set_override() {
    let config = ConfigLoader::new()
        .add_toml_str("[branch]\n stash = false")
        .set("branch.stash", true)
        .expect("set should succeed")
        .build()
        .expect("build should succeed");

    assert!(config.branch.stash, "set override should take effect");
}

#[test]
fn test_config_loader_layered_sources() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    // First layer: file
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[branch]
stash = true
sandbox_suffix = "scratch"
"#
    )
    .expect("failed to write");

    // Second layer: string (should override)
    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .add_toml_str(
            r#"
[branch]
stash = false

[commit]
recovery_branch = "rescue"
"#,
        )
        .build()
        .expect("build should succeed");

    // Verify layering
    assert!(!config.branch.stash, "string should override file");
    assert_eq!(
        config.branch.sandbox_suffix, "scratch",
        "file value should persist"
    );
    assert_eq!(
        config.commit.recovery_branch, "rescue",
        "string should add new value"
    );
}

#[test]
fn test_config_loader_tracks_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[branch]\n stash = true")
        .add_toml_file_optional("/nonexistent/optional.toml");

    let loaded_files = loader.loaded_files();
    assert_eq!(
        loaded_files.len(),
        1,
        "missing optional files should not be tracked"
    );
    assert_eq!(loaded_files[0].0, "string");
}

#[test]
fn test_config_loader_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("[branch]\n stash = true")
        .add_toml_str("[commit]\n recovery_branch = \"rescue\"");

    let formatted = loader.format_loaded_files();
    assert_eq!(formatted.len(), 2);
    assert!(formatted[0].starts_with("1. [string]"), "{formatted:?}");
    assert!(formatted[1].starts_with("2. [string]"), "{formatted:?}");
}

#[test]
fn test_config_loader_build_deserialization_error() {
    // Invalid type for a field
    let result = ConfigLoader::new()
        .add_toml_str("[branch]\n stash = \"not a boolean\"")
        .build();

    assert!(result.is_err(), "build should fail with type mismatch");
    let err_str = result.unwrap_err().to_string();
    assert!(
        err_str.contains("stash") || err_str.contains("invalid type"),
        "error should mention the problematic field: {err_str}"
    );
}

#[test]
fn test_config_loader_default_impl() {
    let config1 = ConfigLoader::new().build().expect("build should succeed");
    let config2 = ConfigLoader::default()
        .build()
        .expect("build should succeed");

    assert_eq!(config1.branch.sandbox_suffix, config2.branch.sandbox_suffix);
    assert_eq!(config1.commit.recovery_branch, config2.commit.recovery_branch);
}
