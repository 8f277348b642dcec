//! Layered resolution integration tests
//!
//! End-to-end checks of the env → CLI → file resolution over real
//! temporary files, plus the exit-status mapping of the application
//! layer.

use std::fs;
use std::io::Write;

use lvm_be::app;
use lvm_be::config::{self, ConfigError, ConfigOrigin, EffectiveConfig, FileOutcome};
use tempfile::{NamedTempFile, TempDir};

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    write!(file, "{}", contents).expect("write config");
    file
}

// =============================================================================
// Environment layer
// =============================================================================

#[test]
fn test_env_grid_with_no_flags_and_no_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.cfg");
    let args = argv(&["--config", path.to_str().unwrap()]);

    for (env, expected) in [(None, false), (Some("false"), false), (Some("true"), true)] {
        let config = EffectiveConfig::resolve(env, &args).expect("resolve");
        assert_eq!(config.debug, expected, "env={env:?}");
    }
}

// =============================================================================
// CLI layer
// =============================================================================

#[test]
fn test_debug_flag_always_wins() {
    let file = config_file("[lbe]\ndebug = false\n");
    let args = argv(&["--debug", "--config", file.path().to_str().unwrap()]);

    for env in [None, Some("false"), Some("true")] {
        let config = EffectiveConfig::resolve(env, &args).expect("resolve");
        assert!(config.debug, "--debug must win for env={env:?}");
    }
}

#[test]
fn test_custom_path_is_used_verbatim() {
    let file = config_file("[lbe]\ndebug = true\n");
    let path = file.path().to_str().unwrap();
    let config = EffectiveConfig::resolve(None, &argv(&["--config", path])).expect("resolve");

    assert_eq!(config.config_file, file.path());
    assert_eq!(config.config_file_origin, ConfigOrigin::CommandLine);
    assert!(config.debug, "the file at the custom path must be read");

    // The reader sees exactly that path.
    let outcome = config::file::load(&config.config_file).expect("load");
    assert!(matches!(outcome, FileOutcome::Found(_)));
}

// =============================================================================
// File layer
// =============================================================================

#[test]
fn test_file_alone_enables_debug() {
    let file = config_file("[lbe]\ndebug = true\n");
    let args = argv(&["--config", file.path().to_str().unwrap()]);
    let config = EffectiveConfig::resolve(None, &args).expect("resolve");

    assert!(config.debug);
    assert_eq!(config.debug_sources, vec![ConfigOrigin::File]);
}

#[test]
fn test_round_trip_explicit_false() {
    let file = config_file("[lbe]\ndebug = false\n");
    let args = argv(&["--config", file.path().to_str().unwrap()]);
    let config = EffectiveConfig::resolve(None, &args).expect("resolve");

    assert!(!config.debug);
    assert!(config.file_found);
}

#[test]
fn test_missing_file_resolves_with_earlier_layers() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.cfg");
    let args = argv(&["--config", path.to_str().unwrap()]);
    let config = EffectiveConfig::resolve(Some("true"), &args).expect("resolve");

    assert!(config.debug);
    assert!(!config.file_found);
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("[lbe\ndebug =\n");
    let args = argv(&["--config", file.path().to_str().unwrap()]);
    let err = EffectiveConfig::resolve(None, &args).unwrap_err();

    assert!(matches!(err, ConfigError::Malformed { .. }));
}

// =============================================================================
// Default path and home expansion
// =============================================================================

#[test]
fn test_default_path_expands_under_home() {
    // HOME is process-global, so both scenarios run in this one test.
    let home = TempDir::new().expect("tempdir");
    std::env::set_var("HOME", home.path());

    // No file under the fresh HOME: resolution succeeds with defaults.
    let config = EffectiveConfig::resolve(None, &[]).expect("resolve");
    assert_eq!(
        config.config_file,
        home.path().join(".config/lvm-be.cfg"),
        "default path must expand under HOME"
    );
    assert_eq!(config.config_file_origin, ConfigOrigin::Default);
    assert!(!config.file_found);
    assert!(!config.debug);

    // Now the well-known file exists and enables debug on its own.
    fs::create_dir_all(home.path().join(".config")).expect("mkdir");
    fs::write(
        home.path().join(".config/lvm-be.cfg"),
        "[lbe]\ndebug = true\n",
    )
    .expect("write config");

    let config = EffectiveConfig::resolve(None, &[]).expect("resolve");
    assert!(config.file_found);
    assert!(config.debug);
    assert_eq!(config.debug_sources, vec![ConfigOrigin::File]);
}

// =============================================================================
// Exit status mapping
// =============================================================================

#[test]
fn test_missing_file_exits_zero() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("absent.cfg");
    assert_eq!(
        app::run(&argv(&["--config", path.to_str().unwrap()])),
        app::EXIT_OK
    );
}

#[test]
fn test_malformed_file_exits_one() {
    let file = config_file("not = [valid\n");
    assert_eq!(
        app::run(&argv(&["--config", file.path().to_str().unwrap()])),
        app::EXIT_CONFIG
    );
}

#[test]
fn test_usage_error_exits_two() {
    assert_eq!(app::run(&argv(&["--bogus"])), app::EXIT_USAGE);
    assert_eq!(app::run(&argv(&["stray"])), app::EXIT_USAGE);
}

#[test]
fn test_help_exits_zero() {
    assert_eq!(app::run(&argv(&["--help"])), app::EXIT_OK);
    assert_eq!(app::run(&argv(&["-h"])), app::EXIT_OK);
}
