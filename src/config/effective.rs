//! Effective configuration for one invocation
//!
//! Resolution folds the three layers in a fixed order and records the
//! origin of every value that contributed. The debug flag merges with a
//! monotonic OR: once a layer enables it, no later layer can turn it
//! off. Each call builds a fresh struct; there is no shared state.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{self, CliArgs, UsageError};
use crate::paths;

use super::defaults::{parse_bool, Defaults, DEBUG_KEY};
use super::file::{self, FileOutcome};

/// Origin of a resolved configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigOrigin {
    /// Built-in default.
    Default,
    /// `LBE_DEBUG` environment variable.
    Environment,
    /// Command-line flag.
    CommandLine,
    /// Configuration file.
    File,
}

impl ConfigOrigin {
    /// Human-readable name for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigOrigin::Default => "default",
            ConfigOrigin::Environment => "environment",
            ConfigOrigin::CommandLine => "command line",
            ConfigOrigin::File => "config file",
        }
    }
}

impl std::fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolution failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Bad CLI input.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The configuration file exists but could not be read.
    #[error("{}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// The configuration file exists but could not be parsed.
    #[error("{}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}

/// The resolved settings for one run.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    /// Debug logging enabled.
    pub debug: bool,

    /// Layers that enabled the debug flag, in consultation order.
    pub debug_sources: Vec<ConfigOrigin>,

    /// Expanded configuration file location.
    pub config_file: PathBuf,

    /// Where the configuration file location came from.
    pub config_file_origin: ConfigOrigin,

    /// Whether the configuration file existed and parsed.
    pub file_found: bool,
}

impl EffectiveConfig {
    /// Resolve from the environment and raw CLI arguments.
    ///
    /// `env_debug` is the value of `LBE_DEBUG`, if set. `--help` has no
    /// effect here; callers that honor it parse first and use
    /// [`EffectiveConfig::resolve_parsed`].
    pub fn resolve(env_debug: Option<&str>, argv: &[String]) -> Result<Self, ConfigError> {
        let args = cli::parse(argv)?;
        Self::resolve_parsed(env_debug, &args)
    }

    /// Resolve from already-parsed CLI arguments.
    pub fn resolve_parsed(env_debug: Option<&str>, args: &CliArgs) -> Result<Self, ConfigError> {
        let defaults = Defaults::default();

        // Layer 1: environment.
        let mut debug = defaults.debug;
        let mut debug_sources = Vec::new();
        if env_debug.and_then(parse_bool).unwrap_or(false) {
            debug = true;
            debug_sources.push(ConfigOrigin::Environment);
        }

        // Layer 2: CLI flags. The file location is fixed here; the file
        // itself cannot move it.
        if args.debug {
            debug = true;
            debug_sources.push(ConfigOrigin::CommandLine);
        }
        let (raw_path, config_file_origin) = match args.config_file.as_deref() {
            Some(path) => (path, ConfigOrigin::CommandLine),
            None => (defaults.config_file.as_str(), ConfigOrigin::Default),
        };
        let config_file = paths::expand_user(raw_path);

        // Layer 3: configuration file.
        let mut file_found = false;
        match file::load(&config_file)? {
            FileOutcome::Found(settings) => {
                file_found = true;
                if settings.get_bool(DEBUG_KEY)? {
                    debug = true;
                    debug_sources.push(ConfigOrigin::File);
                }
            }
            FileOutcome::NotFound => {}
        }

        Ok(Self {
            debug,
            debug_sources,
            config_file,
            config_file_origin,
            file_found,
        })
    }

    /// Serialize to JSON for the debug dump.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
