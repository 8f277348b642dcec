//! Application entry
//!
//! Maps resolution outcomes to a process exit status. This is the only
//! place exit codes are decided.

use std::env;

use crate::cli;
use crate::config::{ConfigError, EffectiveConfig, DEBUG_ENV_VAR};
use crate::logging;

/// Successful resolution, including a missing config file.
pub const EXIT_OK: i32 = 0;

/// Configuration file exists but could not be read or parsed.
pub const EXIT_CONFIG: i32 = 1;

/// Bad CLI input.
pub const EXIT_USAGE: i32 = 2;

/// Run one invocation and return its exit status.
pub fn run(argv: &[String]) -> i32 {
    let args = match cli::parse(argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("lbe: {err}");
            eprint!("{}", cli::usage());
            return EXIT_USAGE;
        }
    };

    if args.help {
        print!("{}", cli::usage());
        return EXIT_OK;
    }

    let env_debug = env::var(DEBUG_ENV_VAR).ok();
    let config = match EffectiveConfig::resolve_parsed(env_debug.as_deref(), &args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("lbe: {err}");
            return match err {
                ConfigError::Usage(_) => EXIT_USAGE,
                ConfigError::Io { .. } | ConfigError::Malformed { .. } => EXIT_CONFIG,
            };
        }
    };

    logging::init(config.debug);
    for origin in &config.debug_sources {
        tracing::debug!("debug enabled from {}", origin);
    }
    if config.file_found {
        tracing::debug!(
            "config file {} ({})",
            config.config_file.display(),
            config.config_file_origin
        );
    } else {
        tracing::debug!("config file {} not found", config.config_file.display());
    }
    if let Ok(dump) = config.to_json() {
        tracing::debug!("effective config: {}", dump);
    }

    EXIT_OK
}
