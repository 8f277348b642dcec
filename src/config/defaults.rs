//! Built-in defaults (layer 0)
//!
//! Well-known names and hardcoded default values shared by all layers.

/// Well-known configuration file location.
pub const CONFIG_FILE: &str = "~/.config/lvm-be.cfg";

/// Environment variable that enables debug mode.
pub const DEBUG_ENV_VAR: &str = "LBE_DEBUG";

/// Section of the configuration file read by the resolver.
pub const FILE_SECTION: &str = "lbe";

/// Key within [`FILE_SECTION`] holding the debug toggle.
pub const DEBUG_KEY: &str = "debug";

/// Built-in default configuration values
#[derive(Debug, Clone)]
pub struct Defaults {
    /// Debug logging (default: false)
    pub debug: bool,

    /// Configuration file location (default: `~/.config/lvm-be.cfg`)
    pub config_file: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            debug: false,
            config_file: CONFIG_FILE.to_string(),
        }
    }
}

/// Decode a string-encoded boolean.
///
/// `1`/`yes`/`true`/`on` and `0`/`no`/`false`/`off` are accepted,
/// case-insensitive. Every layer decodes booleans with this one rule.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
