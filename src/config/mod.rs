//! Configuration resolution
//!
//! Implements the 3-layer resolution for a single invocation:
//! 1. `LBE_DEBUG` environment variable
//! 2. CLI flags (`--debug`, `--config`)
//! 3. Config file `[lbe]` section (default `~/.config/lvm-be.cfg`)
//!
//! The debug flag OR-merges across layers; the file location is fixed
//! by the CLI layer before the file is read.

pub mod defaults;
pub mod effective;
pub mod file;

pub use defaults::{parse_bool, Defaults, CONFIG_FILE, DEBUG_ENV_VAR, DEBUG_KEY, FILE_SECTION};
pub use effective::{ConfigError, ConfigOrigin, EffectiveConfig};
pub use file::{FileOutcome, FileSettings};
