//! Linux LVM Boot Environments
//!
//! Layered configuration resolution for the `lbe` tool: a debug flag
//! and a configuration-file location resolved from the `LBE_DEBUG`
//! environment variable, CLI flags, and an on-disk config file, in that
//! order. The debug flag merges with a monotonic OR across layers.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod paths;

pub use cli::{CliArgs, UsageError};
pub use config::{ConfigError, ConfigOrigin, EffectiveConfig, FileOutcome, FileSettings};
