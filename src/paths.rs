//! Home directory expansion

use std::env;
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the current user's home directory.
///
/// Inputs without the shorthand pass through unchanged, as does the raw
/// input when `HOME` is unset. Never touches the filesystem.
pub fn expand_user(raw: &str) -> PathBuf {
    let home = env::var_os("HOME").map(PathBuf::from);
    expand_with_home(raw, home.as_deref())
}

fn expand_with_home(raw: &str, home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if raw == "~" => home.to_path_buf(),
        Some(home) => match raw.strip_prefix("~/") {
            Some(rest) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}
