//! Configuration file reading (layer 3)
//!
//! Loads the `[lbe]` table of an INI-style configuration file into a
//! string key/value store. A missing file is a normal state; a file
//! that exists but does not parse is an error.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::defaults::{parse_bool, DEBUG_KEY, FILE_SECTION};
use super::effective::ConfigError;

/// Result of a configuration file read.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file existed and parsed; settings from the `[lbe]` table.
    Found(FileSettings),

    /// No file at the given path.
    NotFound,
}

/// Key/value settings from the `[lbe]` table, over a defaults layer.
///
/// The defaults layer is supplied independently of file contents: an
/// absent key resolves through it, an explicit value always wins.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    values: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl FileSettings {
    fn new(path: PathBuf, values: BTreeMap<String, String>) -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert(DEBUG_KEY.to_string(), "false".to_string());
        Self {
            path,
            values,
            defaults,
        }
    }

    /// Look up a key, falling back to the defaults layer.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .or_else(|| self.defaults.get(key))
            .map(String::as_str)
    }

    /// Decode a boolean key.
    ///
    /// Absent keys resolve through the defaults layer; a value that is
    /// not a recognizable boolean is malformed.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        match self.get(key) {
            None => Ok(false),
            Some(raw) => parse_bool(raw).ok_or_else(|| ConfigError::Malformed {
                path: self.path.clone(),
                message: format!("{key}: not a boolean: '{raw}'"),
            }),
        }
    }
}

/// Read the configuration file at `path`.
///
/// Returns [`FileOutcome::NotFound`] when no file exists there. Unknown
/// sections and keys are ignored.
pub fn load(path: &Path) -> Result<FileOutcome, ConfigError> {
    if !path.exists() {
        return Ok(FileOutcome::NotFound);
    }

    let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let root: toml::Value = toml::from_str(&contents).map_err(|err| ConfigError::Malformed {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let mut values = BTreeMap::new();
    if let Some(section) = root.get(FILE_SECTION).and_then(toml::Value::as_table) {
        for (key, value) in section {
            if let Some(encoded) = scalar_to_string(value) {
                values.insert(key.clone(), encoded);
            }
        }
    }

    Ok(FileOutcome::Found(FileSettings::new(
        path.to_path_buf(),
        values,
    )))
}

/// String-encode a scalar value; nested tables and arrays are ignored.
fn scalar_to_string(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Datetime(dt) => Some(dt.to_string()),
        toml::Value::Table(_) | toml::Value::Array(_) => None,
    }
}
