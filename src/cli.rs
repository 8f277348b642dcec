//! Command-line argument parsing
//!
//! A fixed flag-definition table consumed by a sequential scanner. The
//! usage text renders from the same table.

use crate::config::CONFIG_FILE;

/// One recognized flag: name, alias, arity, default.
struct FlagSpec {
    long: &'static str,
    short: &'static str,
    takes_value: bool,
    value_name: &'static str,
    default: Option<&'static str>,
    help: &'static str,
}

const FLAGS: &[FlagSpec] = &[
    FlagSpec {
        long: "--debug",
        short: "-d",
        takes_value: false,
        value_name: "",
        default: None,
        help: "enable debug logs",
    },
    FlagSpec {
        long: "--config",
        short: "-f",
        takes_value: true,
        value_name: "<path>",
        default: Some(CONFIG_FILE),
        help: "config filename",
    },
    FlagSpec {
        long: "--help",
        short: "-h",
        takes_value: false,
        value_name: "",
        default: None,
        help: "show this help and exit",
    },
];

/// Bad CLI input. Always fatal for the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unrecognized argument: {0}")]
    Unrecognized(String),

    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("{0} requires a non-empty value")]
    EmptyValue(&'static str),
}

/// Parsed command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// `--debug` / `-d` was given.
    pub debug: bool,

    /// `--config` / `-f` value, trimmed. `None` means the well-known
    /// default applies.
    pub config_file: Option<String>,

    /// `--help` / `-h` was given.
    pub help: bool,
}

/// Parse an argument vector against the flag table.
///
/// Later occurrences of a value flag win. Positional arguments are not
/// accepted. No global state is touched.
pub fn parse(argv: &[String]) -> Result<CliArgs, UsageError> {
    let mut args = CliArgs::default();

    let mut iter = argv.iter();
    while let Some(arg) = iter.next() {
        let (name, inline_value) = match arg.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (arg.as_str(), None),
        };

        let Some(spec) = FLAGS
            .iter()
            .find(|spec| spec.long == name || spec.short == name)
        else {
            return Err(UsageError::Unrecognized(arg.clone()));
        };

        if spec.takes_value {
            let raw = match inline_value {
                Some(value) => value,
                None => iter
                    .next()
                    .ok_or(UsageError::MissingValue(spec.long))?
                    .as_str(),
            };
            let value = raw.trim();
            if value.is_empty() {
                return Err(UsageError::EmptyValue(spec.long));
            }
            match spec.long {
                "--config" => args.config_file = Some(value.to_string()),
                _ => {}
            }
        } else if inline_value.is_some() {
            return Err(UsageError::Unrecognized(arg.clone()));
        } else {
            match spec.long {
                "--debug" => args.debug = true,
                "--help" => args.help = true,
                _ => {}
            }
        }
    }

    Ok(args)
}

/// Render usage text from the flag table.
pub fn usage() -> String {
    let mut text = String::from(
        "Linux LVM boot environments\n\nUsage: lbe [OPTIONS]\n\nOptions:\n",
    );
    for spec in FLAGS {
        let name = if spec.takes_value {
            format!("{}, {} {}", spec.short, spec.long, spec.value_name)
        } else {
            format!("{}, {}", spec.short, spec.long)
        };
        let mut help = spec.help.to_string();
        if let Some(default) = spec.default {
            help.push_str(&format!(" (default: {default})"));
        }
        text.push_str(&format!("  {name:<22}{help}\n"));
    }
    text
}
