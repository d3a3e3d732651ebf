//! Configuration file loading
//!
//! The config file is TOML and every field is optional:
//!
//! ```toml
//! log_level = "debug"
//! log_file = "/tmp/calctty.log"
//!
//! [keys]
//! clear = "cC"
//! clear_history = "hH"
//! ```
//!
//! Without `--config`, the file is looked up at
//! `<config dir>/calctty/config.toml` and silently skipped if absent.

use crate::input::keymap::{KeyBindings, Keymap, KeymapError};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid key bindings: {0}")]
    Keys(#[from] KeymapError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `calctty=debug`
    pub log_level: String,

    /// Where log output goes; logging is off in the TUI without one
    pub log_file: Option<PathBuf>,

    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the keymap described by the `[keys]` table
    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        Ok(Keymap::with_overrides(&self.keys)?)
    }
}

/// `<config dir>/calctty/config.toml`, if the platform has a config dir
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calctty").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Input;

    fn parse(contents: &str) -> Result<Config, ConfigError> {
        Config::parse(contents, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_full_file() {
        let config = parse(
            r#"
            log_level = "debug"
            log_file = "/tmp/calctty.log"

            [keys]
            clear = "e"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/calctty.log")));
        let keymap = config.keymap().unwrap();
        assert_eq!(keymap.lookup('e'), Some(Input::Clear));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = parse("colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid config file test.toml"));
    }

    #[test]
    fn test_conflicting_keys() {
        let config = parse("[keys]\nequals = \"+\"").unwrap();
        assert!(matches!(config.keymap(), Err(ConfigError::Keys(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/calctty.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
