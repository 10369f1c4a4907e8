//! Input file configuration.
//!
//! The CLI needs two files: synsets and hypernyms. They come from a JSON
//! config (default `lexnet.json`) and can be overridden per invocation with
//! `--synsets` / `--hypernyms`. Relative paths inside the config file are
//! resolved against the directory holding it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "lexnet.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no {0} file configured (pass --{0} or create lexnet.json)")]
    Missing(&'static str),
}

/// Paths of the taxonomy input files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexnetConfig {
    pub synsets: PathBuf,
    pub hypernyms: PathBuf,
}

impl Default for LexnetConfig {
    fn default() -> Self {
        Self {
            synsets: PathBuf::from("synsets.txt"),
            hypernyms: PathBuf::from("hypernyms.txt"),
        }
    }
}

/// The on-disk form, where either path may be left out.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    synsets: Option<PathBuf>,
    hypernyms: Option<PathBuf>,
}

impl LexnetConfig {
    /// Resolves the effective configuration.
    ///
    /// `config` names an explicit config file, which must exist. Without it
    /// `lexnet.json` is used if present. Flags win over file values.
    pub fn resolve(
        config: Option<&Path>,
        synsets: Option<PathBuf>,
        hypernyms: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let file = match config {
            Some(path) => Some(load(path)?),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Some(load(path)?)
                } else {
                    None
                }
            }
        };
        let (from_file_synsets, from_file_hypernyms) = file
            .map(|f| (f.synsets, f.hypernyms))
            .unwrap_or_default();

        let resolved = Self {
            synsets: synsets
                .or(from_file_synsets)
                .ok_or(ConfigError::Missing("synsets"))?,
            hypernyms: hypernyms
                .or(from_file_hypernyms)
                .ok_or(ConfigError::Missing("hypernyms"))?,
        };
        debug!("Resolved config: {:?}", resolved);
        Ok(resolved)
    }

    /// Pretty JSON, as written by `lexnet init`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn load(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut file: ConfigFile =
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    file.synsets = file.synsets.map(|p| base.join(p));
    file.hypernyms = file.hypernyms.map(|p| base.join(p));
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explicit_config() {
        let config = LexnetConfig::resolve(
            Some(Path::new("/definitely/not/here.json")),
            Some("a.txt".into()),
            Some("b.txt".into()),
        );
        // An explicit config file must exist, even if flags cover everything
        assert!(matches!(config, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_file_paths_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexnet.json");
        fs::write(&path, r#"{"synsets": "s.txt", "hypernyms": "data/h.txt"}"#).unwrap();

        let config = LexnetConfig::resolve(Some(&path), None, None).unwrap();
        assert_eq!(config.synsets, dir.path().join("s.txt"));
        assert_eq!(config.hypernyms, dir.path().join("data/h.txt"));
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"synsets": "s.txt", "hypernyms": "h.txt"}"#).unwrap();

        let config =
            LexnetConfig::resolve(Some(&path), Some(PathBuf::from("/tmp/x.txt")), None).unwrap();
        assert_eq!(config.synsets, PathBuf::from("/tmp/x.txt"));
        assert_eq!(config.hypernyms, dir.path().join("h.txt"));
    }

    #[test]
    fn test_partial_file_reports_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexnet.json");
        fs::write(&path, r#"{"synsets": "s.txt"}"#).unwrap();

        let err = LexnetConfig::resolve(Some(&path), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("hypernyms")));
        assert!(err.to_string().contains("--hypernyms"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexnet.json");
        fs::write(&path, "{ not json").unwrap();

        let err = LexnetConfig::resolve(Some(&path), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_default_roundtrip() {
        let json = LexnetConfig::default().to_json().unwrap();
        let back: LexnetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LexnetConfig::default());
    }
}
